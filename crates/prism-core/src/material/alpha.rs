// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The opacity axis of translucent materials.

/// How a translucent material computes its opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alpha {
    /// A constant opacity.
    Constant {
        /// Opacity in `[0, 1]`.
        opacity: f32,
    },
    /// Opacity that grows as the surface turns away from the viewer
    /// (`1 - dot(view, normal)`), scaled by `opacity`.
    OneMinusDot {
        /// Opacity scale in `[0, 1]`.
        opacity: f32,
    },
}

impl Alpha {
    /// The identity token of this variant.
    pub fn code(&self) -> &'static str {
        match self {
            Alpha::Constant { .. } => "AC",
            Alpha::OneMinusDot { .. } => "AD",
        }
    }

    /// A stable, human-readable label for this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Alpha::Constant { .. } => "Alpha::Constant",
            Alpha::OneMinusDot { .. } => "Alpha::OneMinusDot",
        }
    }

    /// The opacity parameter, whatever the variant.
    pub fn opacity(&self) -> f32 {
        match *self {
            Alpha::Constant { opacity } | Alpha::OneMinusDot { opacity } => opacity,
        }
    }
}
