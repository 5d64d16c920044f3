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

//! The refraction axis of refractive materials.

/// Screen-space refraction of whatever was rendered behind the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Refractive {
    /// Refraction limited to the pixels covered by the refractive mask.
    Masked {
        /// Displacement scale.
        scale: f32,
    },
    /// Refraction of the whole scene image.
    Unmasked {
        /// Displacement scale.
        scale: f32,
    },
}

impl Refractive {
    /// The identity token of this variant.
    pub fn code(&self) -> &'static str {
        match self {
            Refractive::Masked { .. } => "RM",
            Refractive::Unmasked { .. } => "RU",
        }
    }

    /// A stable, human-readable label for this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Refractive::Masked { .. } => "Refractive::Masked",
            Refractive::Unmasked { .. } => "Refractive::Unmasked",
        }
    }
}
