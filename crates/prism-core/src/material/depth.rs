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

//! The depth-writing axis of opaque materials.

/// How an opaque material contributes to the depth buffer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Depth {
    /// Every fragment writes depth.
    #[default]
    Constant,
    /// Fragments whose albedo alpha is below `threshold` are discarded.
    ///
    /// Only legal with a textured albedo; see
    /// [`is_valid_depth_material`](crate::rules::is_valid_depth_material).
    Alpha {
        /// The alpha cutoff.
        threshold: f32,
    },
}

impl Depth {
    /// The identity token of this variant.
    pub fn code(&self) -> &'static str {
        match self {
            Depth::Constant => "DC",
            Depth::Alpha { .. } => "DA",
        }
    }

    /// A stable, human-readable label for this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Depth::Constant => "Depth::Constant",
            Depth::Alpha { .. } => "Depth::Alpha",
        }
    }
}
