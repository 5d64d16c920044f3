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

//! The surface normal axis.

use crate::asset::Texture2D;

/// Where the shading normal comes from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Normal {
    /// The interpolated vertex normal.
    #[default]
    Vertex,
    /// A tangent-space normal map.
    Mapped {
        /// The normal map.
        texture: Texture2D,
    },
}

impl Normal {
    /// The identity token of this variant.
    pub fn code(&self) -> &'static str {
        match self {
            Normal::Vertex => "NV",
            Normal::Mapped { .. } => "NM",
        }
    }

    /// A stable, human-readable label for this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Normal::Vertex => "Normal::Vertex",
            Normal::Mapped { .. } => "Normal::Mapped",
        }
    }

    /// Returns `true` for a normal-mapped surface.
    pub fn is_mapped(&self) -> bool {
        matches!(self, Normal::Mapped { .. })
    }
}
