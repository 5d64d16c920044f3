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

//! The emissive (self-illumination) axis.

use crate::asset::Texture2D;

/// How much light a surface emits on its own.
///
/// Emission scales the surface color and is added after lighting, so an
/// emissive surface stays visible in an unlit region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Emissive {
    /// No emission.
    #[default]
    None,
    /// A constant emission amount.
    Constant {
        /// Emission amount; values above `1.0` are HDR.
        amount: f32,
    },
    /// Emission amount modulated by a texture.
    Mapped {
        /// Emission amount; values above `1.0` are HDR.
        amount: f32,
        /// The emission map.
        texture: Texture2D,
    },
}

impl Emissive {
    /// The identity token of this variant, or `None` for [`Emissive::None`].
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Emissive::None => None,
            Emissive::Constant { .. } => Some("EC"),
            Emissive::Mapped { .. } => Some("EM"),
        }
    }

    /// A stable, human-readable label for this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Emissive::None => "Emissive::None",
            Emissive::Constant { .. } => "Emissive::Constant",
            Emissive::Mapped { .. } => "Emissive::Mapped",
        }
    }
}
