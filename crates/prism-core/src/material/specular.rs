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

//! The specular highlight axis.

use crate::{asset::Texture2D, math::LinearRgba};

/// Specular reflection of light sources.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Specular {
    /// No specular highlights.
    #[default]
    None,
    /// Constant specular color and exponent.
    Constant {
        /// Specular color.
        colour: LinearRgba,
        /// Phong exponent.
        exponent: f32,
    },
    /// Specular color modulated by a specular map.
    Mapped {
        /// Specular color.
        colour: LinearRgba,
        /// Phong exponent.
        exponent: f32,
        /// The specular map.
        texture: Texture2D,
    },
}

impl Specular {
    /// The identity token of this variant, or `None` for [`Specular::None`].
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Specular::None => None,
            Specular::Constant { .. } => Some("SC"),
            Specular::Mapped { .. } => Some("SM"),
        }
    }

    /// A stable, human-readable label for this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Specular::None => "Specular::None",
            Specular::Constant { .. } => "Specular::Constant",
            Specular::Mapped { .. } => "Specular::Mapped",
        }
    }

    /// Returns `true` unless this is [`Specular::None`].
    pub fn is_some(&self) -> bool {
        !matches!(self, Specular::None)
    }
}
