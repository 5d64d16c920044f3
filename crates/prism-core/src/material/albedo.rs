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

//! The albedo (base surface color) axis.

use crate::{asset::Texture2D, math::LinearRgba};

/// How a material computes its base surface color.
///
/// # Examples
///
/// ```
/// use prism_core::material::Albedo;
/// use prism_core::math::LinearRgba;
///
/// let flat = Albedo::Untextured { colour: LinearRgba::RED };
/// assert_eq!(flat.code(), "BC");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Albedo {
    /// A constant color.
    Untextured {
        /// The surface color.
        colour: LinearRgba,
    },
    /// A texture sample blended with a constant color.
    Textured {
        /// The constant color the texture is mixed with.
        colour: LinearRgba,
        /// Blend factor: `0.0` is pure `colour`, `1.0` is pure texture.
        mix: f32,
        /// The albedo map.
        texture: Texture2D,
    },
}

impl Albedo {
    /// The identity token of this variant.
    pub fn code(&self) -> &'static str {
        match self {
            Albedo::Untextured { .. } => "BC",
            Albedo::Textured { .. } => "BT",
        }
    }

    /// A stable, human-readable label for this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Albedo::Untextured { .. } => "Albedo::Untextured",
            Albedo::Textured { .. } => "Albedo::Textured",
        }
    }

    /// Returns `true` if the albedo samples a texture.
    pub fn is_textured(&self) -> bool {
        matches!(self, Albedo::Textured { .. })
    }
}

impl Default for Albedo {
    fn default() -> Self {
        Albedo::Untextured {
            colour: LinearRgba::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textured_reports_texture() {
        let a = Albedo::Textured {
            colour: LinearRgba::WHITE,
            mix: 0.5,
            texture: Texture2D::named("bricks"),
        };
        assert!(a.is_textured());
        assert_eq!(a.code(), "BT");
        assert!(!Albedo::default().is_textured());
    }
}
