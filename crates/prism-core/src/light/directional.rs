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

//! Directional lights.

use super::{LightError, LightId};
use crate::math::{LinearRgba, Vec3};

/// A light infinitely far away, illuminating along a single direction with
/// no falloff (e.g. the sun).
///
/// # Examples
///
/// ```
/// use prism_core::light::{DirectionalLight, LightId};
/// use prism_core::math::{LinearRgba, Vec3};
///
/// let sun = DirectionalLight::new(
///     LightId(0),
///     Vec3::new(0.0, -2.0, 0.0),
///     LinearRgba::WHITE,
///     1.0,
/// )
/// .unwrap();
/// assert_eq!(sun.direction(), Vec3::new(0.0, -1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    id: LightId,
    direction: Vec3,
    colour: LinearRgba,
    intensity: f32,
}

impl DirectionalLight {
    /// Creates a directional light. The direction is normalized.
    ///
    /// # Errors
    ///
    /// Returns [`LightError::DegenerateDirection`] for a zero-length direction.
    pub fn new(
        id: LightId,
        direction: Vec3,
        colour: LinearRgba,
        intensity: f32,
    ) -> Result<Self, LightError> {
        if direction.length_squared() <= f32::EPSILON {
            return Err(LightError::DegenerateDirection(id.0));
        }
        Ok(Self {
            id,
            direction: direction.normalize(),
            colour,
            intensity,
        })
    }

    /// The light's identifier.
    pub fn id(&self) -> LightId {
        self.id
    }
    /// The unit direction the light travels along.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }
    /// The light color.
    pub fn colour(&self) -> LinearRgba {
        self.colour
    }
    /// The intensity multiplier.
    pub fn intensity(&self) -> f32 {
        self.intensity
    }
}
