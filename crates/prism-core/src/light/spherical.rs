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

//! Spherical (point) lights.

use super::{error::positive, LightError, LightId};
use crate::math::{LinearRgba, Vec3};

/// A light emitting in all directions from a point, attenuated to zero at
/// `radius` with an exponential `falloff`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalLight {
    id: LightId,
    colour: LinearRgba,
    intensity: f32,
    position: Vec3,
    radius: f32,
    falloff: f32,
}

impl SphericalLight {
    /// Creates a spherical light.
    ///
    /// # Errors
    ///
    /// Returns [`LightError::InvalidRadius`] or [`LightError::InvalidFalloff`]
    /// for non-positive values.
    pub fn new(
        id: LightId,
        colour: LinearRgba,
        intensity: f32,
        position: Vec3,
        radius: f32,
        falloff: f32,
    ) -> Result<Self, LightError> {
        Ok(Self {
            id,
            colour,
            intensity,
            position,
            radius: positive(radius, LightError::InvalidRadius)?,
            falloff: positive(falloff, LightError::InvalidFalloff)?,
        })
    }

    /// The light's identifier.
    pub fn id(&self) -> LightId {
        self.id
    }
    /// The light color.
    pub fn colour(&self) -> LinearRgba {
        self.colour
    }
    /// The intensity multiplier.
    pub fn intensity(&self) -> f32 {
        self.intensity
    }
    /// World-space position.
    pub fn position(&self) -> Vec3 {
        self.position
    }
    /// Distance at which the light's contribution reaches zero.
    pub fn radius(&self) -> f32 {
        self.radius
    }
    /// Attenuation exponent.
    pub fn falloff(&self) -> f32 {
        self.falloff
    }
}
