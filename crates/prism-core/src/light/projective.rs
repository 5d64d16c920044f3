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

//! Projective lights: a texture projected through a frustum, optionally
//! casting shadows.

use super::{error::positive, LightError, LightId, Shadow};
use crate::{
    asset::Texture2D,
    math::{LinearRgba, Mat4, Quaternion, Vec3},
};

/// A light that projects `texture` through `projection` from `position`,
/// oriented by `orientation`.
///
/// Built with [`ProjectiveLightBuilder`], which rejects lights missing their
/// texture or projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectiveLight {
    id: LightId,
    colour: LinearRgba,
    intensity: f32,
    position: Vec3,
    orientation: Quaternion,
    projection: Mat4,
    texture: Texture2D,
    falloff: f32,
    range: f32,
    shadow: Option<Shadow>,
}

impl ProjectiveLight {
    /// Starts building a projective light with the given identifier.
    pub fn builder(id: LightId) -> ProjectiveLightBuilder {
        ProjectiveLightBuilder::new(id)
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
    /// World-space orientation.
    pub fn orientation(&self) -> Quaternion {
        self.orientation
    }
    /// The projection matrix of the light frustum.
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }
    /// The projected texture.
    pub fn texture(&self) -> Texture2D {
        self.texture
    }
    /// Attenuation exponent.
    pub fn falloff(&self) -> f32 {
        self.falloff
    }
    /// Distance at which the light's contribution reaches zero.
    pub fn range(&self) -> f32 {
        self.range
    }
    /// The shadow configuration, if the light casts shadows.
    pub fn shadow(&self) -> Option<&Shadow> {
        self.shadow.as_ref()
    }
}

/// Collects the fields of a [`ProjectiveLight`] and validates them on
/// [`build`](ProjectiveLightBuilder::build).
#[derive(Debug, Clone)]
pub struct ProjectiveLightBuilder {
    id: LightId,
    colour: LinearRgba,
    intensity: f32,
    position: Vec3,
    orientation: Quaternion,
    projection: Option<Mat4>,
    texture: Option<Texture2D>,
    falloff: f32,
    range: f32,
    shadow: Option<Shadow>,
}

impl ProjectiveLightBuilder {
    /// Creates a builder with a white, unit-intensity, shadowless light at
    /// the origin.
    pub fn new(id: LightId) -> Self {
        Self {
            id,
            colour: LinearRgba::WHITE,
            intensity: 1.0,
            position: Vec3::ZERO,
            orientation: Quaternion::IDENTITY,
            projection: None,
            texture: None,
            falloff: 1.0,
            range: 16.0,
            shadow: None,
        }
    }

    /// Sets the light color.
    pub fn colour(mut self, colour: LinearRgba) -> Self {
        self.colour = colour;
        self
    }

    /// Sets the intensity multiplier.
    pub fn intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    /// Sets the world-space position.
    pub fn position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Sets the world-space orientation.
    pub fn orientation(mut self, orientation: Quaternion) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the projection matrix. Required.
    pub fn projection(mut self, projection: Mat4) -> Self {
        self.projection = Some(projection);
        self
    }

    /// Sets the projected texture. Required.
    pub fn texture(mut self, texture: Texture2D) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Sets the attenuation exponent.
    pub fn falloff(mut self, falloff: f32) -> Self {
        self.falloff = falloff;
        self
    }

    /// Sets the maximum range.
    pub fn range(mut self, range: f32) -> Self {
        self.range = range;
        self
    }

    /// Sets or clears the shadow configuration.
    pub fn shadow(mut self, shadow: Option<Shadow>) -> Self {
        self.shadow = shadow;
        self
    }

    /// Validates the collected fields and builds the light.
    ///
    /// # Errors
    ///
    /// - [`LightError::MissingTexture`] / [`LightError::MissingProjection`]
    ///   when a required field was never set.
    /// - [`LightError::InvalidRange`] / [`LightError::InvalidFalloff`] for
    ///   non-positive values.
    pub fn build(self) -> Result<ProjectiveLight, LightError> {
        let texture = self.texture.ok_or(LightError::MissingTexture(self.id.0))?;
        let projection = self
            .projection
            .ok_or(LightError::MissingProjection(self.id.0))?;
        Ok(ProjectiveLight {
            id: self.id,
            colour: self.colour,
            intensity: self.intensity,
            position: self.position,
            orientation: self.orientation,
            projection,
            texture,
            falloff: positive(self.falloff, LightError::InvalidFalloff)?,
            range: positive(self.range, LightError::InvalidRange)?,
            shadow: self.shadow,
        })
    }
}
