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

//! Construction-time errors for lights.

/// A light could not be constructed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LightError {
    /// A projective light was built without its projected texture.
    #[error("projective light {0} is missing its projected texture")]
    MissingTexture(u32),
    /// A projective light was built without a projection matrix.
    #[error("projective light {0} is missing its projection matrix")]
    MissingProjection(u32),
    /// A directional light was given a zero-length direction.
    #[error("light {0} has a degenerate direction")]
    DegenerateDirection(u32),
    /// A radius was zero, negative or not finite.
    #[error("invalid light radius {0}")]
    InvalidRadius(f32),
    /// A range was zero, negative or not finite.
    #[error("invalid light range {0}")]
    InvalidRange(f32),
    /// A falloff exponent was zero, negative or not finite.
    #[error("invalid light falloff {0}")]
    InvalidFalloff(f32),
    /// A minimum variance that is zero, negative or not finite.
    #[error("invalid minimum shadow variance {0}")]
    InvalidVariance(f32),
    /// A shadow map size exponent outside `1..=14`.
    #[error("invalid shadow map size exponent {0}, expected 1..=14")]
    InvalidShadowMapSize(u8),
    /// A variance shadow blur with a non-positive size or scale.
    #[error("invalid shadow blur parameters (size {size}, scale {scale})")]
    InvalidBlur {
        /// The blur kernel size.
        size: f32,
        /// The blur image scale.
        scale: f32,
    },
}

/// Returns `value` if it is a finite, strictly positive number.
pub(crate) fn positive(value: f32, err: fn(f32) -> LightError) -> Result<f32, LightError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(err(value))
    }
}
