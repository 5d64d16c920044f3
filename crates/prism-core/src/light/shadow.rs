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

//! Shadow mapping configurations for projective lights.

use super::{error::positive, LightError};

/// Texture filtering applied when sampling a shadow map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShadowFilter {
    /// Nearest-neighbour sampling.
    Nearest,
    /// Bilinear sampling.
    #[default]
    Linear,
}

/// Describes the shadow map a light renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShadowMapDescription {
    size_exponent: u8,
    filter: ShadowFilter,
}

impl ShadowMapDescription {
    /// Largest accepted size exponent (a 16384x16384 map).
    pub const MAX_SIZE_EXPONENT: u8 = 14;

    /// Creates a description of a `2^size_exponent` square shadow map.
    ///
    /// # Errors
    ///
    /// Returns [`LightError::InvalidShadowMapSize`] unless the exponent is in `1..=14`.
    pub fn new(size_exponent: u8, filter: ShadowFilter) -> Result<Self, LightError> {
        if !(1..=Self::MAX_SIZE_EXPONENT).contains(&size_exponent) {
            return Err(LightError::InvalidShadowMapSize(size_exponent));
        }
        Ok(Self {
            size_exponent,
            filter,
        })
    }

    /// The size exponent.
    pub fn size_exponent(&self) -> u8 {
        self.size_exponent
    }
    /// The edge length of the map in texels.
    pub fn size(&self) -> u32 {
        1 << self.size_exponent
    }
    /// The sampling filter.
    pub fn filter(&self) -> ShadowFilter {
        self.filter
    }
}

/// Blur applied to a variance shadow map after it is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurParameters {
    size: f32,
    passes: u32,
    scale: f32,
}

impl BlurParameters {
    /// Creates blur parameters.
    ///
    /// # Errors
    ///
    /// Returns [`LightError::InvalidBlur`] for a non-positive size or scale.
    pub fn new(size: f32, passes: u32, scale: f32) -> Result<Self, LightError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(size) || !valid(scale) {
            return Err(LightError::InvalidBlur { size, scale });
        }
        Ok(Self {
            size,
            passes,
            scale,
        })
    }

    /// The blur kernel size in texels.
    pub fn size(&self) -> f32 {
        self.size
    }
    /// The number of blur passes; zero disables blurring.
    pub fn passes(&self) -> u32 {
        self.passes
    }
    /// The scale of the intermediate blur image relative to the map.
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

/// Basic depth-comparison shadows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowBasic {
    /// Depth bias applied before comparison.
    pub bias: f32,
    /// Lower bound of the shadow factor; `0.0` is fully black shadow.
    pub factor_min: f32,
    /// The shadow map.
    pub map: ShadowMapDescription,
}

/// Variance shadow mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowVariance {
    /// Lower bound of the shadow factor.
    pub factor_min: f32,
    /// Minimum variance, suppressing acne on flat receivers.
    pub minimum_variance: f32,
    /// Amount of light-bleeding reduction in `[0, 1)`.
    pub light_bleed_reduction: f32,
    /// Blur applied to the map.
    pub blur: BlurParameters,
    /// The shadow map.
    pub map: ShadowMapDescription,
}

impl ShadowVariance {
    /// Creates a variance shadow configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LightError::InvalidVariance`] if `minimum_variance` is not positive.
    pub fn new(
        factor_min: f32,
        minimum_variance: f32,
        light_bleed_reduction: f32,
        blur: BlurParameters,
        map: ShadowMapDescription,
    ) -> Result<Self, LightError> {
        Ok(Self {
            factor_min,
            minimum_variance: positive(minimum_variance, LightError::InvalidVariance)?,
            light_bleed_reduction,
            blur,
            map,
        })
    }
}

/// The shadow a projective light casts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shadow {
    /// See [`ShadowBasic`].
    Basic(ShadowBasic),
    /// See [`ShadowVariance`].
    Variance(ShadowVariance),
}

impl Shadow {
    /// The shadow map this configuration renders into.
    pub fn map(&self) -> &ShadowMapDescription {
        match self {
            Shadow::Basic(s) => &s.map,
            Shadow::Variance(s) => &s.map,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_size_is_power_of_two() {
        let d = ShadowMapDescription::new(10, ShadowFilter::Nearest).unwrap();
        assert_eq!(d.size(), 1024);
    }

    #[test]
    fn map_size_bounds() {
        assert_eq!(
            ShadowMapDescription::new(0, ShadowFilter::Linear),
            Err(LightError::InvalidShadowMapSize(0))
        );
        assert!(ShadowMapDescription::new(15, ShadowFilter::Linear).is_err());
        assert!(ShadowMapDescription::new(14, ShadowFilter::Linear).is_ok());
    }

    #[test]
    fn blur_requires_positive_size_and_scale() {
        assert!(BlurParameters::new(0.0, 1, 1.0).is_err());
        assert!(BlurParameters::new(1.0, 0, 0.5).is_ok());
    }
}
