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

//! The light half of the component variant model.
//!
//! Lights are immutable once constructed. Constructors and the projective
//! builder validate their inputs and report a [`LightError`] naming the
//! offending field, so an invalid light never exists.

mod directional;
mod error;
mod projective;
mod shadow;
mod spherical;

pub use directional::*;
pub use error::LightError;
pub use projective::*;
pub use shadow::*;
pub use spherical::*;

use std::fmt;

/// Identifies a light within a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LightId(pub u32);

impl fmt::Display for LightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "light#{}", self.0)
    }
}

/// An enumeration of all supported light kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// See [`DirectionalLight`].
    Directional(DirectionalLight),
    /// See [`SphericalLight`].
    Spherical(SphericalLight),
    /// See [`ProjectiveLight`].
    Projective(ProjectiveLight),
}

impl Light {
    /// The light's identifier.
    pub fn id(&self) -> LightId {
        match self {
            Light::Directional(l) => l.id(),
            Light::Spherical(l) => l.id(),
            Light::Projective(l) => l.id(),
        }
    }

    /// The identity token of this light's shape.
    ///
    /// Projective lights are split by shadow kind because each kind needs a
    /// different shader.
    pub fn code(&self) -> &'static str {
        match self {
            Light::Directional(_) => "LD",
            Light::Spherical(_) => "LS",
            Light::Projective(l) => match l.shadow() {
                None => "LP",
                Some(Shadow::Basic(_)) => "LPSB",
                Some(Shadow::Variance(_)) => "LPSV",
            },
        }
    }

    /// A stable, human-readable label for this light's shape.
    pub fn name(&self) -> &'static str {
        match self {
            Light::Directional(_) => "Directional",
            Light::Spherical(_) => "Spherical",
            Light::Projective(l) => match l.shadow() {
                None => "Projective",
                Some(Shadow::Basic(_)) => "Projective::ShadowBasic",
                Some(Shadow::Variance(_)) => "Projective::ShadowVariance",
            },
        }
    }
}

impl From<DirectionalLight> for Light {
    fn from(l: DirectionalLight) -> Self {
        Light::Directional(l)
    }
}

impl From<SphericalLight> for Light {
    fn from(l: SphericalLight) -> Self {
        Light::Spherical(l)
    }
}

impl From<ProjectiveLight> for Light {
    fn from(l: ProjectiveLight) -> Self {
        Light::Projective(l)
    }
}
