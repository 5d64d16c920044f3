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

//! Composite materials: fixed bundles of axis values per render-pass role.

use super::{
    Albedo, Alpha, Depth, Emissive, Environment, MaterialError, Normal, Refractive, Specular,
};
use crate::{math::Mat3, rules};

/// Joins a shape prefix with the tokens of the axes that are present.
fn join_code<'a>(prefix: &str, tokens: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let mut code = String::from(prefix);
    for token in tokens.into_iter().flatten() {
        code.push('_');
        code.push_str(token);
    }
    code
}

/// An opaque material rendered in the regular lit/unlit passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpaqueRegular {
    uv_transform: Mat3,
    albedo: Albedo,
    depth: Depth,
    emissive: Emissive,
    environment: Environment,
    normal: Normal,
    specular: Specular,
}

impl OpaqueRegular {
    /// Creates an opaque material, rejecting illegal axis combinations.
    ///
    /// # Errors
    ///
    /// Returns a [`MaterialError`] when the depth mode needs a textured albedo
    /// or the environment needs a specular map that is not present.
    pub fn new(
        albedo: Albedo,
        depth: Depth,
        emissive: Emissive,
        environment: Environment,
        normal: Normal,
        specular: Specular,
    ) -> Result<Self, MaterialError> {
        rules::check_depth_material(&albedo, &depth)?;
        rules::check_environment_specular(&environment, &specular)?;
        Ok(Self {
            uv_transform: Mat3::IDENTITY,
            albedo,
            depth,
            emissive,
            environment,
            normal,
            specular,
        })
    }

    /// Replaces the texture-coordinate transform.
    pub fn with_uv_transform(self, uv_transform: Mat3) -> Self {
        Self {
            uv_transform,
            ..self
        }
    }

    /// The texture-coordinate transform.
    pub fn uv_transform(&self) -> &Mat3 {
        &self.uv_transform
    }
    /// The albedo axis.
    pub fn albedo(&self) -> &Albedo {
        &self.albedo
    }
    /// The depth axis.
    pub fn depth(&self) -> &Depth {
        &self.depth
    }
    /// The emissive axis.
    pub fn emissive(&self) -> &Emissive {
        &self.emissive
    }
    /// The environment axis.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }
    /// The normal axis.
    pub fn normal(&self) -> &Normal {
        &self.normal
    }
    /// The specular axis.
    pub fn specular(&self) -> &Specular {
        &self.specular
    }

    /// The identity token of this material's shape.
    pub fn code(&self) -> String {
        join_code(
            "O",
            [
                Some(self.albedo.code()),
                Some(self.depth.code()),
                self.emissive.code(),
                self.environment.code(),
                Some(self.normal.code()),
                self.specular.code(),
            ],
        )
    }
}

/// A translucent material with the full set of surface axes plus opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslucentRegular {
    uv_transform: Mat3,
    albedo: Albedo,
    alpha: Alpha,
    emissive: Emissive,
    environment: Environment,
    normal: Normal,
    specular: Specular,
}

impl TranslucentRegular {
    /// Creates a translucent material, rejecting illegal axis combinations.
    ///
    /// # Errors
    ///
    /// Returns a [`MaterialError`] when the environment needs a specular map
    /// that is not present.
    pub fn new(
        albedo: Albedo,
        alpha: Alpha,
        emissive: Emissive,
        environment: Environment,
        normal: Normal,
        specular: Specular,
    ) -> Result<Self, MaterialError> {
        rules::check_environment_specular(&environment, &specular)?;
        Ok(Self {
            uv_transform: Mat3::IDENTITY,
            albedo,
            alpha,
            emissive,
            environment,
            normal,
            specular,
        })
    }

    /// Replaces the texture-coordinate transform.
    pub fn with_uv_transform(self, uv_transform: Mat3) -> Self {
        Self {
            uv_transform,
            ..self
        }
    }

    /// The texture-coordinate transform.
    pub fn uv_transform(&self) -> &Mat3 {
        &self.uv_transform
    }
    /// The albedo axis.
    pub fn albedo(&self) -> &Albedo {
        &self.albedo
    }
    /// The opacity axis.
    pub fn alpha(&self) -> &Alpha {
        &self.alpha
    }
    /// The emissive axis.
    pub fn emissive(&self) -> &Emissive {
        &self.emissive
    }
    /// The environment axis.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }
    /// The normal axis.
    pub fn normal(&self) -> &Normal {
        &self.normal
    }
    /// The specular axis.
    pub fn specular(&self) -> &Specular {
        &self.specular
    }

    /// The identity token of this material's shape.
    pub fn code(&self) -> String {
        join_code(
            "TR",
            [
                Some(self.alpha.code()),
                Some(self.albedo.code()),
                self.emissive.code(),
                self.environment.code(),
                Some(self.normal.code()),
                self.specular.code(),
            ],
        )
    }
}

/// A translucent material that only shows specular highlights, e.g. a glass
/// pane whose body is invisible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslucentSpecularOnly {
    uv_transform: Mat3,
    alpha: Alpha,
    normal: Normal,
    specular: Specular,
}

impl TranslucentSpecularOnly {
    /// Creates a specular-only material.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::SpecularOnlyWithoutSpecular`] for `Specular::None`.
    pub fn new(alpha: Alpha, normal: Normal, specular: Specular) -> Result<Self, MaterialError> {
        rules::check_specular_only(&specular)?;
        Ok(Self {
            uv_transform: Mat3::IDENTITY,
            alpha,
            normal,
            specular,
        })
    }

    /// Replaces the texture-coordinate transform.
    pub fn with_uv_transform(self, uv_transform: Mat3) -> Self {
        Self {
            uv_transform,
            ..self
        }
    }

    /// The texture-coordinate transform.
    pub fn uv_transform(&self) -> &Mat3 {
        &self.uv_transform
    }
    /// The opacity axis.
    pub fn alpha(&self) -> &Alpha {
        &self.alpha
    }
    /// The normal axis.
    pub fn normal(&self) -> &Normal {
        &self.normal
    }
    /// The specular axis. Never `Specular::None`.
    pub fn specular(&self) -> &Specular {
        &self.specular
    }

    /// The identity token of this material's shape.
    pub fn code(&self) -> String {
        join_code(
            "TS",
            [
                Some(self.alpha.code()),
                Some(self.normal.code()),
                self.specular.code(),
            ],
        )
    }
}

/// A refractive material, drawn unlit over the already-rendered scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslucentRefractive {
    uv_transform: Mat3,
    normal: Normal,
    refractive: Refractive,
}

impl TranslucentRefractive {
    /// Creates a refractive material. Every normal/refractive pair is legal.
    pub fn new(normal: Normal, refractive: Refractive) -> Self {
        Self {
            uv_transform: Mat3::IDENTITY,
            normal,
            refractive,
        }
    }

    /// Replaces the texture-coordinate transform.
    pub fn with_uv_transform(self, uv_transform: Mat3) -> Self {
        Self {
            uv_transform,
            ..self
        }
    }

    /// The texture-coordinate transform.
    pub fn uv_transform(&self) -> &Mat3 {
        &self.uv_transform
    }
    /// The normal axis.
    pub fn normal(&self) -> &Normal {
        &self.normal
    }
    /// The refraction axis.
    pub fn refractive(&self) -> &Refractive {
        &self.refractive
    }

    /// The identity token of this material's shape.
    pub fn code(&self) -> String {
        join_code(
            "TF",
            [Some(self.normal.code()), Some(self.refractive.code())],
        )
    }
}
