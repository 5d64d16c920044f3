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

//! The material half of the component variant model.
//!
//! A material is built from independent *axes* (albedo, alpha, depth,
//! emissive, environment, normal, specular, refractive). Each axis is a closed
//! enum whose variants are the cases a shader has to handle. Axes are bundled
//! into one of four composite shapes, each tied to a render-pass role:
//!
//! - [`OpaqueRegular`]: the opaque lit and unlit passes.
//! - [`TranslucentRegular`]: blended surfaces with every regular axis.
//! - [`TranslucentSpecularOnly`]: blended highlights only; always lit.
//! - [`TranslucentRefractive`]: screen-space refraction; always unlit.
//!
//! Composites validate their axes once, on construction, and are immutable
//! afterwards.

mod albedo;
mod alpha;
mod composite;
mod depth;
mod emissive;
mod environment;
mod error;
mod normal;
mod refractive;
mod specular;

pub use albedo::*;
pub use alpha::*;
pub use composite::*;
pub use depth::*;
pub use emissive::*;
pub use environment::*;
pub use error::*;
pub use normal::*;
pub use refractive::*;
pub use specular::*;

use crate::math::Mat3;

/// A validated composite material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// See [`OpaqueRegular`].
    OpaqueRegular(OpaqueRegular),
    /// See [`TranslucentRegular`].
    TranslucentRegular(TranslucentRegular),
    /// See [`TranslucentSpecularOnly`].
    TranslucentSpecularOnly(TranslucentSpecularOnly),
    /// See [`TranslucentRefractive`].
    TranslucentRefractive(TranslucentRefractive),
}

impl Material {
    /// The identity token of this material's shape.
    ///
    /// Two materials that differ only in parameter values (colors, amounts,
    /// textures) share a code.
    pub fn code(&self) -> String {
        match self {
            Material::OpaqueRegular(m) => m.code(),
            Material::TranslucentRegular(m) => m.code(),
            Material::TranslucentSpecularOnly(m) => m.code(),
            Material::TranslucentRefractive(m) => m.code(),
        }
    }

    /// A stable, human-readable label for the composite shape.
    pub fn name(&self) -> &'static str {
        match self {
            Material::OpaqueRegular(_) => "OpaqueRegular",
            Material::TranslucentRegular(_) => "TranslucentRegular",
            Material::TranslucentSpecularOnly(_) => "TranslucentSpecularOnly",
            Material::TranslucentRefractive(_) => "TranslucentRefractive",
        }
    }

    /// The normal axis, which every composite carries.
    pub fn normal(&self) -> &Normal {
        match self {
            Material::OpaqueRegular(m) => m.normal(),
            Material::TranslucentRegular(m) => m.normal(),
            Material::TranslucentSpecularOnly(m) => m.normal(),
            Material::TranslucentRefractive(m) => m.normal(),
        }
    }

    /// The texture-coordinate transform.
    pub fn uv_transform(&self) -> &Mat3 {
        match self {
            Material::OpaqueRegular(m) => m.uv_transform(),
            Material::TranslucentRegular(m) => m.uv_transform(),
            Material::TranslucentSpecularOnly(m) => m.uv_transform(),
            Material::TranslucentRefractive(m) => m.uv_transform(),
        }
    }

    /// Returns `true` for every shape except [`Material::OpaqueRegular`].
    pub fn is_translucent(&self) -> bool {
        !matches!(self, Material::OpaqueRegular(_))
    }
}

impl From<OpaqueRegular> for Material {
    fn from(m: OpaqueRegular) -> Self {
        Material::OpaqueRegular(m)
    }
}

impl From<TranslucentRegular> for Material {
    fn from(m: TranslucentRegular) -> Self {
        Material::TranslucentRegular(m)
    }
}

impl From<TranslucentSpecularOnly> for Material {
    fn from(m: TranslucentSpecularOnly) -> Self {
        Material::TranslucentSpecularOnly(m)
    }
}

impl From<TranslucentRefractive> for Material {
    fn from(m: TranslucentRefractive) -> Self {
        Material::TranslucentRefractive(m)
    }
}
