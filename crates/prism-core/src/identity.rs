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

//! Code identities: deterministic names for (light, material) shapes.
//!
//! An identity is `<light-code>_<material-code>`, where an absent light is
//! written `U`. It depends only on the *structural tags* of its inputs, never
//! on parameter values, because generated shaders take every value as a
//! parameter. It doubles as the shader cache key and as the generated
//! module's name, so it is restricted to ASCII letters, digits and `_` and
//! always starts with a letter.
//!
//! Distinct shapes never collide: each axis token has a unique leading letter
//! within its composite, axes appear in a fixed order, and tokens are
//! separated by `_`.

use crate::{light::Light, material::Material};
use std::fmt;

/// The light token used for unlit shaders.
pub const UNLIT_CODE: &str = "U";

/// A deterministic identifier for a (light, material) shape.
///
/// # Examples
///
/// ```
/// use prism_core::identity::CodeIdentity;
/// use prism_core::material::{Material, Normal, Refractive, TranslucentRefractive};
///
/// let glass: Material =
///     TranslucentRefractive::new(Normal::Vertex, Refractive::Masked { scale: 0.1 }).into();
/// assert_eq!(CodeIdentity::unlit(&glass).as_str(), "U_TF_NV_RM");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodeIdentity(String);

impl CodeIdentity {
    /// The identity of `material` drawn under `light`, or unlit for `None`.
    pub fn new(light: Option<&Light>, material: &Material) -> Self {
        let light_code = light.map_or(UNLIT_CODE, Light::code);
        Self(format!("{light_code}_{}", material.code()))
    }

    /// The identity of `material` drawn under `light`.
    pub fn lit(light: &Light, material: &Material) -> Self {
        Self::new(Some(light), material)
    }

    /// The identity of `material` drawn without lights.
    pub fn unlit(material: &Material) -> Self {
        Self::new(None, material)
    }

    /// The identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this identity names an unlit shader.
    pub fn is_unlit(&self) -> bool {
        self.0
            .strip_prefix(UNLIT_CODE)
            .is_some_and(|rest| rest.starts_with('_'))
    }
}

impl fmt::Display for CodeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CodeIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        light::{DirectionalLight, LightId},
        material::{Albedo, Depth, Emissive, Environment, Normal, OpaqueRegular, Specular},
        math::{LinearRgba, Vec3},
    };

    fn opaque(colour: LinearRgba) -> Material {
        OpaqueRegular::new(
            Albedo::Untextured { colour },
            Depth::Constant,
            Emissive::None,
            Environment::None,
            Normal::Vertex,
            Specular::None,
        )
        .unwrap()
        .into()
    }

    fn sun(id: u32, colour: LinearRgba) -> Light {
        DirectionalLight::new(LightId(id), -Vec3::Y, colour, 1.0)
            .unwrap()
            .into()
    }

    #[test]
    fn identity_ignores_parameter_values() {
        let a = CodeIdentity::lit(&sun(0, LinearRgba::RED), &opaque(LinearRgba::RED));
        let b = CodeIdentity::lit(&sun(9, LinearRgba::BLUE), &opaque(LinearRgba::BLUE));
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "LD_O_BC_DC_NV");
    }

    #[test]
    fn unlit_identity_uses_unlit_token() {
        let id = CodeIdentity::unlit(&opaque(LinearRgba::WHITE));
        assert_eq!(id.to_string(), "U_O_BC_DC_NV");
        assert!(id.is_unlit());
        assert!(!CodeIdentity::lit(&sun(0, LinearRgba::WHITE), &opaque(LinearRgba::WHITE))
            .is_unlit());
    }

    #[test]
    fn identity_is_a_safe_module_name() {
        let id = CodeIdentity::lit(&sun(0, LinearRgba::WHITE), &opaque(LinearRgba::WHITE));
        assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        assert!(id.as_str().starts_with(|c: char| c.is_ascii_alphabetic()));
    }
}
