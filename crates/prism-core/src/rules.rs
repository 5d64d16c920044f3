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

//! Validity rules: pure predicates rejecting illegal axis combinations.
//!
//! Every rule is a total function of its arguments. The `is_valid_*`
//! predicates answer yes/no and back the case enumerator; the `check_*`
//! companions return a [`MaterialError`] describing the violation and back the
//! composite constructors. Both are defined in terms of the same match so they
//! can never disagree.

use crate::{
    light::Light,
    material::{
        Albedo, Alpha, Depth, Emissive, Environment, Material, MaterialError, Normal, Specular,
    },
};

/// A mapped reflection reads its mix factor from the specular map, so it needs
/// [`Specular::Mapped`]. Every other pair is legal.
pub fn is_valid_environment_specular(environment: &Environment, specular: &Specular) -> bool {
    check_environment_specular(environment, specular).is_ok()
}

/// See [`is_valid_environment_specular`].
pub fn check_environment_specular(
    environment: &Environment,
    specular: &Specular,
) -> Result<(), MaterialError> {
    match (environment, specular) {
        (Environment::ReflectionMapped { .. }, Specular::None | Specular::Constant { .. }) => {
            Err(MaterialError::EnvironmentRequiresSpecularMap {
                environment: environment.name(),
                specular: specular.name(),
            })
        }
        _ => Ok(()),
    }
}

/// Alpha-tested depth reads the albedo texture's alpha, so it needs
/// [`Albedo::Textured`].
pub fn is_valid_depth_material(albedo: &Albedo, depth: &Depth) -> bool {
    check_depth_material(albedo, depth).is_ok()
}

/// See [`is_valid_depth_material`].
pub fn check_depth_material(albedo: &Albedo, depth: &Depth) -> Result<(), MaterialError> {
    match (albedo, depth) {
        (Albedo::Untextured { .. }, Depth::Alpha { .. }) => {
            Err(MaterialError::DepthRequiresTexturedAlbedo {
                depth: depth.name(),
                albedo: albedo.name(),
            })
        }
        _ => Ok(()),
    }
}

/// A specular-only material with no specular term would be invisible.
pub fn is_valid_specular_only(specular: &Specular) -> bool {
    check_specular_only(specular).is_ok()
}

/// See [`is_valid_specular_only`].
pub fn check_specular_only(specular: &Specular) -> Result<(), MaterialError> {
    match specular {
        Specular::None => Err(MaterialError::SpecularOnlyWithoutSpecular),
        Specular::Constant { .. } | Specular::Mapped { .. } => Ok(()),
    }
}

/// Composed predicate for the axes of an [`OpaqueRegular`](crate::material::OpaqueRegular).
///
/// Emissive and normal take part in the product space but constrain nothing.
pub fn is_valid_opaque(
    albedo: &Albedo,
    depth: &Depth,
    _emissive: &Emissive,
    environment: &Environment,
    _normal: &Normal,
    specular: &Specular,
) -> bool {
    is_valid_depth_material(albedo, depth) && is_valid_environment_specular(environment, specular)
}

/// Composed predicate for the axes of a
/// [`TranslucentRegular`](crate::material::TranslucentRegular).
pub fn is_valid_translucent(
    _albedo: &Albedo,
    _alpha: &Alpha,
    _emissive: &Emissive,
    environment: &Environment,
    _normal: &Normal,
    specular: &Specular,
) -> bool {
    is_valid_environment_specular(environment, specular)
}

/// Whether `material` may be drawn with `light` (`None` meaning unlit).
///
/// Specular-only materials are only visible under a light; refractive
/// materials are always drawn unlit. Shadow-casting projective lights only
/// reach opaque materials.
pub fn is_valid_light_material(light: Option<&Light>, material: &Material) -> bool {
    match (light, material) {
        (None, Material::TranslucentSpecularOnly(_)) => false,
        (Some(_), Material::TranslucentRefractive(_)) => false,
        (Some(Light::Projective(p)), m) if p.shadow().is_some() => {
            matches!(m, Material::OpaqueRegular(_))
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        asset::{Texture2D, TextureCube},
        light::{DirectionalLight, LightId},
        material::{Refractive, TranslucentRefractive},
        math::{LinearRgba, Vec3},
    };

    fn cube() -> TextureCube {
        TextureCube::named("sky")
    }

    #[test]
    fn mapped_environment_needs_specular_map() {
        let env = Environment::ReflectionMapped {
            mix: 0.5,
            cubemap: cube(),
        };
        assert!(!is_valid_environment_specular(&env, &Specular::None));
        assert!(!is_valid_environment_specular(
            &env,
            &Specular::Constant {
                colour: LinearRgba::WHITE,
                exponent: 4.0
            }
        ));
        assert!(is_valid_environment_specular(
            &env,
            &Specular::Mapped {
                colour: LinearRgba::WHITE,
                exponent: 4.0,
                texture: Texture2D::named("s"),
            }
        ));
    }

    #[test]
    fn plain_reflection_is_unconstrained() {
        let env = Environment::Reflection {
            mix: 0.5,
            cubemap: cube(),
        };
        assert!(is_valid_environment_specular(&env, &Specular::None));
        assert!(is_valid_environment_specular(&Environment::None, &Specular::None));
    }

    #[test]
    fn alpha_depth_needs_textured_albedo() {
        let textured = Albedo::Textured {
            colour: LinearRgba::WHITE,
            mix: 1.0,
            texture: Texture2D::named("a"),
        };
        let alpha = Depth::Alpha { threshold: 0.5 };
        assert!(is_valid_depth_material(&textured, &alpha));
        assert!(!is_valid_depth_material(&Albedo::default(), &alpha));
        assert!(is_valid_depth_material(&Albedo::default(), &Depth::Constant));
    }

    #[test]
    fn check_and_predicate_agree() {
        let env = Environment::ReflectionMapped {
            mix: 0.5,
            cubemap: cube(),
        };
        let err = check_environment_specular(&env, &Specular::None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Environment::ReflectionMapped requires Specular::Mapped, found Specular::None"
        );
    }

    #[test]
    fn refractive_materials_are_unlit_only() {
        let light: Light = DirectionalLight::new(LightId(0), -Vec3::Y, LinearRgba::WHITE, 1.0)
            .unwrap()
            .into();
        let refractive: Material =
            TranslucentRefractive::new(Normal::Vertex, Refractive::Unmasked { scale: 1.0 }).into();
        assert!(!is_valid_light_material(Some(&light), &refractive));
        assert!(is_valid_light_material(None, &refractive));
    }

    #[test]
    fn shadowed_projective_lights_reach_opaque_materials_only() {
        let lights = crate::cases::lights();
        let by_code = |code: &str| {
            lights
                .iter()
                .find(|l| l.code() == code)
                .expect("representative light")
        };
        let translucent: Material = crate::cases::translucent_materials()
            .next()
            .expect("translucent material")
            .into();
        let highlight: Material = crate::cases::specular_only_materials()
            .next()
            .expect("specular-only material")
            .into();
        let opaque: Material = crate::cases::opaque_materials()
            .next()
            .expect("opaque material")
            .into();

        for code in ["LPSB", "LPSV"] {
            let light = by_code(code);
            assert!(is_valid_light_material(Some(light), &opaque));
            assert!(!is_valid_light_material(Some(light), &translucent));
            assert!(!is_valid_light_material(Some(light), &highlight));
        }
        for code in ["LD", "LS", "LP"] {
            let light = by_code(code);
            assert!(is_valid_light_material(Some(light), &translucent));
            assert!(is_valid_light_material(Some(light), &highlight));
        }
    }
}
