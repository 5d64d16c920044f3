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

//! Exhaustive enumeration of valid (light, material) shapes.
//!
//! Each axis contributes one representative value per variant. The product
//! spaces are walked lazily and filtered by the composed validity predicates
//! from [`crate::rules`], so adding a variant to an axis extends every
//! enumeration with no further changes here. Iteration order is fixed and
//! reproducible.

use crate::{
    asset::{Texture2D, TextureCube},
    identity::CodeIdentity,
    light::{
        BlurParameters, DirectionalLight, Light, LightError, LightId, ProjectiveLight, Shadow,
        ShadowBasic, ShadowFilter, ShadowMapDescription, ShadowVariance, SphericalLight,
    },
    material::{
        Albedo, Alpha, Depth, Emissive, Environment, Material, Normal, OpaqueRegular, Refractive,
        Specular, TranslucentRefractive, TranslucentRegular, TranslucentSpecularOnly,
    },
    math::{degrees_to_radians, LinearRgba, Mat4, Vec3},
    rules::{
        is_valid_light_material, is_valid_opaque, is_valid_specular_only, is_valid_translucent,
    },
};

/// One shader shape to generate: a material, optionally drawn under a light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Case {
    /// The light, or `None` for an unlit case.
    pub light: Option<Light>,
    /// The material.
    pub material: Material,
}

impl Case {
    /// The code identity of this case.
    pub fn identity(&self) -> CodeIdentity {
        CodeIdentity::new(self.light.as_ref(), &self.material)
    }
}

/// Representative albedos, one per variant.
pub fn albedos() -> [Albedo; 2] {
    [
        Albedo::Untextured {
            colour: LinearRgba::WHITE,
        },
        Albedo::Textured {
            colour: LinearRgba::WHITE,
            mix: 1.0,
            texture: Texture2D::named("albedo"),
        },
    ]
}

/// Representative alphas, one per variant.
pub fn alphas() -> [Alpha; 2] {
    [
        Alpha::Constant { opacity: 0.5 },
        Alpha::OneMinusDot { opacity: 0.5 },
    ]
}

/// Representative depth modes, one per variant.
pub fn depths() -> [Depth; 2] {
    [Depth::Constant, Depth::Alpha { threshold: 0.5 }]
}

/// Representative emissives, one per variant.
pub fn emissives() -> [Emissive; 3] {
    [
        Emissive::None,
        Emissive::Constant { amount: 1.0 },
        Emissive::Mapped {
            amount: 1.0,
            texture: Texture2D::named("emission"),
        },
    ]
}

/// Representative environments, one per variant.
pub fn environments() -> [Environment; 3] {
    let cubemap = TextureCube::named("environment");
    [
        Environment::None,
        Environment::Reflection { mix: 0.5, cubemap },
        Environment::ReflectionMapped { mix: 0.5, cubemap },
    ]
}

/// Representative normals, one per variant.
pub fn normals() -> [Normal; 2] {
    [
        Normal::Vertex,
        Normal::Mapped {
            texture: Texture2D::named("normal"),
        },
    ]
}

/// Representative speculars, one per variant.
pub fn speculars() -> [Specular; 3] {
    [
        Specular::None,
        Specular::Constant {
            colour: LinearRgba::WHITE,
            exponent: 64.0,
        },
        Specular::Mapped {
            colour: LinearRgba::WHITE,
            exponent: 64.0,
            texture: Texture2D::named("specular"),
        },
    ]
}

/// Representative refractives, one per variant.
pub fn refractives() -> [Refractive; 2] {
    [
        Refractive::Masked { scale: 0.1 },
        Refractive::Unmasked { scale: 0.1 },
    ]
}

fn representative_lights() -> Result<Vec<Light>, LightError> {
    let projection = Mat4::perspective_rh_zo(degrees_to_radians(90.0), 1.0, 0.1, 100.0)
        .unwrap_or(Mat4::IDENTITY);
    let map = ShadowMapDescription::new(10, ShadowFilter::Linear)?;
    let basic = Shadow::Basic(ShadowBasic {
        bias: 0.001,
        factor_min: 0.2,
        map,
    });
    let variance = Shadow::Variance(ShadowVariance::new(
        0.2,
        0.00002,
        0.2,
        BlurParameters::new(1.0, 1, 1.0)?,
        map,
    )?);

    let projective = |id: u32, shadow: Option<Shadow>| {
        ProjectiveLight::builder(LightId(id))
            .position(Vec3::new(0.0, 4.0, 0.0))
            .projection(projection)
            .texture(Texture2D::named("projection"))
            .shadow(shadow)
            .build()
    };

    Ok(vec![
        DirectionalLight::new(LightId(0), -Vec3::Y, LinearRgba::WHITE, 1.0)?.into(),
        SphericalLight::new(LightId(1), LinearRgba::WHITE, 1.0, Vec3::Y, 8.0, 1.0)?.into(),
        projective(2, None)?.into(),
        projective(3, Some(basic))?.into(),
        projective(4, Some(variance))?.into(),
    ])
}

/// Representative lights: one per light code.
///
/// In order: directional, spherical, projective without shadow, projective
/// with basic shadow, projective with variance shadow.
pub fn lights() -> Vec<Light> {
    representative_lights().unwrap_or_else(|e| {
        log::error!("Failed to build representative lights: {e}");
        Vec::new()
    })
}

/// Every valid [`OpaqueRegular`] shape.
pub fn opaque_materials() -> impl Iterator<Item = OpaqueRegular> {
    albedos().into_iter().flat_map(|albedo| {
        depths().into_iter().flat_map(move |depth| {
            emissives().into_iter().flat_map(move |emissive| {
                environments().into_iter().flat_map(move |environment| {
                    normals().into_iter().flat_map(move |normal| {
                        speculars()
                            .into_iter()
                            .filter(move |specular| {
                                is_valid_opaque(
                                    &albedo,
                                    &depth,
                                    &emissive,
                                    &environment,
                                    &normal,
                                    specular,
                                )
                            })
                            .filter_map(move |specular| {
                                OpaqueRegular::new(
                                    albedo,
                                    depth,
                                    emissive,
                                    environment,
                                    normal,
                                    specular,
                                )
                                .ok()
                            })
                    })
                })
            })
        })
    })
}

/// Every valid [`TranslucentRegular`] shape.
pub fn translucent_materials() -> impl Iterator<Item = TranslucentRegular> {
    albedos().into_iter().flat_map(|albedo| {
        alphas().into_iter().flat_map(move |alpha| {
            emissives().into_iter().flat_map(move |emissive| {
                environments().into_iter().flat_map(move |environment| {
                    normals().into_iter().flat_map(move |normal| {
                        speculars()
                            .into_iter()
                            .filter(move |specular| {
                                is_valid_translucent(
                                    &albedo,
                                    &alpha,
                                    &emissive,
                                    &environment,
                                    &normal,
                                    specular,
                                )
                            })
                            .filter_map(move |specular| {
                                TranslucentRegular::new(
                                    albedo,
                                    alpha,
                                    emissive,
                                    environment,
                                    normal,
                                    specular,
                                )
                                .ok()
                            })
                    })
                })
            })
        })
    })
}

/// Every valid [`TranslucentSpecularOnly`] shape.
pub fn specular_only_materials() -> impl Iterator<Item = TranslucentSpecularOnly> {
    alphas().into_iter().flat_map(|alpha| {
        normals().into_iter().flat_map(move |normal| {
            speculars()
                .into_iter()
                .filter(is_valid_specular_only)
                .filter_map(move |specular| TranslucentSpecularOnly::new(alpha, normal, specular).ok())
        })
    })
}

/// Every [`TranslucentRefractive`] shape.
pub fn refractive_materials() -> impl Iterator<Item = TranslucentRefractive> {
    normals().into_iter().flat_map(|normal| {
        refractives()
            .into_iter()
            .map(move |refractive| TranslucentRefractive::new(normal, refractive))
    })
}

/// Every valid material shape of every composite.
pub fn materials() -> impl Iterator<Item = Material> {
    opaque_materials()
        .map(Material::from)
        .chain(translucent_materials().map(Material::from))
        .chain(specular_only_materials().map(Material::from))
        .chain(refractive_materials().map(Material::from))
}

/// Every valid (light, material) pair.
pub fn lit_cases() -> impl Iterator<Item = Case> {
    lights().into_iter().flat_map(|light| {
        materials()
            .filter(move |material| is_valid_light_material(Some(&light), material))
            .map(move |material| Case {
                light: Some(light),
                material,
            })
    })
}

/// Every material that may be drawn unlit.
pub fn unlit_cases() -> impl Iterator<Item = Case> {
    materials()
        .filter(|material| is_valid_light_material(None, material))
        .map(|material| Case {
            light: None,
            material,
        })
}

/// Every lit case followed by every unlit case.
pub fn all_cases() -> impl Iterator<Item = Case> {
    lit_cases().chain(unlit_cases())
}
