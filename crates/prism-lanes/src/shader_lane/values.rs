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

//! Per-axis value computations for the fragment shader body.
//!
//! Values are emitted in dependency order: the surface normal `n` first, then
//! opacity, specular colour, light terms, albedo, emission, the environment
//! blend and finally the composed `rgba` output.

use super::{source::FragmentShader, ShaderError};
use prism_core::{
    light::Shadow,
    material::{Albedo, Alpha, Emissive, Environment, Normal, Refractive, Specular},
    CodeIdentity, Light, RendererCapabilities,
};

pub(super) fn normal(f: &mut FragmentShader, normal: &Normal) {
    match normal {
        Normal::Vertex => f.value("n", "Normals.unpack_vertex (f_normal)"),
        Normal::Mapped { .. } => f.value(
            "n",
            "Normals.unpack_mapped (t_normal, f_normal, f_tangent, f_bitangent, f_uv)",
        ),
    }
}

pub(super) fn alpha(f: &mut FragmentShader, alpha: &Alpha) {
    match alpha {
        Alpha::Constant { .. } => f.value("opacity", "p_opacity"),
        Alpha::OneMinusDot { .. } => f.value(
            "opacity",
            "Alpha.one_minus_dot (p_opacity, f_position_eye [x y z], n)",
        ),
    }
}

pub(super) fn specular(f: &mut FragmentShader, specular: &Specular) {
    match specular {
        Specular::None => {}
        Specular::Constant { .. } => f.value("specular", "Specular.constant (p_specular)"),
        Specular::Mapped { .. } => f.value(
            "specular",
            "Specular.mapped (p_specular, t_specular, f_uv)",
        ),
    }
}

/// Emits `light_vectors`, `light_scale` and the light's colour terms.
///
/// `light_diffuse` is emitted when `diffuse` is set; `light_specular` whenever
/// the material has a specular term.
pub(super) fn light(
    f: &mut FragmentShader,
    light: &Light,
    specular: &Specular,
    diffuse: bool,
    capabilities: &RendererCapabilities,
) {
    let (module, parameter) = match light {
        Light::Directional(_) => ("DirectionalLight", "p_light_directional"),
        Light::Spherical(_) => ("SphericalLight", "p_light_spherical"),
        Light::Projective(_) => ("ProjectiveLight", "p_light_projective"),
    };

    f.value(
        "light_vectors",
        format!("{module}.vectors ({parameter}, f_position_eye [x y z], n)"),
    );

    match light {
        Light::Directional(_) => f.value("light_scale", "1.0"),
        Light::Spherical(_) => f.value(
            "light_scale",
            "SphericalLight.attenuation (p_light_spherical, light_vectors.distance)",
        ),
        Light::Projective(projective) => {
            f.value(
                "light_attenuation",
                "ProjectiveLight.attenuation (p_light_projective, light_vectors.distance)",
            );
            f.value(
                "light_texel",
                "ProjectiveLight.texel (t_light_projection, f_position_light_clip)",
            );
            match projective.shadow() {
                None => f.value("light_scale", "light_attenuation"),
                Some(shadow) => {
                    f.value("light_shadow", shadow_factor(shadow, capabilities));
                    f.value("light_scale", "F.multiply (light_attenuation, light_shadow)");
                }
            }
        }
    }

    let textured = |term: String| match light {
        Light::Projective(_) => format!("V3.multiply ({term}, light_texel)"),
        Light::Directional(_) | Light::Spherical(_) => term,
    };

    if diffuse {
        f.value(
            "light_diffuse",
            textured(format!(
                "{module}.diffuse_color ({parameter}, light_vectors, light_scale)"
            )),
        );
    }
    if specular.is_some() {
        f.value(
            "light_specular",
            textured(format!(
                "{module}.specular_color ({parameter}, light_vectors, specular, p_specular.exponent, light_scale)"
            )),
        );
    }
}

fn shadow_factor(shadow: &Shadow, capabilities: &RendererCapabilities) -> &'static str {
    match shadow {
        Shadow::Basic(_) if capabilities.depth_textures => {
            "ShadowBasic.factor (p_shadow_basic, t_shadow_basic, f_position_light_clip)"
        }
        Shadow::Basic(_) => {
            "ShadowBasic.factor_packed4444 (p_shadow_basic, t_shadow_basic, f_position_light_clip)"
        }
        Shadow::Variance(_) => {
            "ShadowVariance.factor (p_shadow_variance, t_shadow_variance, f_position_light_clip)"
        }
    }
}

pub(super) fn albedo(f: &mut FragmentShader, albedo: &Albedo) {
    match albedo {
        Albedo::Untextured { .. } => f.value("albedo", "Albedo.opaque (p_albedo)"),
        Albedo::Textured { .. } => f.value("albedo", "Albedo.textured (t_albedo, f_uv, p_albedo)"),
    }
}

pub(super) fn emissive(f: &mut FragmentShader, emissive: &Emissive) {
    match emissive {
        Emissive::None => {}
        Emissive::Constant { .. } => f.value("emission", "p_emission.amount"),
        Emissive::Mapped { .. } => f.value(
            "emission",
            "Emission.mapped (p_emission, t_emission, f_uv)",
        ),
    }
}

/// Emits `surface`: the albedo colour, blended with the environment if any.
pub(super) fn environment(
    f: &mut FragmentShader,
    identity: &CodeIdentity,
    environment: &Environment,
    specular: &Specular,
) -> Result<(), ShaderError> {
    const REFLECTION: &str =
        "Environment.reflection (t_environment, p_view_inverse, f_position_eye [x y z], n)";

    match (environment, specular) {
        (Environment::None, _) => f.value("surface", "albedo [x y z]"),
        (Environment::Reflection { .. }, _) => {
            f.value("environment", REFLECTION);
            f.value(
                "surface",
                "Environment.mix (albedo [x y z], environment, p_environment.mix)",
            );
        }
        (Environment::ReflectionMapped { .. }, Specular::Mapped { .. }) => {
            f.value("environment", REFLECTION);
            f.value(
                "surface",
                "Environment.mix_mapped (albedo [x y z], environment, p_environment.mix, specular)",
            );
        }
        (Environment::ReflectionMapped { .. }, Specular::None | Specular::Constant { .. }) => {
            return Err(ShaderError::unreachable(
                identity,
                "mapped reflection without a specular map",
            ));
        }
    }
    Ok(())
}

pub(super) fn refractive(f: &mut FragmentShader, refractive: &Refractive) {
    match refractive {
        Refractive::Masked { .. } => f.value(
            "refraction",
            "Refraction.masked (p_refraction, t_refraction_scene, t_refraction_mask, f_position_clip, n)",
        ),
        Refractive::Unmasked { .. } => f.value(
            "refraction",
            "Refraction.unmasked (p_refraction, t_refraction_scene, f_position_clip, n)",
        ),
    }
}

/// What the final colour of a regular material is composed from.
#[derive(Debug, Clone, Copy)]
pub(super) struct Composition {
    pub lit: bool,
    pub emissive: bool,
    pub specular: bool,
    pub translucent: bool,
}

pub(super) fn compose_regular(f: &mut FragmentShader, c: Composition) {
    let mut rgb = if c.lit {
        "V3.multiply (surface, light_diffuse)".to_string()
    } else {
        "surface".to_string()
    };
    if c.emissive {
        rgb = format!("V3.add ({rgb}, V3.multiply_scalar (surface, emission))");
    }
    if c.lit && c.specular {
        rgb = format!("V3.add ({rgb}, light_specular)");
    }
    f.value("rgb", rgb);

    let alpha = if c.translucent {
        "F.multiply (albedo [w], opacity)"
    } else {
        "1.0"
    };
    f.value("rgba", format!("new vector_4f (rgb, {alpha})"));
    f.output("rgba");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exprs(f: &FragmentShader) -> Vec<(&str, &str)> {
        f.values()
            .iter()
            .map(|v| (v.name, v.expr.as_str()))
            .collect()
    }

    #[test]
    fn unlit_composition_is_surface() {
        let mut f = FragmentShader::new();
        compose_regular(
            &mut f,
            Composition {
                lit: false,
                emissive: false,
                specular: true,
                translucent: false,
            },
        );
        assert_eq!(
            exprs(&f),
            [("rgb", "surface"), ("rgba", "new vector_4f (rgb, 1.0)")]
        );
    }

    #[test]
    fn lit_composition_adds_emission_then_specular() {
        let mut f = FragmentShader::new();
        compose_regular(
            &mut f,
            Composition {
                lit: true,
                emissive: true,
                specular: true,
                translucent: true,
            },
        );
        assert_eq!(
            f.values()[0].expr,
            "V3.add (V3.add (V3.multiply (surface, light_diffuse), \
             V3.multiply_scalar (surface, emission)), light_specular)"
        );
        assert_eq!(
            f.values()[1].expr,
            "new vector_4f (rgb, F.multiply (albedo [w], opacity))"
        );
    }
}
