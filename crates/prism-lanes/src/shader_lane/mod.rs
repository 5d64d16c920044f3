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

//! The shader variant generator.
//!
//! [`ShaderGenerator::generate`] turns a legal (light, material) pair into a
//! complete shader module: a fixed preamble, a fragment shader whose
//! declarations and values are contributed axis by axis, and a program block
//! wiring it to the matching vertex shader. Generation is pure; the same pair
//! always yields byte-identical source.
//!
//! Pairs rejected by [`prism_core::rules`] cannot be generated and produce
//! [`ShaderError::Unreachable`]. Enumerated cases never do.

mod cache;
mod declarations;
mod preamble;
mod program;
mod source;
mod values;

pub use cache::*;
pub use preamble::{ALIASED_IMPORTS, LIBRARY_IMPORTS, PACKAGE};
pub use program::*;
pub use source::{Declaration, FragmentShader, ShaderType, Value};

use prism_core::{
    cases::Case,
    material::{
        Albedo, Alpha, Depth, Emissive, Environment, Normal, OpaqueRegular, Specular,
        TranslucentRefractive, TranslucentRegular, TranslucentSpecularOnly,
    },
    CodeIdentity, Light, Material, RendererCapabilities, ShadingSettings,
};
use std::fmt;
use values::Composition;

/// An error raised while generating a shader module.
///
/// Every variant is a fault in the caller or the generator, never a property
/// of the input that could be fixed by retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// The pair is excluded by the validity rules and has no shader.
    Unreachable {
        /// The identity the pair would have had.
        identity: String,
        /// Which rule the pair breaks.
        reason: &'static str,
    },
    /// Two axes declared the same name with different types.
    ConflictingDeclaration {
        /// The contested name.
        name: &'static str,
        /// The declaration already present.
        existing: String,
        /// The declaration that was rejected.
        requested: String,
    },
    /// The fragment shader never named its output value.
    MissingOutput {
        /// The module being rendered.
        module: String,
    },
    /// Writing the module text failed.
    Format {
        /// The module being rendered.
        module: String,
    },
}

impl ShaderError {
    pub(crate) fn unreachable(identity: &CodeIdentity, reason: &'static str) -> Self {
        ShaderError::Unreachable {
            identity: identity.to_string(),
            reason,
        }
    }
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Unreachable { identity, reason } => {
                write!(f, "Unreachable shader combination '{identity}': {reason}")
            }
            ShaderError::ConflictingDeclaration {
                name,
                existing,
                requested,
            } => write!(
                f,
                "Conflicting declarations of '{name}': '{existing}' and '{requested}'"
            ),
            ShaderError::MissingOutput { module } => {
                write!(f, "Shader module '{module}' has no output value")
            }
            ShaderError::Format { module } => {
                write!(f, "Failed to write shader module '{module}'")
            }
        }
    }
}

impl std::error::Error for ShaderError {}

/// A generated shader module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderModule {
    /// The module name and cache key.
    pub identity: CodeIdentity,
    /// The vertex shader the program is linked with.
    pub vertex_program: VertexProgram,
    /// The complete module source.
    pub source: String,
}

/// Axes shared by the two regular composites.
struct Regular<'a> {
    albedo: &'a Albedo,
    alpha: Option<&'a Alpha>,
    depth: Option<&'a Depth>,
    emissive: &'a Emissive,
    environment: &'a Environment,
    normal: &'a Normal,
    specular: &'a Specular,
}

impl<'a> From<&'a OpaqueRegular> for Regular<'a> {
    fn from(m: &'a OpaqueRegular) -> Self {
        Self {
            albedo: m.albedo(),
            alpha: None,
            depth: Some(m.depth()),
            emissive: m.emissive(),
            environment: m.environment(),
            normal: m.normal(),
            specular: m.specular(),
        }
    }
}

impl<'a> From<&'a TranslucentRegular> for Regular<'a> {
    fn from(m: &'a TranslucentRegular) -> Self {
        Self {
            albedo: m.albedo(),
            alpha: Some(m.alpha()),
            depth: None,
            emissive: m.emissive(),
            environment: m.environment(),
            normal: m.normal(),
            specular: m.specular(),
        }
    }
}

/// Generates shader modules for (light, material) pairs.
///
/// # Examples
///
/// ```
/// use prism_core::cases;
/// use prism_core::RendererCapabilities;
/// use prism_lanes::shader_lane::ShaderGenerator;
///
/// let generator = ShaderGenerator::new(RendererCapabilities::default());
/// let case = cases::unlit_cases().next().unwrap();
/// let module = generator.generate_case(&case).unwrap();
/// assert!(module.source.starts_with("package prism.forward;"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShaderGenerator {
    capabilities: RendererCapabilities,
    trace_sources: bool,
}

impl ShaderGenerator {
    /// Creates a generator for a renderer with the given capabilities.
    pub fn new(capabilities: RendererCapabilities) -> Self {
        Self {
            capabilities,
            trace_sources: false,
        }
    }

    /// Creates a generator configured by `settings`.
    pub fn from_settings(settings: &ShadingSettings) -> Self {
        Self {
            capabilities: settings.capabilities,
            trace_sources: settings.trace_sources,
        }
    }

    /// The renderer capabilities generated code targets.
    pub fn capabilities(&self) -> &RendererCapabilities {
        &self.capabilities
    }

    /// Generates the module for an enumerated case.
    pub fn generate_case(&self, case: &Case) -> Result<ShaderModule, ShaderError> {
        self.generate(case.light.as_ref(), &case.material)
    }

    /// Generates the module for `material` drawn under `light`, or unlit.
    pub fn generate(
        &self,
        light: Option<&Light>,
        material: &Material,
    ) -> Result<ShaderModule, ShaderError> {
        let identity = CodeIdentity::new(light, material);
        match self.build(&identity, light, material) {
            Ok(module) => {
                log::debug!(
                    "Generated shader module {} ({} bytes)",
                    module.identity,
                    module.source.len()
                );
                if self.trace_sources {
                    log::trace!("{}", module.source);
                }
                Ok(module)
            }
            Err(e) => {
                log::error!("{e}");
                Err(e)
            }
        }
    }

    fn build(
        &self,
        identity: &CodeIdentity,
        light: Option<&Light>,
        material: &Material,
    ) -> Result<ShaderModule, ShaderError> {
        let mut fragment = FragmentShader::new();
        match material {
            Material::OpaqueRegular(m) => {
                self.regular(&mut fragment, identity, light, Regular::from(m))?
            }
            Material::TranslucentRegular(m) => {
                self.regular(&mut fragment, identity, light, Regular::from(m))?
            }
            Material::TranslucentSpecularOnly(m) => {
                self.specular_only(&mut fragment, identity, light, m)?
            }
            Material::TranslucentRefractive(m) => {
                Self::refractive(&mut fragment, identity, light, m)?
            }
        }

        let vertex_program = select_vertex_program(
            LightClass::of(light),
            NormalClass::of(material.normal()),
        );

        let mut source = String::new();
        preamble::write_preamble(&mut source).map_err(|_| ShaderError::Format {
            module: identity.to_string(),
        })?;
        fragment.render(&mut source, identity.as_str(), vertex_program)?;

        Ok(ShaderModule {
            identity: identity.clone(),
            vertex_program,
            source,
        })
    }

    fn regular(
        &self,
        f: &mut FragmentShader,
        identity: &CodeIdentity,
        light: Option<&Light>,
        m: Regular<'_>,
    ) -> Result<(), ShaderError> {
        let alpha_tested = match m.depth {
            Some(Depth::Alpha { .. }) if !m.albedo.is_textured() => {
                return Err(ShaderError::unreachable(
                    identity,
                    "alpha-tested depth without an albedo texture",
                ));
            }
            Some(Depth::Alpha { .. }) => true,
            Some(Depth::Constant) | None => false,
        };
        if m.alpha.is_some() && light.is_some_and(casts_shadow) {
            return Err(ShaderError::unreachable(
                identity,
                "translucent materials are not lit by shadow-casting lights",
            ));
        }
        // Unlit surfaces only read the specular term through a mapped reflection.
        let needs_specular = light.is_some()
            || matches!(m.environment, Environment::ReflectionMapped { .. });

        if let Some(light) = light {
            declarations::light(f, light)?;
        }
        if let Some(alpha) = m.alpha {
            declarations::alpha(f, alpha)?;
        }
        declarations::albedo(f, m.albedo)?;
        if let Some(depth) = m.depth {
            declarations::depth(f, depth)?;
        }
        declarations::emissive(f, m.emissive)?;
        declarations::normal(f, m.normal)?;
        if needs_specular {
            declarations::specular(f, m.specular)?;
        }
        declarations::environment(f, m.environment)?;

        values::normal(f, m.normal);
        if let Some(alpha) = m.alpha {
            values::alpha(f, alpha);
        }
        if needs_specular {
            values::specular(f, m.specular);
        }
        if let Some(light) = light {
            values::light(f, light, m.specular, true, &self.capabilities);
        }
        values::albedo(f, m.albedo);
        values::emissive(f, m.emissive);
        values::environment(f, identity, m.environment, m.specular)?;
        values::compose_regular(
            f,
            Composition {
                lit: light.is_some(),
                emissive: !matches!(m.emissive, Emissive::None),
                specular: m.specular.is_some(),
                translucent: m.alpha.is_some(),
            },
        );

        if alpha_tested {
            f.discard_when("F.lesser (albedo [w], p_depth_threshold)");
        }
        Ok(())
    }

    fn specular_only(
        &self,
        f: &mut FragmentShader,
        identity: &CodeIdentity,
        light: Option<&Light>,
        m: &TranslucentSpecularOnly,
    ) -> Result<(), ShaderError> {
        let Some(light) = light else {
            return Err(ShaderError::unreachable(
                identity,
                "specular-only materials are only drawn lit",
            ));
        };
        if !m.specular().is_some() {
            return Err(ShaderError::unreachable(
                identity,
                "specular-only material without a specular term",
            ));
        }
        if casts_shadow(light) {
            return Err(ShaderError::unreachable(
                identity,
                "translucent materials are not lit by shadow-casting lights",
            ));
        }

        declarations::light(f, light)?;
        declarations::alpha(f, m.alpha())?;
        declarations::normal(f, m.normal())?;
        declarations::specular(f, m.specular())?;

        values::normal(f, m.normal());
        values::alpha(f, m.alpha());
        values::specular(f, m.specular());
        values::light(f, light, m.specular(), false, &self.capabilities);
        f.value("rgba", "new vector_4f (light_specular, opacity)");
        f.output("rgba");
        Ok(())
    }

    fn refractive(
        f: &mut FragmentShader,
        identity: &CodeIdentity,
        light: Option<&Light>,
        m: &TranslucentRefractive,
    ) -> Result<(), ShaderError> {
        if light.is_some() {
            return Err(ShaderError::unreachable(
                identity,
                "refractive materials are only drawn unlit",
            ));
        }

        declarations::normal(f, m.normal())?;
        declarations::refractive(f, m.refractive())?;

        values::normal(f, m.normal());
        values::refractive(f, m.refractive());
        f.output("refraction");
        Ok(())
    }
}

fn casts_shadow(light: &Light) -> bool {
    matches!(light, Light::Projective(p) if p.shadow().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{
        asset::Texture2D,
        cases,
        material::Refractive,
        math::LinearRgba,
    };

    fn generator() -> ShaderGenerator {
        ShaderGenerator::new(RendererCapabilities::default())
    }

    fn projective_basic() -> Light {
        light("LPSB")
    }

    fn light(code: &str) -> Light {
        cases::lights()
            .into_iter()
            .find(|l| l.code() == code)
            .unwrap()
    }

    fn plain_opaque() -> Material {
        OpaqueRegular::new(
            Albedo::default(),
            Depth::Constant,
            Emissive::None,
            Environment::None,
            Normal::Vertex,
            Specular::None,
        )
        .unwrap()
        .into()
    }

    #[test]
    fn module_is_named_by_identity() {
        let module = generator().generate(None, &plain_opaque()).unwrap();
        assert_eq!(module.identity.as_str(), "U_O_BC_DC_NV");
        assert!(module.source.contains("module U_O_BC_DC_NV is"));
        assert!(module.source.ends_with("end;\n"));
        assert_eq!(module.vertex_program, VertexProgram::Standard);
    }

    #[test]
    fn missing_depth_textures_use_packed_shadows() {
        let light = projective_basic();
        let with = generator().generate(Some(&light), &plain_opaque()).unwrap();
        let without = ShaderGenerator::new(RendererCapabilities {
            depth_textures: false,
        })
        .generate(Some(&light), &plain_opaque())
        .unwrap();

        assert!(with.source.contains("ShadowBasic.factor (p_shadow_basic"));
        assert!(without.source.contains("ShadowBasic.factor_packed4444 (p_shadow_basic"));
        assert_eq!(with.identity, without.identity);
        assert_eq!(with.vertex_program, VertexProgram::Projective);
    }

    #[test]
    fn alpha_tested_depth_discards() {
        let material: Material = OpaqueRegular::new(
            Albedo::Textured {
                colour: LinearRgba::WHITE,
                mix: 1.0,
                texture: Texture2D::named("leaves"),
            },
            Depth::Alpha { threshold: 0.5 },
            Emissive::None,
            Environment::None,
            Normal::Vertex,
            Specular::None,
        )
        .unwrap()
        .into();
        let module = generator().generate(None, &material).unwrap();
        assert!(module
            .source
            .contains("    discard (F.lesser (albedo [w], p_depth_threshold));\n"));
    }

    #[test]
    fn refractive_under_a_light_is_unreachable() {
        let glass: Material =
            TranslucentRefractive::new(Normal::Vertex, Refractive::Masked { scale: 0.2 }).into();
        let light = projective_basic();
        let err = generator().generate(Some(&light), &glass).unwrap_err();
        assert!(matches!(err, ShaderError::Unreachable { .. }));
        assert!(generator().generate(None, &glass).is_ok());
    }

    #[test]
    fn shared_inputs_are_declared_once() {
        let material: Material = OpaqueRegular::new(
            Albedo::Textured {
                colour: LinearRgba::WHITE,
                mix: 1.0,
                texture: Texture2D::named("albedo"),
            },
            Depth::Constant,
            Emissive::Mapped {
                amount: 1.0,
                texture: Texture2D::named("glow"),
            },
            Environment::None,
            Normal::Mapped {
                texture: Texture2D::named("bumps"),
            },
            Specular::None,
        )
        .unwrap()
        .into();
        let module = generator().generate(None, &material).unwrap();
        assert_eq!(module.source.matches("in f_uv : vector_2f;").count(), 1);
        assert_eq!(module.vertex_program, VertexProgram::StandardMapped);
    }

    #[test]
    fn shadow_casting_light_on_translucent_is_unreachable() {
        let translucent: Material = cases::translucent_materials().next().unwrap().into();
        let highlight: Material = cases::specular_only_materials().next().unwrap().into();

        for code in ["LPSB", "LPSV"] {
            let shadowed = light(code);
            for material in [&translucent, &highlight] {
                let err = ShaderGenerator::new(RendererCapabilities {
                    depth_textures: false,
                })
                .generate(Some(&shadowed), material)
                .unwrap_err();
                assert!(matches!(err, ShaderError::Unreachable { .. }));
            }
        }

        let unshadowed = light("LP");
        assert!(generator().generate(Some(&unshadowed), &translucent).is_ok());
        assert!(generator().generate(Some(&unshadowed), &highlight).is_ok());
    }

    #[test]
    fn unlit_surface_without_mapped_reflection_skips_specular() {
        let material: Material = OpaqueRegular::new(
            Albedo::default(),
            Depth::Constant,
            Emissive::None,
            Environment::None,
            Normal::Vertex,
            Specular::Constant {
                colour: LinearRgba::WHITE,
                exponent: 16.0,
            },
        )
        .unwrap()
        .into();

        let unlit = generator().generate(None, &material).unwrap();
        assert_eq!(unlit.identity.as_str(), "U_O_BC_DC_NV_SC");
        assert!(!unlit.source.contains("p_specular"));
        assert!(!unlit.source.contains("value specular ="));

        let lit = generator().generate(Some(&light("LD")), &material).unwrap();
        assert!(lit.source.contains("parameter p_specular : Specular.t;"));
        assert!(lit.source.contains("value specular = Specular.constant (p_specular);"));
    }
}
