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

use prism_core::{
    cases,
    material::{Alpha, Environment, Normal, Specular, TranslucentSpecularOnly},
    math::LinearRgba,
    Material, RendererCapabilities,
};
use prism_lanes::shader_lane::{
    select_vertex_program, LightClass, NormalClass, ShaderError, ShaderGenerator, VertexProgram,
};
use std::collections::BTreeSet;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Splits a module into its declared names and the prefixed names its body
/// references.
fn declared_and_used(source: &str) -> (BTreeSet<String>, BTreeSet<String>) {
    let header = source
        .split_once("  shader fragment f is\n")
        .and_then(|(_, rest)| rest.split_once("  with\n"))
        .expect("module should have a fragment header");
    let body = header
        .1
        .split_once("  end;\n")
        .map(|(body, _)| body)
        .expect("fragment shader should be terminated");

    let declared = header
        .0
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with("in ") || l.starts_with("parameter "))
        .filter_map(|l| l.split_whitespace().nth(1))
        .map(str::to_string)
        .collect();

    let used = body
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|t| t.starts_with("f_") || t.starts_with("p_") || t.starts_with("t_"))
        .map(str::to_string)
        .collect();

    (declared, used)
}

#[test]
fn test_every_case_declares_exactly_what_it_uses() {
    init_logging();
    for capabilities in [
        RendererCapabilities::default(),
        RendererCapabilities {
            depth_textures: false,
        },
    ] {
        let generator = ShaderGenerator::new(capabilities);
        for case in cases::all_cases() {
            let module = generator
                .generate_case(&case)
                .unwrap_or_else(|e| panic!("{} failed: {e}", case.identity()));
            let (declared, used) = declared_and_used(&module.source);
            assert_eq!(
                declared, used,
                "declarations and references differ in {}",
                module.identity
            );
        }
    }
}

#[test]
fn test_regeneration_is_byte_identical() {
    let generator = ShaderGenerator::new(RendererCapabilities::default());
    for case in cases::all_cases() {
        let a = generator.generate_case(&case).unwrap();
        let b = generator.generate_case(&case).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_module_structure_is_ordered() {
    let generator = ShaderGenerator::new(RendererCapabilities::default());
    for case in cases::all_cases() {
        let source = generator.generate_case(&case).unwrap().source;
        let positions: Vec<usize> = [
            "package prism.forward;",
            "import prism.shading.VertexShaders;",
            "module ",
            "  shader fragment f is",
            "  with",
            "  as",
            "    out out_0 = ",
            "  shader program p is",
            "    vertex VertexShaders.",
            "    fragment f;",
        ]
        .iter()
        .map(|marker| source.find(marker).unwrap())
        .collect();
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "sections out of order in {}",
            case.identity()
        );
    }
}

#[test]
fn test_vertex_program_follows_light_and_normal() {
    let generator = ShaderGenerator::new(RendererCapabilities::default());
    for case in cases::all_cases() {
        let module = generator.generate_case(&case).unwrap();
        let expected = select_vertex_program(
            LightClass::of(case.light.as_ref()),
            NormalClass::of(case.material.normal()),
        );
        assert_eq!(module.vertex_program, expected);
        assert!(module
            .source
            .contains(&format!("    vertex {};\n", expected.name())));
    }
}

#[test]
fn test_vertex_selection_is_total() {
    let mut seen = BTreeSet::new();
    for light in LightClass::ALL {
        for normal in NormalClass::ALL {
            seen.insert(select_vertex_program(light, normal).name());
        }
    }
    let expected: BTreeSet<_> = [
        VertexProgram::Standard,
        VertexProgram::StandardMapped,
        VertexProgram::Projective,
        VertexProgram::ProjectiveMapped,
    ]
    .iter()
    .map(VertexProgram::name)
    .collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_unlit_specular_only_is_an_unreachable_fault() {
    init_logging();
    let material: Material = TranslucentSpecularOnly::new(
        Alpha::Constant { opacity: 0.5 },
        Normal::Vertex,
        Specular::Constant {
            colour: LinearRgba::WHITE,
            exponent: 16.0,
        },
    )
    .unwrap()
    .into();

    let err = ShaderGenerator::default()
        .generate(None, &material)
        .unwrap_err();
    assert_eq!(
        err,
        ShaderError::Unreachable {
            identity: "U_TS_AC_NV_SC".to_string(),
            reason: "specular-only materials are only drawn lit",
        }
    );
}

#[test]
fn test_each_shadow_kind_reaches_the_source() {
    let generator = ShaderGenerator::new(RendererCapabilities::default());
    let material: Material = cases::opaque_materials().next().unwrap().into();
    let sources: Vec<String> = cases::lights()
        .iter()
        .map(|light| generator.generate(Some(light), &material).unwrap().source)
        .collect();

    assert!(sources[0].contains("value light_scale = 1.0;"));
    assert!(sources[1].contains("SphericalLight.attenuation"));
    assert!(sources[2].contains("value light_scale = light_attenuation;"));
    assert!(sources[3].contains("ShadowBasic.factor ("));
    assert!(sources[4].contains("ShadowVariance.factor ("));
}

#[test]
fn test_unlit_specular_is_only_computed_for_mapped_reflections() {
    let generator = ShaderGenerator::new(RendererCapabilities::default());
    for case in cases::unlit_cases() {
        let (specular, environment) = match &case.material {
            Material::OpaqueRegular(m) => (m.specular(), m.environment()),
            Material::TranslucentRegular(m) => (m.specular(), m.environment()),
            _ => continue,
        };
        let source = generator.generate_case(&case).unwrap().source;
        let computed = source.contains("    value specular = ");
        let read = matches!(environment, Environment::ReflectionMapped { .. });
        assert_eq!(computed, read, "{}", case.identity());
        if !read && specular.is_some() {
            assert!(!source.contains("p_specular"), "{}", case.identity());
        }
    }
}

#[test]
fn test_shadow_casting_lights_fault_on_translucent_materials() {
    // --- ARRANGE ---
    let generator = ShaderGenerator::new(RendererCapabilities {
        depth_textures: false,
    });
    let shadowed: Vec<_> = cases::lights()
        .into_iter()
        .filter(|l| matches!(l.code(), "LPSB" | "LPSV"))
        .collect();
    assert_eq!(shadowed.len(), 2);

    // --- ACT & ASSERT ---
    let translucent = cases::translucent_materials()
        .map(Material::from)
        .chain(cases::specular_only_materials().map(Material::from));
    for material in translucent {
        for light in &shadowed {
            match generator.generate(Some(light), &material) {
                Err(ShaderError::Unreachable { .. }) => {}
                other => panic!(
                    "{}_{} should be unreachable, got {:?}",
                    light.code(),
                    material.code(),
                    other.map(|m| m.identity)
                ),
            }
        }
    }
}
