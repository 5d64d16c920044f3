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

use prism_core::cases::{self, Case};
use prism_core::material::{Albedo, Depth, Environment, Material, Specular};
use prism_core::rules;
use prism_core::CodeIdentity;
use std::collections::{BTreeSet, HashSet};

#[test]
fn test_every_enumerated_case_satisfies_the_rules() {
    for case in cases::all_cases() {
        assert!(
            rules::is_valid_light_material(case.light.as_ref(), &case.material),
            "{} should not have been enumerated",
            case.identity()
        );

        match case.material {
            Material::OpaqueRegular(m) => {
                assert!(rules::is_valid_opaque(
                    m.albedo(),
                    m.depth(),
                    m.emissive(),
                    m.environment(),
                    m.normal(),
                    m.specular()
                ));
            }
            Material::TranslucentRegular(m) => {
                assert!(rules::is_valid_translucent(
                    m.albedo(),
                    m.alpha(),
                    m.emissive(),
                    m.environment(),
                    m.normal(),
                    m.specular()
                ));
            }
            Material::TranslucentSpecularOnly(m) => {
                assert!(case.light.is_some());
                assert!(rules::is_valid_specular_only(m.specular()));
            }
            Material::TranslucentRefractive(_) => assert!(case.light.is_none()),
        }
    }
}

#[test]
fn test_every_variant_is_enumerated() {
    // --- ARRANGE ---
    let mut albedos = BTreeSet::new();
    let mut alphas = BTreeSet::new();
    let mut depths = BTreeSet::new();
    let mut emissives = BTreeSet::new();
    let mut environments = BTreeSet::new();
    let mut normals = BTreeSet::new();
    let mut speculars = BTreeSet::new();
    let mut refractives = BTreeSet::new();
    let mut lights = BTreeSet::new();

    // --- ACT ---
    for case in cases::all_cases() {
        if let Some(light) = &case.light {
            lights.insert(light.code());
        }
        normals.insert(case.material.normal().name());
        match &case.material {
            Material::OpaqueRegular(m) => {
                albedos.insert(m.albedo().name());
                depths.insert(m.depth().name());
                emissives.insert(m.emissive().name());
                environments.insert(m.environment().name());
                speculars.insert(m.specular().name());
            }
            Material::TranslucentRegular(m) => {
                albedos.insert(m.albedo().name());
                alphas.insert(m.alpha().name());
                emissives.insert(m.emissive().name());
                environments.insert(m.environment().name());
                speculars.insert(m.specular().name());
            }
            Material::TranslucentSpecularOnly(m) => {
                alphas.insert(m.alpha().name());
                speculars.insert(m.specular().name());
            }
            Material::TranslucentRefractive(m) => {
                refractives.insert(m.refractive().name());
            }
        }
    }

    // --- ASSERT ---
    let set = |names: &[&'static str]| names.iter().copied().collect::<BTreeSet<_>>();
    assert_eq!(albedos, set(&["Albedo::Untextured", "Albedo::Textured"]));
    assert_eq!(alphas, set(&["Alpha::Constant", "Alpha::OneMinusDot"]));
    assert_eq!(depths, set(&["Depth::Constant", "Depth::Alpha"]));
    assert_eq!(
        emissives,
        set(&["Emissive::None", "Emissive::Constant", "Emissive::Mapped"])
    );
    assert_eq!(
        environments,
        set(&[
            "Environment::None",
            "Environment::Reflection",
            "Environment::ReflectionMapped"
        ])
    );
    assert_eq!(normals, set(&["Normal::Vertex", "Normal::Mapped"]));
    assert_eq!(
        speculars,
        set(&["Specular::None", "Specular::Constant", "Specular::Mapped"])
    );
    assert_eq!(
        refractives,
        set(&["Refractive::Masked", "Refractive::Unmasked"])
    );
    assert_eq!(lights, set(&["LD", "LS", "LP", "LPSB", "LPSV"]));
}

#[test]
fn test_shadowed_projective_lights_only_reach_opaque_materials() {
    for case in cases::lit_cases() {
        let code = case.light.as_ref().map(|l| l.code());
        if matches!(code, Some("LPSB" | "LPSV")) {
            assert!(
                matches!(case.material, Material::OpaqueRegular(_)),
                "{} should not have been enumerated",
                case.identity()
            );
        }
    }
}

#[test]
fn test_mapped_reflection_only_appears_with_specular_map() {
    let offending = cases::opaque_materials().find(|m| {
        matches!(m.environment(), Environment::ReflectionMapped { .. })
            && !matches!(m.specular(), Specular::Mapped { .. })
    });
    assert!(offending.is_none(), "Found {:?}", offending.map(|m| m.code()));

    // The legal combination is still enumerated.
    assert!(cases::opaque_materials().any(|m| {
        matches!(m.environment(), Environment::ReflectionMapped { .. })
            && matches!(m.specular(), Specular::Mapped { .. })
    }));
}

#[test]
fn test_alpha_depth_only_appears_with_textured_albedo() {
    for m in cases::opaque_materials() {
        if let Depth::Alpha { .. } = m.depth() {
            assert!(matches!(m.albedo(), Albedo::Textured { .. }), "{}", m.code());
        }
    }
}

#[test]
fn test_identities_are_unique_across_all_cases() {
    // --- ARRANGE ---
    let all: Vec<Case> = cases::all_cases().collect();

    // --- ACT ---
    let identities: HashSet<CodeIdentity> = all.iter().map(Case::identity).collect();

    // --- ASSERT ---
    // Every case is a distinct shape, so no two may share an identity.
    assert_eq!(identities.len(), all.len());
    assert_eq!(all.len(), 1158 + 298);
}

#[test]
fn test_identities_are_valid_module_names() {
    for case in cases::all_cases() {
        let id = case.identity();
        let text = id.as_str();
        assert!(
            text.starts_with(|c: char| c.is_ascii_alphabetic()),
            "{text} must start with a letter"
        );
        assert!(
            text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
            "{text} contains an illegal character"
        );
    }
}

#[test]
fn test_unlit_identities_are_marked_unlit() {
    assert!(cases::unlit_cases().all(|c| c.identity().is_unlit()));
    assert!(cases::lit_cases().all(|c| !c.identity().is_unlit()));
}
