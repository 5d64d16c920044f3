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
    asset::AssetUUID,
    light::{DirectionalLight, LightId, SphericalLight},
    material::{Albedo, Depth, Emissive, Environment, Normal, OpaqueRegular, Specular},
    math::{LinearRgba, Vec3},
    Material,
};
use prism_data::scene::{Instance, InstanceId, Scene};
use prism_lanes::SceneBatches;
use std::collections::BTreeSet;

fn material(specular: Specular) -> Material {
    OpaqueRegular::new(
        Albedo::default(),
        Depth::Constant,
        Emissive::None,
        Environment::None,
        Normal::Vertex,
        specular,
    )
    .unwrap()
    .into()
}

fn instance(id: u32) -> Instance {
    Instance::new(
        InstanceId(id),
        AssetUUID::from_name("mesh"),
        material(Specular::None),
    )
}

fn ids(ids: &[u32]) -> BTreeSet<InstanceId> {
    ids.iter().copied().map(InstanceId).collect()
}

#[test]
fn test_shared_light_across_groups() {
    // --- ARRANGE ---
    let _ = env_logger::builder().is_test(true).try_init();
    let l0 = LightId(0);
    let mut builder = Scene::builder();
    builder
        .add_light(DirectionalLight::new(l0, -Vec3::Y, LinearRgba::WHITE, 1.0).unwrap())
        .unwrap();
    builder.add_unlit(instance(0)).unwrap();
    builder.add_unlit(instance(1)).unwrap();
    builder
        .add_group("g0", [l0], [instance(2), instance(3)])
        .unwrap();
    builder.add_group("g1", [l0], [instance(2)]).unwrap();
    let scene = builder.build();

    // --- ACT ---
    let batches = SceneBatches::from_scene(&scene);

    // --- ASSERT ---
    assert_eq!(batches.unlit_batches("*"), Some(&ids(&[0, 1])));
    assert_eq!(batches.lit_batches(l0, "g0"), Some(&ids(&[2, 3])));
    assert_eq!(batches.lit_batches(l0, "g1"), Some(&ids(&[2])));
    assert_eq!(batches.light_count(), 1, "a shared light is one key");
    assert_eq!(batches.instance_count(), 4);
}

#[test]
fn test_instance_under_several_lights() {
    let mut builder = Scene::builder();
    builder
        .add_light(DirectionalLight::new(LightId(0), -Vec3::Y, LinearRgba::WHITE, 1.0).unwrap())
        .unwrap()
        .add_light(
            SphericalLight::new(LightId(1), LinearRgba::RED, 2.0, Vec3::ZERO, 4.0, 1.0).unwrap(),
        )
        .unwrap();
    builder
        .add_group("room", [LightId(0), LightId(1)], [instance(5)])
        .unwrap();
    let batches = SceneBatches::from_scene(&builder.build());

    assert_eq!(batches.light_count(), 2);
    assert_eq!(batches.lit_batches(LightId(0), "room"), Some(&ids(&[5])));
    assert_eq!(batches.lit_batches(LightId(1), "room"), Some(&ids(&[5])));
    assert!(batches.unlit().is_empty());
}

#[test]
fn test_rebuilding_gives_the_same_batches() {
    let build = || {
        let mut builder = Scene::builder();
        builder
            .add_light(DirectionalLight::new(LightId(3), Vec3::X, LinearRgba::WHITE, 1.0).unwrap())
            .unwrap();
        builder
            .add_group("b", [LightId(3)], [instance(9), instance(4)])
            .unwrap();
        builder.add_unlit_in("sky", instance(1)).unwrap();
        SceneBatches::from_scene(&builder.build())
    };
    assert_eq!(build(), build());
}

#[test]
fn test_batch_split_by_shader() {
    let l0 = LightId(0);
    let shiny = Instance::new(
        InstanceId(7),
        AssetUUID::from_name("mesh"),
        material(Specular::Constant {
            colour: LinearRgba::WHITE,
            exponent: 32.0,
        }),
    );
    let mut builder = Scene::builder();
    builder
        .add_light(DirectionalLight::new(l0, -Vec3::Z, LinearRgba::WHITE, 1.0).unwrap())
        .unwrap();
    builder
        .add_group("g", [l0], [instance(1), instance(2), shiny])
        .unwrap();
    let scene = builder.build();
    let batches = SceneBatches::from_scene(&scene);

    let split = batches.by_shader(&scene, Some(l0), "g");
    let keys: Vec<_> = split.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, ["LD_O_BC_DC_NV", "LD_O_BC_DC_NV_SC"]);
    assert_eq!(split.values().map(BTreeSet::len).sum::<usize>(), 3);
    assert!(batches.by_shader(&scene, None, "g").is_empty());
}
