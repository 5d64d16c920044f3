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

use super::{Instance, InstanceId, LightGroup, SceneError, DEFAULT_UNLIT_GROUP};
use prism_core::{
    light::{Light, LightId},
    rules::is_valid_light_material,
};
use std::collections::{BTreeMap, BTreeSet};

/// An immutable scene snapshot.
///
/// Produced by [`SceneBuilder::build`]. Every light referenced by a group
/// exists, every instance id maps to exactly one [`Instance`], and every
/// instance's material is legal for each way it is drawn.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    lights: BTreeMap<LightId, Light>,
    instances: BTreeMap<InstanceId, Instance>,
    groups: BTreeMap<String, LightGroup>,
    unlit: BTreeMap<String, BTreeSet<InstanceId>>,
}

impl Scene {
    /// Starts building a new scene.
    pub fn builder() -> SceneBuilder {
        SceneBuilder::default()
    }

    /// All lights, ordered by id.
    pub fn lights(&self) -> impl Iterator<Item = &Light> {
        self.lights.values()
    }

    /// Looks up a light.
    pub fn light(&self, id: LightId) -> Option<&Light> {
        self.lights.get(&id)
    }

    /// All instances, lit and unlit, ordered by id.
    pub fn instances(&self) -> impl Iterator<Item = &Instance> {
        self.instances.values()
    }

    /// Looks up an instance.
    pub fn instance(&self, id: InstanceId) -> Option<&Instance> {
        self.instances.get(&id)
    }

    /// Light groups, ordered by name.
    pub fn groups(&self) -> impl Iterator<Item = &LightGroup> {
        self.groups.values()
    }

    /// Looks up a light group by name.
    pub fn group(&self, name: &str) -> Option<&LightGroup> {
        self.groups.get(name)
    }

    /// Unlit instance groups, ordered by name.
    pub fn unlit_groups(&self) -> impl Iterator<Item = (&str, &BTreeSet<InstanceId>)> {
        self.unlit.iter().map(|(name, set)| (name.as_str(), set))
    }

    /// Returns `true` if the scene has nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// Validating builder for [`Scene`].
///
/// Every `add_*` method either applies its whole addition or returns an
/// error and leaves the builder untouched.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    scene: Scene,
    lit_owner: BTreeMap<InstanceId, String>,
    unlit_owner: BTreeMap<InstanceId, String>,
}

impl SceneBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one light.
    pub fn add_light(&mut self, light: impl Into<Light>) -> Result<&mut Self, SceneError> {
        self.add_lights([light.into()])
    }

    /// Adds several lights at once.
    ///
    /// Fails if an id repeats within `lights` or was already added.
    pub fn add_lights(
        &mut self,
        lights: impl IntoIterator<Item = Light>,
    ) -> Result<&mut Self, SceneError> {
        let lights: Vec<Light> = lights.into_iter().collect();
        let mut seen = BTreeSet::new();
        for light in &lights {
            let id = light.id();
            if !seen.insert(id) || self.scene.lights.contains_key(&id) {
                return Err(SceneError::DuplicateLight(id));
            }
        }
        for light in lights {
            self.scene.lights.insert(light.id(), light);
        }
        Ok(self)
    }

    /// Adds a named group of lights and the instances they illuminate.
    ///
    /// An instance may belong to several groups, provided every registration
    /// carries the same contents. It may not also be unlit.
    pub fn add_group(
        &mut self,
        name: impl Into<String>,
        lights: impl IntoIterator<Item = LightId>,
        instances: impl IntoIterator<Item = Instance>,
    ) -> Result<&mut Self, SceneError> {
        let name = name.into();
        if self.scene.groups.contains_key(&name) {
            return Err(SceneError::DuplicateGroup(name));
        }

        let mut light_ids = BTreeSet::new();
        for id in lights {
            if !light_ids.insert(id) {
                return Err(SceneError::DuplicateLight(id));
            }
            if !self.scene.lights.contains_key(&id) {
                return Err(SceneError::UnknownLight { group: name, light: id });
            }
        }

        let instances: Vec<Instance> = instances.into_iter().collect();
        self.check_instances(&instances)?;

        for instance in &instances {
            if let Some(group) = self.unlit_owner.get(&instance.id) {
                return Err(SceneError::InstanceAlreadyUnlit {
                    instance: instance.id,
                    group: group.clone(),
                });
            }
            for id in &light_ids {
                let light = self.scene.lights.get(id);
                if !is_valid_light_material(light, &instance.material) {
                    return Err(SceneError::IllegalLitMaterial {
                        instance: instance.id,
                        light: *id,
                        material: instance.material.name(),
                    });
                }
            }
        }

        let members: BTreeSet<InstanceId> = instances.iter().map(|i| i.id).collect();
        for id in &members {
            self.lit_owner.entry(*id).or_insert_with(|| name.clone());
        }
        self.commit_instances(instances);
        log::debug!("Added light group '{}' with {} lights", name, light_ids.len());
        self.scene.groups.insert(
            name.clone(),
            LightGroup {
                name,
                lights: light_ids,
                instances: members,
            },
        );
        Ok(self)
    }

    /// Adds an unlit instance to the default group (`"*"`).
    pub fn add_unlit(&mut self, instance: Instance) -> Result<&mut Self, SceneError> {
        self.add_unlit_in(DEFAULT_UNLIT_GROUP, instance)
    }

    /// Adds an unlit instance to a named unlit group.
    ///
    /// An instance belongs to at most one unlit group, and never to a light
    /// group as well.
    pub fn add_unlit_in(
        &mut self,
        group: impl Into<String>,
        instance: Instance,
    ) -> Result<&mut Self, SceneError> {
        let group = group.into();
        self.check_instances(std::slice::from_ref(&instance))?;

        if !is_valid_light_material(None, &instance.material) {
            return Err(SceneError::IllegalUnlitMaterial {
                instance: instance.id,
                material: instance.material.name(),
            });
        }
        if let Some(existing) = self.unlit_owner.get(&instance.id) {
            if *existing != group {
                return Err(SceneError::UnlitInstanceRegrouped {
                    instance: instance.id,
                    existing: existing.clone(),
                });
            }
        }
        if let Some(lit) = self.lit_owner.get(&instance.id) {
            return Err(SceneError::InstanceAlreadyLit {
                instance: instance.id,
                group: lit.clone(),
            });
        }

        let id = instance.id;
        self.commit_instances([instance]);
        self.unlit_owner.insert(id, group.clone());
        self.scene.unlit.entry(group).or_default().insert(id);
        Ok(self)
    }

    /// Finishes the scene.
    pub fn build(self) -> Scene {
        log::info!(
            "Built scene: {} lights, {} light groups, {} unlit groups, {} instances",
            self.scene.lights.len(),
            self.scene.groups.len(),
            self.scene.unlit.len(),
            self.scene.instances.len()
        );
        self.scene
    }

    fn check_instances(&self, instances: &[Instance]) -> Result<(), SceneError> {
        let mut seen = BTreeSet::new();
        for instance in instances {
            if !seen.insert(instance.id) {
                return Err(SceneError::DuplicateInstance(instance.id));
            }
            if let Some(existing) = self.scene.instances.get(&instance.id) {
                if existing != instance {
                    return Err(SceneError::ConflictingInstance(instance.id));
                }
            }
        }
        Ok(())
    }

    fn commit_instances(&mut self, instances: impl IntoIterator<Item = Instance>) {
        for instance in instances {
            self.scene.instances.entry(instance.id).or_insert(instance);
        }
    }
}
