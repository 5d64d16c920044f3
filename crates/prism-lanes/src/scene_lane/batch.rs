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

use prism_core::{light::LightId, CodeIdentity};
use prism_data::scene::{InstanceId, Scene};
use std::collections::{BTreeMap, BTreeSet};

/// Instances of one batch.
pub type Batch = BTreeSet<InstanceId>;

/// Batches of a scene, keyed by light and group name.
///
/// Built from an immutable [`Scene`] and discarded when the scene changes.
/// An instance appears in at most one unlit batch, and at most once per
/// (light, group) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneBatches {
    unlit: BTreeMap<String, Batch>,
    lit: BTreeMap<LightId, BTreeMap<String, Batch>>,
}

impl SceneBatches {
    /// Batches `scene`.
    ///
    /// Every member of a light group is added under each light of that group.
    /// Reaching the same instance through several groups under one light
    /// keeps it once per group.
    pub fn from_scene(scene: &Scene) -> Self {
        let mut batches = Self::default();

        for (group, members) in scene.unlit_groups() {
            batches
                .unlit
                .entry(group.to_string())
                .or_default()
                .extend(members.iter().copied());
        }

        for group in scene.groups() {
            for light in &group.lights {
                batches
                    .lit
                    .entry(*light)
                    .or_default()
                    .entry(group.name.clone())
                    .or_default()
                    .extend(group.instances.iter().copied());
            }
        }

        log::debug!(
            "Batched scene: {} unlit groups, {} lights, {} instances",
            batches.unlit.len(),
            batches.lit.len(),
            batches.instance_count()
        );
        batches
    }

    /// All unlit batches by group name.
    pub fn unlit(&self) -> &BTreeMap<String, Batch> {
        &self.unlit
    }

    /// All lit batches by light, then group name.
    pub fn lit(&self) -> &BTreeMap<LightId, BTreeMap<String, Batch>> {
        &self.lit
    }

    /// The unlit batch of `group`.
    pub fn unlit_batches(&self, group: &str) -> Option<&Batch> {
        self.unlit.get(group)
    }

    /// The batch of `group` under `light`.
    pub fn lit_batches(&self, light: LightId, group: &str) -> Option<&Batch> {
        self.lit.get(&light)?.get(group)
    }

    /// Number of distinct lights with at least one batch.
    pub fn light_count(&self) -> usize {
        self.lit.len()
    }

    /// Number of distinct instances across every batch.
    pub fn instance_count(&self) -> usize {
        self.unlit
            .values()
            .chain(self.lit.values().flat_map(BTreeMap::values))
            .flatten()
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Splits one batch by the code identity of each instance's shader, so
    /// each generated program is bound once per batch.
    ///
    /// `light` is `None` for unlit batches. Returns an empty map if there is
    /// no such batch.
    pub fn by_shader(
        &self,
        scene: &Scene,
        light: Option<LightId>,
        group: &str,
    ) -> BTreeMap<CodeIdentity, Batch> {
        let batch = match light {
            None => self.unlit_batches(group),
            Some(id) => self.lit_batches(id, group),
        };
        let light = light.and_then(|id| scene.light(id));

        let mut split: BTreeMap<CodeIdentity, Batch> = BTreeMap::new();
        for id in batch.into_iter().flatten() {
            if let Some(instance) = scene.instance(*id) {
                split
                    .entry(CodeIdentity::new(light, &instance.material))
                    .or_default()
                    .insert(*id);
            }
        }
        split
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scene_has_no_batches() {
        let batches = SceneBatches::from_scene(&Scene::default());
        assert_eq!(batches.light_count(), 0);
        assert_eq!(batches.instance_count(), 0);
        assert!(batches.unlit_batches("*").is_none());
        assert!(batches.lit_batches(LightId(0), "g").is_none());
    }
}
