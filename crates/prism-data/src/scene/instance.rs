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
    math::Mat4,
    Material,
};
use std::collections::BTreeSet;
use std::fmt;

/// Identifies an [`Instance`] within a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u32);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "instance#{}", self.0)
    }
}

/// A mesh drawn with a material at some world transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// The instance's identifier.
    pub id: InstanceId,
    /// The mesh asset to draw.
    pub mesh: AssetUUID,
    /// Model-to-world transform.
    pub transform: Mat4,
    /// The material the mesh is shaded with.
    pub material: Material,
}

impl Instance {
    /// Creates an instance at the origin.
    pub fn new(id: InstanceId, mesh: AssetUUID, material: impl Into<Material>) -> Self {
        Self {
            id,
            mesh,
            transform: Mat4::IDENTITY,
            material: material.into(),
        }
    }

    /// Returns this instance with a different transform.
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }
}

/// A named set of lights and the instances they illuminate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightGroup {
    /// The group name.
    pub name: String,
    /// Lights affecting every member of the group.
    pub lights: BTreeSet<prism_core::light::LightId>,
    /// Member instances.
    pub instances: BTreeSet<InstanceId>,
}
