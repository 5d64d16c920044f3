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

use super::InstanceId;
use prism_core::light::LightId;

/// Errors raised while assembling a scene.
///
/// Each rejected operation leaves the builder unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    /// A light id was added twice.
    #[error("Duplicate light {0}")]
    DuplicateLight(LightId),
    /// A group references a light that was never added.
    #[error("Group '{group}' references unknown light {light}")]
    UnknownLight {
        /// The group being added.
        group: String,
        /// The missing light.
        light: LightId,
    },
    /// The same instance id appeared twice in one addition.
    #[error("Duplicate instance {0}")]
    DuplicateInstance(InstanceId),
    /// An instance id was re-registered with different contents.
    #[error("Instance {0} was already added with different contents")]
    ConflictingInstance(InstanceId),
    /// A group name was used twice.
    #[error("Duplicate light group '{0}'")]
    DuplicateGroup(String),
    /// An instance's material cannot be drawn under one of its group's lights.
    #[error("Instance {instance} ({material}) cannot be lit by {light}")]
    IllegalLitMaterial {
        /// The offending instance.
        instance: InstanceId,
        /// The light it would be drawn under.
        light: LightId,
        /// The material's name.
        material: &'static str,
    },
    /// An instance's material cannot be drawn unlit.
    #[error("Instance {instance} ({material}) cannot be drawn unlit")]
    IllegalUnlitMaterial {
        /// The offending instance.
        instance: InstanceId,
        /// The material's name.
        material: &'static str,
    },
    /// An unlit instance is already a member of another unlit group.
    #[error("Unlit instance {instance} is already in group '{existing}'")]
    UnlitInstanceRegrouped {
        /// The offending instance.
        instance: InstanceId,
        /// The group it already belongs to.
        existing: String,
    },
    /// A lit instance cannot also be drawn unlit.
    #[error("Instance {instance} is already lit by group '{group}'")]
    InstanceAlreadyLit {
        /// The offending instance.
        instance: InstanceId,
        /// A light group it belongs to.
        group: String,
    },
    /// An unlit instance cannot also join a light group.
    #[error("Instance {instance} is already unlit in group '{group}'")]
    InstanceAlreadyUnlit {
        /// The offending instance.
        instance: InstanceId,
        /// The unlit group it belongs to.
        group: String,
    },
}
