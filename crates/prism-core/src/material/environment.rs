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

//! The environment reflection axis.

use crate::asset::TextureCube;

/// Environment-mapped reflections.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Environment {
    /// No reflections.
    #[default]
    None,
    /// Reflections blended with the surface color by a constant factor.
    Reflection {
        /// Blend factor between surface color and reflection.
        mix: f32,
        /// The environment cube map.
        cubemap: TextureCube,
    },
    /// Reflections whose blend factor is additionally read from the
    /// specular map.
    ///
    /// Only legal together with [`Specular::Mapped`](super::Specular::Mapped).
    ReflectionMapped {
        /// Blend factor between surface color and reflection.
        mix: f32,
        /// The environment cube map.
        cubemap: TextureCube,
    },
}

impl Environment {
    /// The identity token of this variant, or `None` for [`Environment::None`].
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Environment::None => None,
            Environment::Reflection { .. } => Some("ER"),
            Environment::ReflectionMapped { .. } => Some("ERM"),
        }
    }

    /// A stable, human-readable label for this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Environment::None => "Environment::None",
            Environment::Reflection { .. } => "Environment::Reflection",
            Environment::ReflectionMapped { .. } => "Environment::ReflectionMapped",
        }
    }
}
