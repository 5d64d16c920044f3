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

//! Construction-time errors for composite materials.

/// A material could not be constructed because its axis values form an
/// illegal combination.
///
/// These are recoverable, user-facing errors: the offending material is simply
/// never built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaterialError {
    /// A specular-mapped environment was combined with a specular component
    /// that has no map to read the mix factor from.
    #[error("{environment} requires Specular::Mapped, found {specular}")]
    EnvironmentRequiresSpecularMap {
        /// The environment variant label.
        environment: &'static str,
        /// The specular variant label.
        specular: &'static str,
    },
    /// Alpha-tested depth was combined with an albedo that has no texture.
    #[error("{depth} requires Albedo::Textured, found {albedo}")]
    DepthRequiresTexturedAlbedo {
        /// The depth variant label.
        depth: &'static str,
        /// The albedo variant label.
        albedo: &'static str,
    },
    /// A specular-only material was given `Specular::None`.
    #[error("specular-only materials require a specular component")]
    SpecularOnlyWithoutSpecular,
}
