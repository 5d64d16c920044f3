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

use super::AssetUUID;

/// A handle to a two-dimensional texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Texture2D(pub AssetUUID);

impl Texture2D {
    /// Creates a handle whose identifier is derived from `name`.
    pub fn named(name: &str) -> Self {
        Self(AssetUUID::from_name(name))
    }
}

/// A handle to a cube map texture, used for environment reflections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureCube(pub AssetUUID);

impl TextureCube {
    /// Creates a handle whose identifier is derived from `name`.
    pub fn named(name: &str) -> Self {
        Self(AssetUUID::from_name(name))
    }
}
