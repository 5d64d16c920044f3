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

//! Shading configuration loaded from RON.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors that can occur while loading or saving [`ShadingSettings`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("Failed to read settings from '{path}': {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The settings text is not valid RON for [`ShadingSettings`].
    #[error("Invalid settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// The settings could not be serialized.
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

/// Capabilities of the target renderer that change generated code.
///
/// These are fixed for a generation session and are deliberately not part of
/// a shader's code identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererCapabilities {
    /// Whether shadow maps can be sampled as depth textures. Without them,
    /// basic shadow depths are packed into RGBA4444 colour targets.
    pub depth_textures: bool,
}

impl Default for RendererCapabilities {
    fn default() -> Self {
        Self {
            depth_textures: true,
        }
    }
}

/// Settings for a shader generation session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShadingSettings {
    /// Capabilities of the target renderer.
    pub capabilities: RendererCapabilities,
    /// Generate every enumerated case up front instead of on demand.
    pub pregenerate: bool,
    /// Log each generated source at `trace` level.
    pub trace_sources: bool,
}

impl ShadingSettings {
    /// Parses settings from RON text. Missing fields take their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_core::settings::ShadingSettings;
    ///
    /// let s = ShadingSettings::from_ron("(capabilities: (depth_textures: false))").unwrap();
    /// assert!(!s.capabilities.depth_textures);
    /// assert!(!s.pregenerate);
    /// ```
    pub fn from_ron(text: &str) -> Result<Self, SettingsError> {
        Ok(ron::from_str(text)?)
    }

    /// Reads and parses a RON settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_ron(&text)?;
        log::info!("Loaded shading settings from '{}'", path.display());
        Ok(settings)
    }

    /// Serializes the settings as pretty-printed RON.
    pub fn to_ron(&self) -> Result<String, SettingsError> {
        let config = ron::ser::PrettyConfig::default().indentor("  ".to_string());
        Ok(ron::ser::to_string_pretty(self, config)?)
    }
}
