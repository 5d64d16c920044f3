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

//! Vertex program selection.

use prism_core::{material::Normal, Light};

/// The kind of light a shader is generated for, as seen by the vertex stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightClass {
    /// Unlit.
    None,
    /// A directional light.
    Directional,
    /// A spherical light.
    Spherical,
    /// A projective light, which needs light-space clip positions.
    Projective,
}

impl LightClass {
    /// Every light class.
    pub const ALL: [LightClass; 4] = [
        LightClass::None,
        LightClass::Directional,
        LightClass::Spherical,
        LightClass::Projective,
    ];

    /// Classifies an optional light.
    pub fn of(light: Option<&Light>) -> Self {
        match light {
            None => LightClass::None,
            Some(Light::Directional(_)) => LightClass::Directional,
            Some(Light::Spherical(_)) => LightClass::Spherical,
            Some(Light::Projective(_)) => LightClass::Projective,
        }
    }
}

/// The kind of normal a shader reads, as seen by the vertex stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalClass {
    /// Interpolated vertex normals.
    Vertex,
    /// Normal maps, which need a tangent frame.
    Mapped,
}

impl NormalClass {
    /// Every normal class.
    pub const ALL: [NormalClass; 2] = [NormalClass::Vertex, NormalClass::Mapped];

    /// Classifies a normal axis value.
    pub fn of(normal: &Normal) -> Self {
        match normal {
            Normal::Vertex => NormalClass::Vertex,
            Normal::Mapped { .. } => NormalClass::Mapped,
        }
    }
}

/// One of the vertex shaders provided by the shading library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexProgram {
    /// Positions, normals and uvs.
    Standard,
    /// [`VertexProgram::Standard`] plus a tangent frame.
    StandardMapped,
    /// [`VertexProgram::Standard`] plus light-space clip positions.
    Projective,
    /// [`VertexProgram::Projective`] plus a tangent frame.
    ProjectiveMapped,
}

impl VertexProgram {
    /// The qualified entry point name.
    pub fn name(&self) -> &'static str {
        match self {
            VertexProgram::Standard => "VertexShaders.standard",
            VertexProgram::StandardMapped => "VertexShaders.standard_NM",
            VertexProgram::Projective => "VertexShaders.standard_LP",
            VertexProgram::ProjectiveMapped => "VertexShaders.standard_LP_NM",
        }
    }
}

/// Selects the vertex program for a light and normal class.
pub fn select_vertex_program(light: LightClass, normal: NormalClass) -> VertexProgram {
    match (light, normal) {
        (LightClass::None | LightClass::Directional | LightClass::Spherical, NormalClass::Vertex) => {
            VertexProgram::Standard
        }
        (LightClass::None | LightClass::Directional | LightClass::Spherical, NormalClass::Mapped) => {
            VertexProgram::StandardMapped
        }
        (LightClass::Projective, NormalClass::Vertex) => VertexProgram::Projective,
        (LightClass::Projective, NormalClass::Mapped) => VertexProgram::ProjectiveMapped,
    }
}
