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

//! The fixed package and import header of every generated module.

use std::fmt::{self, Write};

/// The package generated modules belong to.
pub const PACKAGE: &str = "prism.forward";

/// Primitive-type modules imported under short aliases.
pub const ALIASED_IMPORTS: [(&str, &str); 5] = [
    ("prism.parasol.Float", "F"),
    ("prism.parasol.Vector3f", "V3"),
    ("prism.parasol.Vector4f", "V4"),
    ("prism.parasol.Sampler2D", "S2"),
    ("prism.parasol.SamplerCube", "SC"),
];

/// Shading library modules imported by name.
pub const LIBRARY_IMPORTS: [&str; 13] = [
    "prism.shading.Albedo",
    "prism.shading.Alpha",
    "prism.shading.DirectionalLight",
    "prism.shading.Emission",
    "prism.shading.Environment",
    "prism.shading.Normals",
    "prism.shading.ProjectiveLight",
    "prism.shading.Refraction",
    "prism.shading.ShadowBasic",
    "prism.shading.ShadowVariance",
    "prism.shading.Specular",
    "prism.shading.SphericalLight",
    "prism.shading.VertexShaders",
];

pub(super) fn write_preamble(out: &mut String) -> fmt::Result {
    writeln!(out, "package {PACKAGE};")?;
    writeln!(out)?;
    for (module, alias) in ALIASED_IMPORTS {
        writeln!(out, "import {module} as {alias};")?;
    }
    writeln!(out)?;
    for module in LIBRARY_IMPORTS {
        writeln!(out, "import {module};")?;
    }
    writeln!(out)
}
