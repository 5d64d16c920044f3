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

//! # Prism Core
//!
//! The contracts of the shader variant system: the material and light
//! variant model, the validity rules over it, exhaustive case enumeration
//! and the code identities that name each generated shader.

#![warn(missing_docs)]

pub mod asset;
pub mod cases;
pub mod identity;
pub mod light;
pub mod material;
pub mod math;
pub mod rules;
pub mod settings;

pub use identity::CodeIdentity;
pub use light::Light;
pub use material::Material;
pub use settings::{RendererCapabilities, ShadingSettings};
