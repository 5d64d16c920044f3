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

//! Per-axis declarations for the fragment shader header.
//!
//! Each function appends the inputs and parameters its axis variant reads.
//! Shared inputs are declared by every axis that needs them and collapse to
//! one declaration in [`FragmentShader::declare`].

use super::{
    source::{Declaration, FragmentShader, ShaderType},
    ShaderError,
};
use prism_core::{
    light::Shadow,
    material::{Albedo, Alpha, Depth, Emissive, Environment, Normal, Refractive, Specular},
    Light,
};

const F_UV: Declaration = Declaration::input("f_uv", ShaderType::Vector2f);
const F_NORMAL: Declaration = Declaration::input("f_normal", ShaderType::Vector3f);
const F_POSITION_EYE: Declaration = Declaration::input("f_position_eye", ShaderType::Vector4f);

pub(super) fn light(f: &mut FragmentShader, light: &Light) -> Result<(), ShaderError> {
    match light {
        Light::Directional(_) => f.declare_all([
            Declaration::parameter(
                "p_light_directional",
                ShaderType::Record("DirectionalLight"),
            ),
            F_POSITION_EYE,
        ]),
        Light::Spherical(_) => f.declare_all([
            Declaration::parameter("p_light_spherical", ShaderType::Record("SphericalLight")),
            F_POSITION_EYE,
        ]),
        Light::Projective(projective) => {
            f.declare_all([
                Declaration::parameter(
                    "p_light_projective",
                    ShaderType::Record("ProjectiveLight"),
                ),
                Declaration::parameter("t_light_projection", ShaderType::Sampler2d),
                F_POSITION_EYE,
                Declaration::input("f_position_light_clip", ShaderType::Vector4f),
            ])?;
            match projective.shadow() {
                None => Ok(()),
                Some(Shadow::Basic(_)) => f.declare_all([
                    Declaration::parameter("p_shadow_basic", ShaderType::Record("ShadowBasic")),
                    Declaration::parameter("t_shadow_basic", ShaderType::Sampler2d),
                ]),
                Some(Shadow::Variance(_)) => f.declare_all([
                    Declaration::parameter(
                        "p_shadow_variance",
                        ShaderType::Record("ShadowVariance"),
                    ),
                    Declaration::parameter("t_shadow_variance", ShaderType::Sampler2d),
                ]),
            }
        }
    }
}

pub(super) fn alpha(f: &mut FragmentShader, alpha: &Alpha) -> Result<(), ShaderError> {
    f.declare(Declaration::parameter("p_opacity", ShaderType::Float))?;
    match alpha {
        Alpha::Constant { .. } => Ok(()),
        Alpha::OneMinusDot { .. } => f.declare(F_POSITION_EYE),
    }
}

pub(super) fn albedo(f: &mut FragmentShader, albedo: &Albedo) -> Result<(), ShaderError> {
    f.declare(Declaration::parameter("p_albedo", ShaderType::Record("Albedo")))?;
    match albedo {
        Albedo::Untextured { .. } => Ok(()),
        Albedo::Textured { .. } => f.declare_all([
            Declaration::parameter("t_albedo", ShaderType::Sampler2d),
            F_UV,
        ]),
    }
}

pub(super) fn depth(f: &mut FragmentShader, depth: &Depth) -> Result<(), ShaderError> {
    match depth {
        Depth::Constant => Ok(()),
        Depth::Alpha { .. } => f.declare(Declaration::parameter(
            "p_depth_threshold",
            ShaderType::Float,
        )),
    }
}

pub(super) fn emissive(f: &mut FragmentShader, emissive: &Emissive) -> Result<(), ShaderError> {
    match emissive {
        Emissive::None => Ok(()),
        Emissive::Constant { .. } => f.declare(Declaration::parameter(
            "p_emission",
            ShaderType::Record("Emission"),
        )),
        Emissive::Mapped { .. } => f.declare_all([
            Declaration::parameter("p_emission", ShaderType::Record("Emission")),
            Declaration::parameter("t_emission", ShaderType::Sampler2d),
            F_UV,
        ]),
    }
}

pub(super) fn normal(f: &mut FragmentShader, normal: &Normal) -> Result<(), ShaderError> {
    match normal {
        Normal::Vertex => f.declare(F_NORMAL),
        Normal::Mapped { .. } => f.declare_all([
            F_NORMAL,
            Declaration::input("f_tangent", ShaderType::Vector3f),
            Declaration::input("f_bitangent", ShaderType::Vector3f),
            F_UV,
            Declaration::parameter("t_normal", ShaderType::Sampler2d),
        ]),
    }
}

pub(super) fn specular(f: &mut FragmentShader, specular: &Specular) -> Result<(), ShaderError> {
    match specular {
        Specular::None => Ok(()),
        Specular::Constant { .. } => f.declare(Declaration::parameter(
            "p_specular",
            ShaderType::Record("Specular"),
        )),
        Specular::Mapped { .. } => f.declare_all([
            Declaration::parameter("p_specular", ShaderType::Record("Specular")),
            Declaration::parameter("t_specular", ShaderType::Sampler2d),
            F_UV,
        ]),
    }
}

pub(super) fn environment(
    f: &mut FragmentShader,
    environment: &Environment,
) -> Result<(), ShaderError> {
    match environment {
        Environment::None => Ok(()),
        Environment::Reflection { .. } | Environment::ReflectionMapped { .. } => f.declare_all([
            Declaration::parameter("p_environment", ShaderType::Record("Environment")),
            Declaration::parameter("t_environment", ShaderType::SamplerCube),
            Declaration::parameter("p_view_inverse", ShaderType::Matrix4x4f),
            F_POSITION_EYE,
        ]),
    }
}

pub(super) fn refractive(
    f: &mut FragmentShader,
    refractive: &Refractive,
) -> Result<(), ShaderError> {
    f.declare_all([
        Declaration::parameter("p_refraction", ShaderType::Record("Refraction")),
        Declaration::parameter("t_refraction_scene", ShaderType::Sampler2d),
        Declaration::input("f_position_clip", ShaderType::Vector4f),
    ])?;
    match refractive {
        Refractive::Masked { .. } => f.declare(Declaration::parameter(
            "t_refraction_mask",
            ShaderType::Sampler2d,
        )),
        Refractive::Unmasked { .. } => Ok(()),
    }
}
