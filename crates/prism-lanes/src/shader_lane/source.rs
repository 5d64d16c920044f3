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

//! Structured representation of a generated fragment shader.
//!
//! Axes contribute [`Declaration`]s and [`Value`]s to a [`FragmentShader`]
//! instead of writing text directly. Rendering happens once, in
//! [`FragmentShader::render`], so ordering and formatting live in one place.

use super::{program::VertexProgram, ShaderError};
use std::fmt::{self, Write};

/// The type of a declared fragment input or parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderType {
    /// `float`
    Float,
    /// `vector_2f`
    Vector2f,
    /// `vector_3f`
    Vector3f,
    /// `vector_4f`
    Vector4f,
    /// `matrix_4x4f`
    Matrix4x4f,
    /// `sampler_2d`
    Sampler2d,
    /// `sampler_cube`
    SamplerCube,
    /// A record type `t` exported by a shading library module.
    Record(&'static str),
}

impl fmt::Display for ShaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderType::Float => f.write_str("float"),
            ShaderType::Vector2f => f.write_str("vector_2f"),
            ShaderType::Vector3f => f.write_str("vector_3f"),
            ShaderType::Vector4f => f.write_str("vector_4f"),
            ShaderType::Matrix4x4f => f.write_str("matrix_4x4f"),
            ShaderType::Sampler2d => f.write_str("sampler_2d"),
            ShaderType::SamplerCube => f.write_str("sampler_cube"),
            ShaderType::Record(module) => write!(f, "{module}.t"),
        }
    }
}

/// A name made available to the fragment shader body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    /// An interpolated input written by the vertex shader.
    In {
        /// The input name, prefixed `f_`.
        name: &'static str,
        /// The input type.
        ty: ShaderType,
    },
    /// A uniform parameter set by the renderer.
    Parameter {
        /// The parameter name, prefixed `p_` (values) or `t_` (samplers).
        name: &'static str,
        /// The parameter type.
        ty: ShaderType,
    },
}

impl Declaration {
    /// Declares a fragment input.
    pub const fn input(name: &'static str, ty: ShaderType) -> Self {
        Declaration::In { name, ty }
    }

    /// Declares a uniform parameter.
    pub const fn parameter(name: &'static str, ty: ShaderType) -> Self {
        Declaration::Parameter { name, ty }
    }

    /// The declared name.
    pub fn name(&self) -> &'static str {
        match self {
            Declaration::In { name, .. } | Declaration::Parameter { name, .. } => name,
        }
    }

    /// The declared type.
    pub fn ty(&self) -> ShaderType {
        match self {
            Declaration::In { ty, .. } | Declaration::Parameter { ty, .. } => *ty,
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::In { name, ty } => write!(f, "in {name} : {ty};"),
            Declaration::Parameter { name, ty } => write!(f, "parameter {name} : {ty};"),
        }
    }
}

/// A named local value computed in the `with` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    /// The local name.
    pub name: &'static str,
    /// The defining expression.
    pub expr: String,
}

/// A fragment shader under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentShader {
    declarations: Vec<Declaration>,
    values: Vec<Value>,
    discard: Option<String>,
    output: Option<&'static str>,
}

impl FragmentShader {
    /// Creates an empty shader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration unless one with the same name exists.
    ///
    /// Re-declaring a name with a different type is a generator fault.
    pub fn declare(&mut self, declaration: Declaration) -> Result<(), ShaderError> {
        match self
            .declarations
            .iter()
            .find(|d| d.name() == declaration.name())
        {
            Some(existing) if *existing == declaration => Ok(()),
            Some(existing) => Err(ShaderError::ConflictingDeclaration {
                name: declaration.name(),
                existing: existing.to_string(),
                requested: declaration.to_string(),
            }),
            None => {
                self.declarations.push(declaration);
                Ok(())
            }
        }
    }

    /// Adds several declarations in order.
    pub fn declare_all(
        &mut self,
        declarations: impl IntoIterator<Item = Declaration>,
    ) -> Result<(), ShaderError> {
        declarations.into_iter().try_for_each(|d| self.declare(d))
    }

    /// Appends a local value.
    pub fn value(&mut self, name: &'static str, expr: impl Into<String>) {
        self.values.push(Value {
            name,
            expr: expr.into(),
        });
    }

    /// Discards the fragment when `condition` holds.
    pub fn discard_when(&mut self, condition: impl Into<String>) {
        self.discard = Some(condition.into());
    }

    /// Names the value written to the colour output.
    pub fn output(&mut self, value: &'static str) {
        self.output = Some(value);
    }

    /// Declarations, in emission order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Values, in emission order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Renders the module body: the fragment shader and the program wiring.
    pub fn render(
        &self,
        out: &mut String,
        module: &str,
        vertex: VertexProgram,
    ) -> Result<(), ShaderError> {
        let output = self.output.ok_or(ShaderError::MissingOutput {
            module: module.to_string(),
        })?;
        self.write(out, module, output, vertex)
            .map_err(|_| ShaderError::Format {
                module: module.to_string(),
            })
    }

    fn write(
        &self,
        out: &mut String,
        module: &str,
        output: &str,
        vertex: VertexProgram,
    ) -> fmt::Result {
        writeln!(out, "module {module} is")?;
        writeln!(out)?;
        writeln!(out, "  shader fragment f is")?;
        for declaration in &self.declarations {
            writeln!(out, "    {declaration}")?;
        }
        writeln!(out, "    out out_0 : vector_4f as 0;")?;
        writeln!(out, "  with")?;
        for value in &self.values {
            writeln!(out, "    value {} = {};", value.name, value.expr)?;
        }
        writeln!(out, "  as")?;
        if let Some(condition) = &self.discard {
            writeln!(out, "    discard ({condition});")?;
        }
        writeln!(out, "    out out_0 = {output};")?;
        writeln!(out, "  end;")?;
        writeln!(out)?;
        writeln!(out, "  shader program p is")?;
        writeln!(out, "    vertex {};", vertex.name())?;
        writeln!(out, "    fragment f;")?;
        writeln!(out, "  end;")?;
        writeln!(out)?;
        writeln!(out, "end;")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_declaration_collapses_to_first() {
        let mut f = FragmentShader::new();
        f.declare(Declaration::input("f_uv", ShaderType::Vector2f))
            .unwrap();
        f.declare(Declaration::parameter("t_albedo", ShaderType::Sampler2d))
            .unwrap();
        f.declare(Declaration::input("f_uv", ShaderType::Vector2f))
            .unwrap();
        let names: Vec<_> = f.declarations().iter().map(Declaration::name).collect();
        assert_eq!(names, ["f_uv", "t_albedo"]);
    }

    #[test]
    fn conflicting_declaration_is_a_fault() {
        let mut f = FragmentShader::new();
        f.declare(Declaration::input("f_uv", ShaderType::Vector2f))
            .unwrap();
        let err = f
            .declare(Declaration::input("f_uv", ShaderType::Vector3f))
            .unwrap_err();
        assert!(matches!(err, ShaderError::ConflictingDeclaration { name: "f_uv", .. }));
    }

    #[test]
    fn render_requires_an_output() {
        let f = FragmentShader::new();
        let mut out = String::new();
        assert!(f.render(&mut out, "M", VertexProgram::Standard).is_err());
    }

    #[test]
    fn render_layout() {
        let mut f = FragmentShader::new();
        f.declare(Declaration::parameter("p_colour", ShaderType::Vector4f))
            .unwrap();
        f.value("rgba", "p_colour");
        f.output("rgba");

        let mut out = String::new();
        f.render(&mut out, "M", VertexProgram::Standard).unwrap();
        let expected = [
            "module M is",
            "",
            "  shader fragment f is",
            "    parameter p_colour : vector_4f;",
            "    out out_0 : vector_4f as 0;",
            "  with",
            "    value rgba = p_colour;",
            "  as",
            "    out out_0 = rgba;",
            "  end;",
            "",
            "  shader program p is",
            "    vertex VertexShaders.standard;",
            "    fragment f;",
            "  end;",
            "",
            "end;",
        ];
        assert_eq!(out.lines().collect::<Vec<_>>(), expected);
    }
}
