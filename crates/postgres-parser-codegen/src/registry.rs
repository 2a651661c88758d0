//! Generator registry
//!
//! The fixed table of generators the CLI can run. Each entry names the schema
//! document it reads, the template it renders, and the schema kind that
//! decides how the definitions are exposed to the template.

use crate::error::CodegenError;
use crate::schema::SchemaKind;
use std::fmt;
use std::str::FromStr;

/// A registered generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    /// Python enum classes from `enum_defs.json`
    Enums,
    /// Python struct definitions from `struct_defs.json`
    Structs,
}

/// Static description of a generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorDescriptor {
    pub name: &'static str,
    /// File name of the schema document under the srcdata root
    pub schema_file: &'static str,
    /// File name of the template under the template root
    pub template_file: &'static str,
    pub kind: SchemaKind,
}

impl Generator {
    /// All generators, in registry order.
    pub const ALL: [Generator; 2] = [Generator::Enums, Generator::Structs];

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn descriptor(self) -> GeneratorDescriptor {
        match self {
            Generator::Enums => GeneratorDescriptor {
                name: "enums",
                schema_file: "enum_defs.json",
                template_file: "enums.py.hbs",
                kind: SchemaKind::Enums,
            },
            Generator::Structs => GeneratorDescriptor {
                name: "structs",
                schema_file: "struct_defs.json",
                template_file: "struct_definitions.py.hbs",
                kind: SchemaKind::Structs,
            },
        }
    }

    /// Comma-separated list of registered names, for diagnostics.
    pub fn expected_names() -> String {
        Self::ALL
            .iter()
            .map(|g| g.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Generator {
    type Err = CodegenError;

    /// Exact, case-sensitive lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| CodegenError::UnknownGenerator {
                name: s.to_string(),
                expected: Self::expected_names(),
            })
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "registry/registry_tests.rs"]
mod registry_tests;
