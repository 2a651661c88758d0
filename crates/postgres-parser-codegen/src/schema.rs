//! Schema documents describing the generated enums and structs
//!
//! The documents come from the upstream grammar (`srcdata/enum_defs.json`,
//! `srcdata/struct_defs.json`). They are parsed into typed records so a
//! malformed document fails before any rendering, but keys the records do not
//! name are carried along untouched and stay visible to templates.

use crate::error::{CodegenError, CodegenResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;

/// The two shapes of schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Enums,
    Structs,
}

impl SchemaKind {
    /// Name the loaded definitions are exposed under in templates.
    pub fn data_name(self) -> &'static str {
        match self {
            SchemaKind::Enums => "all_enums",
            SchemaKind::Structs => "all_structs",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaKind::Enums => write!(f, "enums"),
            SchemaKind::Structs => write!(f, "structs"),
        }
    }
}

/// An enum declared by the grammar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDefinition {
    pub name: String,

    pub values: Vec<EnumValue>,

    /// Keys not modelled above, passed through to templates as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One value of an [`EnumDefinition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    /// Absent for placeholder entries that only carry a comment.
    #[serde(default)]
    pub name: Option<String>,

    /// Explicit value, when the C declaration assigns one.
    #[serde(default)]
    pub value: Option<i64>,

    /// Raw C comment attached to the value.
    #[serde(default)]
    pub comment: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A struct declared by the grammar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructDefinition {
    pub name: String,

    pub fields: Vec<StructField>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One field of a [`StructDefinition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructField {
    pub name: String,

    /// Native type annotation, see [`crate::types::map_type`].
    pub c_type: String,

    #[serde(default)]
    pub comment: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A loaded schema document.
///
/// Serializes as the bare sequence of definitions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaDocument {
    Enums(Vec<EnumDefinition>),
    Structs(Vec<StructDefinition>),
}

impl SchemaDocument {
    /// Read and parse the schema document at `path`.
    pub fn load(kind: SchemaKind, path: &Path) -> CodegenResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CodegenError::io(path, e))?;
        let document = Self::from_json(kind, &text, path)?;

        tracing::debug!(
            path = %path.display(),
            kind = %kind,
            definitions = document.len(),
            "Loaded schema document"
        );

        Ok(document)
    }

    /// Parse a schema document from JSON text. `source` names the document in
    /// errors.
    pub fn from_json(kind: SchemaKind, text: &str, source: &Path) -> CodegenResult<Self> {
        let parsed = match kind {
            SchemaKind::Enums => serde_json::from_str(text).map(SchemaDocument::Enums),
            SchemaKind::Structs => serde_json::from_str(text).map(SchemaDocument::Structs),
        };

        parsed.map_err(|e| CodegenError::SchemaLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn kind(&self) -> SchemaKind {
        match self {
            SchemaDocument::Enums(_) => SchemaKind::Enums,
            SchemaDocument::Structs(_) => SchemaKind::Structs,
        }
    }

    /// Number of definitions in the document.
    pub fn len(&self) -> usize {
        match self {
            SchemaDocument::Enums(defs) => defs.len(),
            SchemaDocument::Structs(defs) => defs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of the definitions, in document order.
    pub fn definition_names(&self) -> Vec<&str> {
        match self {
            SchemaDocument::Enums(defs) => defs.iter().map(|d| d.name.as_str()).collect(),
            SchemaDocument::Structs(defs) => defs.iter().map(|d| d.name.as_str()).collect(),
        }
    }
}
