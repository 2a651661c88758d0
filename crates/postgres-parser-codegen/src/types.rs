//! Native type annotation mapping.
//!
//! Struct fields in the schema carry the C type of the upstream member. Only a
//! closed set of annotations is understood. Anything else is an error.

use crate::error::{CodegenError, CodegenResult};
use std::fmt;
use std::str::FromStr;

/// A recognized native type category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    /// A C `int`.
    Int,

    /// A pointer to a NUL-terminated character sequence.
    CharPointer,
}

impl NativeType {
    /// All recognized categories.
    pub const ALL: [NativeType; 2] = [NativeType::Int, NativeType::CharPointer];

    /// Annotation spellings that parse to this category.
    pub fn spellings(self) -> &'static [&'static str] {
        match self {
            NativeType::Int => &["int", "ctypes.c_int"],
            NativeType::CharPointer => &["char*", "char *", "ctypes.POINTER(ctypes.c_char)"],
        }
    }

    /// The target-language type name.
    pub fn target_type(self) -> &'static str {
        match self {
            NativeType::Int => "int",
            NativeType::CharPointer => "str",
        }
    }
}

impl FromStr for NativeType {
    type Err = CodegenError;

    fn from_str(annotation: &str) -> Result<Self, Self::Err> {
        NativeType::ALL
            .into_iter()
            .find(|ty| ty.spellings().contains(&annotation))
            .ok_or_else(|| CodegenError::UnsupportedType {
                annotation: annotation.to_string(),
            })
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spellings()[0])
    }
}

/// Map a native type annotation to its target-language type name.
///
/// # Examples
///
/// ```
/// use postgres_parser_codegen::types::map_type;
///
/// assert_eq!(map_type("int").unwrap(), "int");
/// assert_eq!(map_type("char*").unwrap(), "str");
/// assert!(map_type("Node*").is_err());
/// ```
pub fn map_type(annotation: &str) -> CodegenResult<&'static str> {
    annotation.parse::<NativeType>().map(NativeType::target_type)
}
