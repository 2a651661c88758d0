//! Error types for the code generator

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Error type for generator operations
///
/// Every variant aborts the run. Nothing is downgraded to a warning.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// The schema document is not a sequence of well-formed definitions
    #[error("failed to load schema {}: {reason}", path.display())]
    SchemaLoad { path: PathBuf, reason: String },

    /// A native type annotation outside the recognized set
    #[error("unsupported native type annotation: {annotation:?}")]
    UnsupportedType { annotation: String },

    /// A template referenced a field or helper that does not exist
    #[error("undefined reference in template: {name}")]
    UndefinedReference { name: String },

    /// The requested generator is not registered
    #[error("Undefined generator: '{name}' (expected one of: {expected})")]
    UnknownGenerator { name: String, expected: String },

    /// Template syntax or evaluation error
    #[error("template error: {0}")]
    Template(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Failed to read or write a file
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CodegenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CodegenError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true for errors the user caused by naming a generator that
    /// does not exist, as opposed to a failed generation
    pub fn is_user_error(&self) -> bool {
        matches!(self, CodegenError::UnknownGenerator { .. })
    }
}

impl From<toml::de::Error> for CodegenError {
    fn from(err: toml::de::Error) -> Self {
        CodegenError::Config(err.to_string())
    }
}
