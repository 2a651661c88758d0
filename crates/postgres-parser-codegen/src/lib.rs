//! postgres-parser-codegen - Schema-driven generator for postgres-parser bindings
//!
//! This crate turns the grammar metadata shipped with libpg_query
//! (`srcdata/enum_defs.json`, `srcdata/struct_defs.json`) into Python source
//! by rendering handlebars templates against it:
//! - [`naming`], [`prefix`], [`comment`] and [`types`] transform schema values
//! - [`SchemaDocument`] loads and validates a schema document
//! - [`Renderer`] evaluates a template in strict mode with the helpers registered
//! - [`Generator`] is the registry of runnable generators
//! - [`GeneratorConfig`] locates schemas and templates
//! - [`run`] ties them together and writes the output file

pub mod comment;
pub mod naming;
pub mod prefix;
pub mod types;

mod config;
mod error;
mod generate;
mod helpers;
mod registry;
mod render;
mod schema;

pub use config::{CONFIG_FILE_NAME, GeneratorConfig};
pub use error::{CodegenError, CodegenResult};
pub use generate::{render_generator, run};
pub use registry::{Generator, GeneratorDescriptor};
pub use render::{RenderInputs, Renderer};
pub use schema::{
    EnumDefinition, EnumValue, SchemaDocument, SchemaKind, StructDefinition, StructField,
};
pub use types::NativeType;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CodegenError, CodegenResult, Generator, GeneratorConfig, Renderer, SchemaDocument,
        SchemaKind, render_generator, run,
    };
}
