//! Strict template rendering
//!
//! Templates are handlebars text evaluated in strict mode: a reference to a
//! field the schema does not have, or to a helper that is not registered,
//! fails the render instead of producing an empty string.
//!
//! The template sees:
//!
//! - the schema definitions under `all_enums` or `all_structs`
//! - `source_file_path`: the schema document path, as configured
//! - `current_year`
//! - the helpers: `normalize`, `to_upper_snake`, `common_prefix`, `strip_prefix`,
//!   `to_doc_text`, `map_type`, `path_dirname`, `path_basename`
//!
//! Rendering is pure. The same schema, template and inputs always give the
//! same bytes.

use crate::error::{CodegenError, CodegenResult};
use crate::helpers;
use crate::schema::SchemaDocument;
use handlebars::{Handlebars, RenderError, RenderErrorReason};
use serde_json::{Map, Value};

/// Values exposed to templates alongside the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInputs {
    /// Path of the schema document the definitions came from.
    pub source_file_path: String,

    /// Year stamped into generated headers.
    pub current_year: i32,
}

/// Strict-mode template renderer with the generator helpers registered.
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        // Generated output is source code, not HTML.
        registry.register_escape_fn(handlebars::no_escape);
        helpers::register(&mut registry);

        Self { registry }
    }

    /// Render `template_text` against `schema`.
    pub fn render(
        &self,
        schema: &SchemaDocument,
        template_text: &str,
        inputs: &RenderInputs,
    ) -> CodegenResult<String> {
        let context = Self::context(schema, inputs)?;

        let rendered = self
            .registry
            .render_template(template_text, &context)
            .map_err(classify)?;

        tracing::debug!(
            kind = %schema.kind(),
            definitions = schema.len(),
            bytes = rendered.len(),
            "Rendered template"
        );

        Ok(rendered)
    }

    fn context(schema: &SchemaDocument, inputs: &RenderInputs) -> CodegenResult<Value> {
        let definitions = serde_json::to_value(schema)
            .map_err(|e| CodegenError::Template(format!("cannot expose schema: {e}")))?;

        let mut context = Map::new();
        context.insert(schema.kind().data_name().to_string(), definitions);
        context.insert(
            "source_file_path".to_string(),
            Value::from(inputs.source_file_path.as_str()),
        );
        context.insert("current_year".to_string(), Value::from(inputs.current_year));

        Ok(Value::Object(context))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a handlebars failure onto the generator's error taxonomy.
fn classify(err: RenderError) -> CodegenError {
    match err.reason() {
        RenderErrorReason::MissingVariable(name) => CodegenError::UndefinedReference {
            name: name.clone().unwrap_or_else(|| "<unnamed>".to_string()),
        },
        RenderErrorReason::HelperNotFound(name) => {
            CodegenError::UndefinedReference { name: name.clone() }
        }
        RenderErrorReason::NestedError(inner) => match (**inner).downcast_ref::<CodegenError>() {
            Some(CodegenError::UnsupportedType { annotation }) => CodegenError::UnsupportedType {
                annotation: annotation.clone(),
            },
            _ => CodegenError::Template(err.to_string()),
        },
        _ => CodegenError::Template(err.to_string()),
    }
}
