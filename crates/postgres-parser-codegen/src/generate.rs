//! Generation orchestration
//!
//! Resolves a generator name, loads its schema and template, renders, and
//! writes the result. The output file is only created once rendering has
//! succeeded, so a failed run leaves no partial output behind.

use crate::config::GeneratorConfig;
use crate::error::{CodegenError, CodegenResult};
use crate::registry::Generator;
use crate::render::{RenderInputs, Renderer};
use crate::schema::SchemaDocument;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Render `generator` with the inputs described by `config`.
pub fn render_generator(generator: Generator, config: &GeneratorConfig) -> CodegenResult<String> {
    let descriptor = generator.descriptor();
    let schema_path = config.schema_path(generator);
    let template_path = config.template_path(generator);

    tracing::debug!(
        generator = descriptor.name,
        schema = %schema_path.display(),
        template = %template_path.display(),
        "Resolved generator inputs"
    );

    let schema = SchemaDocument::load(descriptor.kind, &schema_path)?;
    let template_text = std::fs::read_to_string(&template_path)
        .map_err(|e| CodegenError::io(&template_path, e))?;

    let inputs = RenderInputs {
        source_file_path: schema_path.display().to_string(),
        current_year: config.current_year,
    };

    Renderer::new().render(&schema, &template_text, &inputs)
}

/// Run the generator named `name` and write its output to `output_path`.
pub fn run(config: &GeneratorConfig, name: &str, output_path: &Path) -> CodegenResult<()> {
    let generator: Generator = name.parse()?;

    tracing::info!(generator = %generator, output = %output_path.display(), "Generating");

    let rendered = render_generator(generator, config)?;

    let mut file = File::create(output_path).map_err(|e| CodegenError::io(output_path, e))?;
    file.write_all(rendered.as_bytes())
        .map_err(|e| CodegenError::io(output_path, e))?;

    tracing::info!(
        generator = %generator,
        output = %output_path.display(),
        bytes = rendered.len(),
        "Wrote generated file"
    );

    Ok(())
}
