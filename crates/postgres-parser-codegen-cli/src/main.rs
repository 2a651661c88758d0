//! postgres-parser-codegen CLI - Generate binding sources from grammar metadata
//!
//! Usage: `postgres-parser-codegen <generator_name> <output_file>`
//!
//! Generators:
//! - `enums` - enum classes from `enum_defs.json`
//! - `structs` - struct definitions from `struct_defs.json`
//!
//! Schemas and templates are located through `codegen.toml` in the current
//! directory, or the default repository layout when there is none.

use anyhow::Context;
use clap::Parser;
use postgres_parser_codegen::{CodegenError, GeneratorConfig};
use std::path::PathBuf;
use std::process::ExitCode;

mod logging;

#[derive(Parser)]
#[command(name = "postgres-parser-codegen")]
#[command(author, version, about = "Generate postgres-parser bindings from grammar metadata", long_about = None)]
struct Cli {
    /// Generator to run (enums, structs)
    generator_name: String,

    /// File to write the generated source to
    output_file: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CodegenError>() {
                // Reported on stdout, the way the build scripts expect it
                Some(user_error) if user_error.is_user_error() => println!("{user_error}"),
                _ => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let root = std::env::current_dir().context("cannot determine working directory")?;
    let config = GeneratorConfig::discover(&root)?;

    logging::init_logging(&config.log_level);
    tracing::debug!(?config, "Resolved generator config");

    postgres_parser_codegen::run(&config, &cli.generator_name, &cli.output_file)?;
    Ok(())
}
