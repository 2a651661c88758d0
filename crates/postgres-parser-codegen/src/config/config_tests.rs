#![allow(non_snake_case)]

use super::*;
use chrono::Datelike;
use std::path::Path;

#[test]
fn GeneratorConfig___default___uses_upstream_layout() {
    let config = GeneratorConfig::default();

    assert_eq!(config.srcdata_root, Path::new("extern/libpg_query/srcdata"));
    assert_eq!(config.template_root, Path::new("templates"));
    assert_eq!(config.log_level, "warn");
}

#[test]
fn GeneratorConfig___default___year_is_current() {
    let config = GeneratorConfig::default();

    // Allow for the test straddling midnight on 31 December
    let now = chrono::Local::now().year();
    assert!(config.current_year == now || config.current_year == now - 1);
}

#[test]
fn GeneratorConfig___from_toml___empty___uses_defaults() {
    let config = GeneratorConfig::from_toml("").unwrap();

    assert_eq!(config.srcdata_root, Path::new("extern/libpg_query/srcdata"));
    assert_eq!(config.template_root, Path::new("templates"));
}

#[test]
fn GeneratorConfig___from_toml___overrides_fields() {
    let toml = r#"
srcdata_root = "vendor/srcdata"
template_root = "codegen/templates"
current_year = 2021
log_level = "debug"
"#;

    let config = GeneratorConfig::from_toml(toml).unwrap();

    assert_eq!(config.srcdata_root, Path::new("vendor/srcdata"));
    assert_eq!(config.template_root, Path::new("codegen/templates"));
    assert_eq!(config.current_year, 2021);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn GeneratorConfig___from_toml___unknown_key___fails() {
    let err = GeneratorConfig::from_toml("output_dir = \"out\"").unwrap_err();

    assert!(matches!(err, CodegenError::Config(_)), "got {err:?}");
}

#[test]
fn GeneratorConfig___from_toml___wrong_type___fails() {
    let err = GeneratorConfig::from_toml("current_year = \"soon\"").unwrap_err();

    assert!(matches!(err, CodegenError::Config(_)));
}

#[test]
fn GeneratorConfig___relative_to___resolves_relative_roots_only() {
    let config = GeneratorConfig {
        srcdata_root: PathBuf::from("srcdata"),
        template_root: PathBuf::from("/abs/templates"),
        ..GeneratorConfig::default()
    };

    let resolved = config.relative_to(Path::new("/repo"));

    assert_eq!(resolved.srcdata_root, Path::new("/repo/srcdata"));
    assert_eq!(resolved.template_root, Path::new("/abs/templates"));
}

#[test]
fn GeneratorConfig___discover___without_file___uses_defaults_under_root() {
    let dir = tempfile::tempdir().unwrap();

    let config = GeneratorConfig::discover(dir.path()).unwrap();

    assert_eq!(
        config.srcdata_root,
        dir.path().join("extern/libpg_query/srcdata")
    );
    assert_eq!(config.template_root, dir.path().join("templates"));
}

#[test]
fn GeneratorConfig___discover___with_file___loads_and_resolves() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "srcdata_root = \"data\"\ncurrent_year = 2020\n",
    )
    .unwrap();

    let config = GeneratorConfig::discover(dir.path()).unwrap();

    assert_eq!(config.srcdata_root, dir.path().join("data"));
    assert_eq!(config.template_root, dir.path().join("templates"));
    assert_eq!(config.current_year, 2020);
}

#[test]
fn GeneratorConfig___load___invalid_file___names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "srcdata_root = [").unwrap();

    let err = GeneratorConfig::load(&path).unwrap_err();

    match err {
        CodegenError::Config(reason) => assert!(reason.contains(CONFIG_FILE_NAME)),
        other => panic!("expected Config, got {other:?}"),
    }
}

#[test]
fn GeneratorConfig___schema_and_template_paths___follow_registry() {
    let config = GeneratorConfig::default().relative_to(Path::new("/repo"));

    assert_eq!(
        config.schema_path(Generator::Structs),
        Path::new("/repo/extern/libpg_query/srcdata/struct_defs.json")
    );
    assert_eq!(
        config.template_path(Generator::Enums),
        Path::new("/repo/templates/enums.py.hbs")
    );
}
