//! Generator configuration

use crate::error::{CodegenError, CodegenResult};
use crate::registry::Generator;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional configuration file looked up by [`GeneratorConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "codegen.toml";

/// Generator configuration
///
/// Built once at process start and passed by reference to everything that
/// needs it. All fields have defaults, so an absent or empty `codegen.toml`
/// is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory holding `enum_defs.json` and `struct_defs.json`
    #[serde(default = "default_srcdata_root")]
    pub srcdata_root: PathBuf,

    /// Directory holding the `.hbs` templates
    #[serde(default = "default_template_root")]
    pub template_root: PathBuf,

    /// Year stamped into generated headers
    ///
    /// Defaults to the current local year. Pin it to keep regenerated output
    /// byte-identical across a year boundary.
    #[serde(default = "default_current_year")]
    pub current_year: i32,

    /// Log filter directive for the CLI (e.g. "warn", "debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_srcdata_root() -> PathBuf {
    PathBuf::from("extern/libpg_query/srcdata")
}

fn default_template_root() -> PathBuf {
    PathBuf::from("templates")
}

fn default_current_year() -> i32 {
    chrono::Local::now().year()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            srcdata_root: default_srcdata_root(),
            template_root: default_template_root(),
            current_year: default_current_year(),
            log_level: default_log_level(),
        }
    }
}

impl GeneratorConfig {
    /// Parse configuration from TOML text. Paths are left as written.
    pub fn from_toml(content: &str) -> CodegenResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file, resolving relative roots against the
    /// file's directory.
    pub fn load(path: &Path) -> CodegenResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CodegenError::io(path, e))?;
        let config = Self::from_toml(&content).map_err(|e| match e {
            CodegenError::Config(reason) => {
                CodegenError::Config(format!("{}: {reason}", path.display()))
            }
            other => other,
        })?;

        let base = path.parent().unwrap_or(Path::new(""));
        Ok(config.relative_to(base))
    }

    /// Configuration for the repository rooted at `root`.
    ///
    /// Uses `root/codegen.toml` when it exists, defaults otherwise. Relative
    /// roots are resolved against `root` either way.
    pub fn discover(root: &Path) -> CodegenResult<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default().relative_to(root))
        }
    }

    /// Resolve relative roots against `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        if self.srcdata_root.is_relative() {
            self.srcdata_root = base.join(&self.srcdata_root);
        }
        if self.template_root.is_relative() {
            self.template_root = base.join(&self.template_root);
        }
        self
    }

    /// Path of the schema document `generator` reads.
    pub fn schema_path(&self, generator: Generator) -> PathBuf {
        self.srcdata_root.join(generator.descriptor().schema_file)
    }

    /// Path of the template `generator` renders.
    pub fn template_path(&self, generator: Generator) -> PathBuf {
        self.template_root.join(generator.descriptor().template_file)
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
