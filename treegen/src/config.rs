//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treegen/treegen.toml`
//! 3. Environment variables: `TREEGEN_*` prefix, `__` for nesting
//!    (e.g. `TREEGEN_JOIN_BENCH__ROWS=50`)
//! 4. Command-line flags (applied by the CLI)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::util::path::expand_env_vars;

/// Target of the generated MySQL import script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MysqlConfig {
    /// MySQL user passed as `-u<user>`
    pub user: String,
    pub database: String,
    pub table: String,
    /// CSV file to import (default: `<table>.csv`)
    pub csv: Option<String>,
}

impl Default for MysqlConfig {
    fn default() -> Self {
        Self {
            user: "root".into(),
            database: "studyjoin".into(),
            table: "emp".into(),
            csv: None,
        }
    }
}

impl MysqlConfig {
    pub fn csv_path(&self) -> String {
        self.csv
            .clone()
            .unwrap_or_else(|| format!("{}.csv", self.table))
    }
}

/// Shape of the generated join benchmark script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct JoinBenchConfig {
    pub database: String,
    /// Number of tables `t1..tN`
    pub tables: u32,
    /// Rows inserted per table
    pub rows: u64,
    /// Output file, `-` for stdout
    pub output: String,
}

impl Default for JoinBenchConfig {
    fn default() -> Self {
        Self {
            database: "studyjoins".into(),
            tables: 3,
            rows: 1000,
            output: "tmp.sql".into(),
        }
    }
}

/// Unified configuration for treegen.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Seed for generated names; random when unset
    pub seed: Option<u64>,
    pub mysql: MysqlConfig,
    pub join_bench: JoinBenchConfig,
}

/// Get the XDG config directory for treegen.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treegen").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treegen.toml"))
}

impl Settings {
    /// Load settings with layered precedence from the XDG location.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings using `global_path` as the config file, if it exists.
    pub fn load_from(global_path: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Compiled defaults
        let mut builder =
            Config::builder().add_source(Config::try_from(&Settings::default()).map_err(config_err)?);

        // 2. Global config file
        if let Some(path) = global_path.filter(|p| p.exists()) {
            debug!("loading config: {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        // 3. Environment variables (replace - explicit override)
        builder = builder.add_source(
            Environment::with_prefix("TREEGEN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;

        // Expand ~ and $VAR in path-like fields
        settings.expand_paths();

        Ok(settings)
    }

    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if self.join_bench.output != "-" {
            self.join_bench.output = expand_env_vars(&self.join_bench.output);
        }
        if let Some(csv) = &self.mysql.csv {
            self.mysql.csv = Some(expand_env_vars(csv));
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# treegen configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/treegen/treegen.toml
#   Env:    TREEGEN_* environment variables, "__" separates sections
#           e.g. TREEGEN_SEED=7, TREEGEN_JOIN_BENCH__ROWS=50
#   Flags:  command-line options

# Seed for generated employee names (omit for random names)
# seed = 42

[mysql]
# user = "root"
# database = "studyjoin"
# table = "emp"
# CSV to import; mysqlimport loads it into the table named after the file
# csv = "emp.csv"

[join_bench]
# database = "studyjoins"
# tables = 3
# rows = 1000
# Output file, "-" for stdout
# output = "tmp.sql"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
