/// Configuration for the generator itself
///
/// Only controls where the documents are written. Nothing in here ever
/// reaches the emitted settings files.

use crate::env::EnvSnapshot;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SETTINGS_PATH: &str = "/usr/share/elasticsearch/config/elasticsearch.yml";
pub const DEFAULT_LOGGING_PATH: &str = "/usr/share/elasticsearch/config/logging.yml";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output destinations
    pub output: OutputConfig,
}

/// Destination paths for the two generated files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Cluster/node settings file (default: elasticsearch.yml under the server config dir)
    pub settings_path: PathBuf,
    /// Logging settings file (default: logging.yml next to it)
    pub logging_path: PathBuf,
}

impl Config {
    /// Resolve configuration from an environment snapshot
    ///
    /// `ESCONF_SETTINGS_PATH` and `ESCONF_LOGGING_PATH` override the fixed
    /// destinations, which is mostly useful outside the stock image.
    pub fn from_env(env: &EnvSnapshot) -> Self {
        Self {
            output: OutputConfig {
                settings_path: env
                    .string_or("ESCONF_SETTINGS_PATH", DEFAULT_SETTINGS_PATH)
                    .into(),
                logging_path: env
                    .string_or("ESCONF_LOGGING_PATH", DEFAULT_LOGGING_PATH)
                    .into(),
            },
        }
    }

    /// Write both files under `dir` with their stock file names
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            output: OutputConfig {
                settings_path: dir.join("elasticsearch.yml"),
                logging_path: dir.join("logging.yml"),
            },
        }
    }
}

impl Default for Config {
    /// Default configuration with ENV_VAR overrides for non-standard images
    fn default() -> Self {
        Self::from_env(&EnvSnapshot::from_process())
    }
}
