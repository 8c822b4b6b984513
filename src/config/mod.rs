pub mod loader;

use std::path::PathBuf;

pub use loader::{load, load_from};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Dataset rendered when no `--data` argument is given
    #[serde(default)]
    pub dataset: Option<PathBuf>,
    #[serde(default)]
    pub log: LogConfig,
}
