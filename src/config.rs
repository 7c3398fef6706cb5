//! Configuration for the relata compiler
//!
//! Defaults, a YAML form, and environment overrides.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

use crate::error::{RelataError, RelataResult};

/// Compiler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Bound on hook continuations per statement; unbounded when absent
    #[serde(default)]
    pub max_continuations: Option<usize>,

    /// Whether compiled output ends with a newline
    #[serde(default)]
    pub trailing_newline: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            max_continuations: None,
            trailing_newline: false,
        }
    }
}

impl CompilerConfig {
    /// Load configuration from defaults and environment variables
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Ok(log_level) = env::var("RELATA_LOG_LEVEL") {
            config.log_level = log_level;
        }

        if let Ok(limit) = env::var("RELATA_MAX_CONTINUATIONS") {
            match limit.parse::<usize>() {
                Ok(0) | Err(_) => warn!("Invalid RELATA_MAX_CONTINUATIONS value: {}", limit),
                Ok(limit) => config.max_continuations = Some(limit),
            }
        }

        if let Ok(trailing) = env::var("RELATA_TRAILING_NEWLINE") {
            match parse_flag(&trailing) {
                Some(flag) => config.trailing_newline = flag,
                None => warn!("Invalid RELATA_TRAILING_NEWLINE value: {}", trailing),
            }
        }

        config
    }

    /// Parse a YAML document; missing keys take their defaults
    pub fn from_yaml_str(yaml: &str) -> RelataResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the dispatcher cannot honour
    pub fn validate(&self) -> RelataResult<()> {
        if self.max_continuations == Some(0) {
            return Err(RelataError::Config(
                "max_continuations must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
