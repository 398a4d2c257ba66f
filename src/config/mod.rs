use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub output: OutputConfig,
    pub fetch: FetchConfig,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Base directory for generated artifacts
    pub base_dir: PathBuf,
    /// Category label; artifacts land under `<base_dir>/<category>`
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    pub max_retries: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// When false the validation stage is skipped entirely and every
    /// collected channel passes through unfiltered.
    pub enabled: bool,
    pub max_workers: usize,
    pub probe_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                base_dir: PathBuf::from("LiveTV"),
                category: "Bangladesh".to_string(),
            },
            fetch: FetchConfig {
                max_retries: 3,
                timeout_secs: 15,
            },
            validation: ValidationConfig {
                enabled: true,
                max_workers: 20,
                probe_timeout_secs: 5,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_file =
            std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());

        if std::path::Path::new(&config_file).exists() {
            let contents = std::fs::read_to_string(&config_file)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::write(&config_file, contents)?;
            Ok(default_config)
        }
    }

    /// Full output directory for this run's artifacts
    pub fn output_dir(&self) -> PathBuf {
        self.output.base_dir.join(&self.output.category)
    }
}

/// Environment flag that disables the link-validation stage.
///
/// Validation runs unless `SKIP_LINK_CHECK` is set to `true`
/// (case-insensitive), mirroring CI usage where a full probe pass is too
/// slow for every pipeline run.
pub const SKIP_LINK_CHECK_ENV: &str = "SKIP_LINK_CHECK";

pub fn validation_skipped_by_env() -> bool {
    std::env::var(SKIP_LINK_CHECK_ENV)
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false)
}
