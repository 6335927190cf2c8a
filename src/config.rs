// src/config.rs

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::{Cli, OutputFormat};
use crate::filter::MinTimeFilter;
use crate::probe::{DEFAULT_PROBE_PORT, DEFAULT_PROBE_TIMEOUT_SECS};
use crate::query::DEFAULT_URL_TEMPLATE;

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_url_template")]
    pub url_template: String,  // must contain {{host}}
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_url_template() -> String { DEFAULT_URL_TEMPLATE.to_string() }
fn default_user_agent() -> String {
    format!("ct-recon/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            url_template: default_url_template(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProbeConfig {
    #[serde(default = "default_probe_port")]
    pub port: u16,
    #[serde(default = "default_probe_timeout")]
    pub timeout_secs: u64,
}

fn default_probe_port() -> u16 { DEFAULT_PROBE_PORT }
fn default_probe_timeout() -> u64 { DEFAULT_PROBE_TIMEOUT_SECS }

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            port: default_probe_port(),
            timeout_secs: default_probe_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String { "info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

/// Optional TOML config file; every section falls back to defaults
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.search.url_template.contains("{{host}}") {
            anyhow::bail!(
                "search.url_template must contain {{{{host}}}}: {}",
                self.search.url_template
            );
        }
        if self.probe.timeout_secs == 0 {
            anyhow::bail!("probe.timeout_secs must be greater than 0");
        }
        Ok(())
    }
}

/// Everything one run needs, built once at startup
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_format: OutputFormat,
    pub output_dir: PathBuf,
    pub min_time: MinTimeFilter,
    pub probe_hosts: bool,
    pub show_progress: bool,
    pub search: SearchConfig,
    pub probe: ProbeConfig,
}

impl RunConfig {
    /// Combine CLI flags with the (possibly default) file config
    pub fn resolve(cli: &Cli, file: Config) -> Self {
        Self {
            input_path: PathBuf::from(&cli.urls),
            output_format: cli.output_format,
            output_dir: PathBuf::from(&cli.output_dir),
            min_time: MinTimeFilter::new(cli.min_time),
            probe_hosts: cli.active,
            show_progress: !cli.no_progress,
            search: file.search,
            probe: file.probe,
        }
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe.timeout_secs)
    }

    /// Full path of the report file
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(self.output_format.file_name())
    }
}
