use anyhow::{Context, Result, anyhow};
use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::sources::SourceLocation;

/// Application configuration module
/// This module handles loading, validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Guide to read: local path or http(s) URL
    #[serde(default = "default_source")]
    pub source: String,

    /// Where the normalized guide is written
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log one line per rewritten programme during normalization
    #[serde(default = "default_true")]
    pub log_entries: bool,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

fn default_source() -> String {
    "https://github.com/ferteque/Curated-M3U-Repository/raw/refs/heads/main/epg6.xml.gz".to_string()
}

fn default_output_path() -> String {
    "./public/epg6_modified.xml.gz".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load the configuration file, creating it with defaults when missing
    pub fn load_or_create<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if config_path.exists() {
            let file = File::open(config_path)
                .with_context(|| format!("Failed to open config file: {:?}", config_path))?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            return Ok(config);
        }

        warn!("Config file not found at {:?}, creating default config.", config_path);
        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json).with_context(|| {
            format!("Failed to write default config to file: {:?}", config_path)
        })?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        self.source_location()?;

        if self.output_path.trim().is_empty() {
            return Err(anyhow!("Output path must not be empty"));
        }

        Ok(())
    }

    /// Parsed form of the configured source
    pub fn source_location(&self) -> Result<SourceLocation> {
        self.source
            .parse::<SourceLocation>()
            .with_context(|| format!("Invalid source: '{}'", self.source))
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source: default_source(),
            output_path: default_output_path(),
            log_level: LogLevel::default(),
            log_entries: default_true(),
        }
    }
}
