//! # tw-config
//!
//! Layered configuration: built-in defaults, then an optional
//! `timeworld.toml`, then `TIMEWORLD__*` environment variables.

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

pub const ENV_PREFIX: &str = "TIMEWORLD";
pub const CONFIG_FILE: &str = "timeworld";

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthConfig {
    pub admin_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ForumConfig {
    pub just_now_label: String,
    pub featured_categories: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FixturesConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    pub filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub forum: ForumConfig,
    pub fixtures: FixturesConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Reads the full layer stack. Call [`load_dotenv`] first to pick up a
    /// `.env` file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            base()?
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(
                    Environment::with_prefix(ENV_PREFIX)
                        .separator("__")
                        .try_parsing(true),
                ),
        )
    }

    /// Defaults only; no file or environment lookups.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::from_builder(base()?)
    }

    /// Defaults overlaid with an inline TOML document.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Self::from_builder(base()?.add_source(File::from_str(toml, config::FileFormat::Toml)))
    }

    fn from_builder(builder: Builder) -> Result<Self, ConfigError> {
        let cfg: AppConfig = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.admin_name.trim().is_empty() {
            return Err(ConfigError::Invalid("auth.admin_name must not be empty".into()));
        }
        Ok(())
    }
}

/// Loads `.env` into the process environment, returning its path if one
/// was found.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

fn base() -> Result<Builder, ConfigError> {
    Ok(Config::builder()
        .set_default("auth.admin_name", "admin")?
        .set_default("forum.just_now_label", "just now")?
        .set_default("forum.featured_categories", 4)?
        .set_default("fixtures.enabled", true)?
        .set_default("log.filter", "info")?)
}
