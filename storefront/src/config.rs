//! Application configuration management.
//!
//! This module handles loading and merging configuration from multiple sources
//! with a clear precedence order. Configuration can come from default values,
//! configuration files, and environment variables.

use crate::Cli;
use serde::{Deserialize, Serialize};
use store_axum::config::AxumConfig;
use store_sqlite::config::SqliteConfig;

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Web server configuration (bind address, pagination limits)
    #[serde(default)]
    pub server: AxumConfig,

    /// Database configuration (file path, pool settings)
    #[serde(default)]
    pub database: SqliteConfig,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `APP_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Keep the catalog on disk
    /// export APP_DATABASE__DATABASE_PATH="/var/lib/storefront/catalog.db"
    ///
    /// # Set server bind address
    /// export APP_SERVER__BIND_ADDRESS="0.0.0.0:3000"
    ///
    /// # Allow bigger pages
    /// export APP_SERVER__MAX_PAGE_SIZE=500
    /// ```
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = &cli.config {
            anyhow::ensure!(path.exists(), "config file {} does not exist", path.display());
            builder = builder.add_source(config::File::from(path.as_path()));
        }

        // APP_SERVER__BIND_ADDRESS -> server.bind_address
        let env = config::Environment::with_prefix("APP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);

        Ok(builder.add_source(env).build()?.try_deserialize()?)
    }
}
