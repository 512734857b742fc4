// ABOUTME: Top-level application configuration assembled from environment variables
// ABOUTME: Combines database and logging settings with CLI overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

use tracing::debug;

use super::database::{DatabaseConfig, DatabaseUrl};
use crate::errors::AppResult;
use crate::logging::LoggingConfig;

/// Complete configuration for a LimitBeyond process
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Storage settings
    pub database: DatabaseConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any environment value fails to parse
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            database: DatabaseConfig::from_env()?,
            logging: LoggingConfig::from_env(),
        };
        debug!(database.url = %config.database.url, "Configuration loaded from environment");
        Ok(config)
    }

    /// Replace the database location (CLI `--database-url`)
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not a valid SQLite location
    pub fn with_database_url(mut self, url: &str) -> AppResult<Self> {
        self.database.url = DatabaseUrl::parse_url(url)?;
        Ok(self)
    }

    /// Force the log level (CLI `--verbose`)
    #[must_use]
    pub fn with_log_level(mut self, level: &str) -> Self {
        level.clone_into(&mut self.logging.level);
        self
    }
}
