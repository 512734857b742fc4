// ABOUTME: Configuration management module for database and logging settings
// ABOUTME: Environment-driven configuration shared by the library and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

//! Configuration module
//!
//! All settings come from environment variables; the CLI may override the
//! database URL and log verbosity with flags.

/// Database URL parsing and connection settings
pub mod database;
/// Top-level configuration assembled from the environment
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::AppConfig;
