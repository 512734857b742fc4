// ABOUTME: Tests for environment-driven configuration and on-disk storage
// ABOUTME: Serializes environment mutation and checks data survives reopening a file database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::env;
use std::path::PathBuf;

use limitbeyond::config::{AppConfig, DatabaseConfig, DatabaseUrl};
use limitbeyond::database::Database;
use limitbeyond::dto::MuscleGroupRequest;
use limitbeyond::errors::ErrorCode;
use limitbeyond::logging::LogFormat;
use limitbeyond::services::MuscleGroupService;
use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    for key in ["DATABASE_URL", "AUTO_MIGRATE", "RUST_LOG", "LOG_FORMAT"] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = AppConfig::from_env().unwrap();

    assert_eq!(
        config.database.url,
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/limitbeyond.db")
        }
    );
    assert!(config.database.auto_migrate);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("AUTO_MIGRATE", "false");
    env::set_var("LOG_FORMAT", "json");

    let config = AppConfig::from_env().unwrap();
    assert!(config.database.url.is_memory());
    assert!(!config.database.auto_migrate);
    assert_eq!(config.logging.format, LogFormat::Json);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_environment_is_config_error() {
    clear_env();
    env::set_var("AUTO_MIGRATE", "sometimes");
    let err = AppConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    clear_env();
    env::set_var("DATABASE_URL", "postgres://localhost/club");
    assert!(AppConfig::from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides() {
    clear_env();
    let config = AppConfig::from_env()
        .unwrap()
        .with_database_url("sqlite:/tmp/override.db")
        .unwrap()
        .with_log_level("debug");

    assert_eq!(config.database.url.to_string(), "sqlite:/tmp/override.db");
    assert_eq!(config.logging.level, "debug");
}

#[tokio::test]
async fn test_file_database_survives_reopen() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let config = DatabaseConfig {
        url: DatabaseUrl::SQLite {
            path: dir.path().join("nested").join("club.db"),
        },
        auto_migrate: true,
    };

    let created = {
        let database = Database::new(&config).await.unwrap();
        MuscleGroupService::new(database)
            .create(&MuscleGroupRequest {
                name: "Glutes".to_owned(),
                description: Some("Hip extensors".to_owned()),
            })
            .await
            .unwrap()
    };

    let reopened = Database::new(&config).await.unwrap();
    let found = MuscleGroupService::new(reopened)
        .get(&created.id)
        .await
        .unwrap();
    assert_eq!(found.name, "Glutes");
    assert_eq!(found.description.as_deref(), Some("Hip extensors"));
}
