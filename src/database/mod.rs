// ABOUTME: Database management for the fitness club document stores
// ABOUTME: Connection pool setup, schema migration and access to the per-collection managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

//! # Database Management
//!
//! Records are kept in SQLite with a document-shaped layout: each collection
//! is a table, list-valued fields (role sets, a workout's set references) are
//! JSON text columns, and there are no foreign keys or cascades between
//! collections. Referential checks are the services' job.

/// Exercise template collection
pub mod exercises;
/// Muscle group collection
pub mod muscle_groups;
/// RAII transaction guard
pub mod transactions;
/// User account collection
pub mod users;
/// Workout set collection
pub mod workout_sets;
/// Workout collection
pub mod workouts;

use std::fs;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqlitePool};
use tracing::info;

use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::errors::{AppError, AppResult};
use crate::formats::{format_local, parse_local};

pub use exercises::ExerciseTemplateManager;
pub use muscle_groups::MuscleGroupManager;
pub use transactions::TransactionGuard;
pub use users::UserManager;
pub use workout_sets::WorkoutSetManager;
pub use workouts::{WorkoutFilter, WorkoutManager};

/// Database handle shared by all services
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect according to configuration, running migrations if enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url.to_connection_string())
            .map_err(|e| AppError::config(format!("Invalid database URL {}: {e}", config.url)))?
            .create_if_missing(true);

        // Every in-memory connection is a separate database, so keep exactly one.
        let pool_options = if config.url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            if let DatabaseUrl::SQLite { path } = &config.url {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).map_err(|e| {
                        AppError::config(format!(
                            "Cannot create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
            SqlitePoolOptions::new()
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to {}: {e}", config.url)))?;

        let db = Self { pool };
        if config.auto_migrate {
            db.migrate().await?;
        }
        info!(database.url = %config.url, "Database ready");
        Ok(db)
    }

    /// Fresh in-memory database with the schema applied
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migration fails
    pub async fn in_memory() -> AppResult<Self> {
        Self::new(&DatabaseConfig::in_memory()).await
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Begin a transaction for a multi-record write
    ///
    /// # Errors
    ///
    /// Returns a database error if the transaction cannot be started
    pub async fn begin(&self) -> AppResult<TransactionGuard> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;
        Ok(TransactionGuard::new(tx))
    }

    /// Check out a pooled connection for a single-statement write
    ///
    /// # Errors
    ///
    /// Returns a database error if no connection can be acquired
    pub async fn acquire(&self) -> AppResult<PoolConnection<Sqlite>> {
        self.pool
            .acquire()
            .await
            .map_err(|e| AppError::database(format!("Failed to acquire connection: {e}")))
    }

    /// User account collection
    #[must_use]
    pub fn users(&self) -> UserManager {
        UserManager::new(self.pool.clone())
    }

    /// Muscle group collection
    #[must_use]
    pub fn muscle_groups(&self) -> MuscleGroupManager {
        MuscleGroupManager::new(self.pool.clone())
    }

    /// Exercise template collection
    #[must_use]
    pub fn exercises(&self) -> ExerciseTemplateManager {
        ExerciseTemplateManager::new(self.pool.clone())
    }

    /// Workout set collection
    #[must_use]
    pub fn workout_sets(&self) -> WorkoutSetManager {
        WorkoutSetManager::new(self.pool.clone())
    }

    /// Workout collection
    #[must_use]
    pub fn workouts(&self) -> WorkoutManager {
        WorkoutManager::new(self.pool.clone())
    }

    /// Create all collections and indexes
    ///
    /// # Errors
    ///
    /// Returns a database error if a statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Migration failed: {e}")))?;
        }
        Ok(())
    }
}

const SCHEMA: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        email TEXT NOT NULL,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        phone_number TEXT,
        active INTEGER NOT NULL DEFAULT 1,
        roles TEXT NOT NULL DEFAULT '[]',
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS muscle_groups (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL UNIQUE COLLATE NOCASE,
        description TEXT
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS exercise_templates (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL UNIQUE COLLATE NOCASE,
        description TEXT,
        primary_muscle_group_id TEXT NOT NULL,
        secondary_muscle_group_id TEXT,
        instructions TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS workout_sets (
        id TEXT PRIMARY KEY,
        exercise_id TEXT NOT NULL,
        reps INTEGER NOT NULL,
        weight REAL,
        notes TEXT,
        completed INTEGER NOT NULL DEFAULT 0
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS workouts (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        member_id TEXT NOT NULL,
        trainer_id TEXT,
        set_ids TEXT NOT NULL DEFAULT '[]',
        scheduled_date TEXT,
        completed_date TEXT,
        completed INTEGER NOT NULL DEFAULT 0,
        notes TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    ",
    "CREATE INDEX IF NOT EXISTS idx_exercise_templates_primary ON exercise_templates(primary_muscle_group_id)",
    "CREATE INDEX IF NOT EXISTS idx_exercise_templates_secondary ON exercise_templates(secondary_muscle_group_id)",
    "CREATE INDEX IF NOT EXISTS idx_workout_sets_exercise ON workout_sets(exercise_id)",
    "CREATE INDEX IF NOT EXISTS idx_workouts_member ON workouts(member_id, scheduled_date)",
    "CREATE INDEX IF NOT EXISTS idx_workouts_trainer ON workouts(trainer_id, scheduled_date)",
];

/// Parse an RFC 3339 timestamp column
pub(crate) fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)
        .map_err(|e| AppError::internal(format!("Invalid datetime '{value}': {e}")))?
        .with_timezone(&Utc))
}

/// Parse an optional `yyyy-MM-dd'T'HH:mm:ss` column
pub(crate) fn parse_local_column(value: Option<String>) -> AppResult<Option<NaiveDateTime>> {
    value.as_deref().map(parse_local).transpose()
}

/// Format an optional local date-time for storage
pub(crate) fn format_local_column(value: Option<&NaiveDateTime>) -> Option<String> {
    value.map(format_local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let db = Database::in_memory().await.unwrap();
        db.migrate().await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();
        let names: Vec<&str> = tables.iter().map(|(n,)| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "exercise_templates",
                "muscle_groups",
                "users",
                "workout_sets",
                "workouts"
            ]
        );
    }

    #[test]
    fn test_local_column_round_trip() {
        let parsed = parse_local_column(Some("2025-06-01T18:00:00".into())).unwrap();
        assert_eq!(
            format_local_column(parsed.as_ref()).as_deref(),
            Some("2025-06-01T18:00:00")
        );
        assert!(parse_local_column(None).unwrap().is_none());
    }
}
