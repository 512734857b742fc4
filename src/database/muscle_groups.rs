// ABOUTME: Muscle group storage
// ABOUTME: Case-insensitive unique names, listing and removal of muscle group tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

use sqlx::{sqlite::SqliteRow, Error as SqlxError, Row, SqliteConnection, SqlitePool};

use crate::errors::{AppError, AppResult};
use crate::models::MuscleGroup;

/// Muscle group store
#[derive(Clone)]
pub struct MuscleGroupManager {
    pool: SqlitePool,
}

impl MuscleGroupManager {
    /// Create a new muscle group manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a muscle group
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_ALREADY_EXISTS` on a name collision (ignoring case)
    pub async fn insert(&self, conn: &mut SqliteConnection, group: &MuscleGroup) -> AppResult<()> {
        sqlx::query("INSERT INTO muscle_groups (id, name, description) VALUES ($1, $2, $3)")
            .bind(&group.id)
            .bind(&group.name)
            .bind(&group.description)
            .execute(&mut *conn)
            .await
            .map_err(|e| match &e {
                SqlxError::Database(db) if db.is_unique_violation() => AppError::already_exists(
                    format!("Muscle group '{}' already exists", group.name),
                ),
                _ => AppError::database(format!("Failed to insert muscle group: {e}")),
            })?;
        Ok(())
    }

    /// Get a muscle group by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get(&self, id: &str) -> AppResult<Option<MuscleGroup>> {
        let row = sqlx::query("SELECT id, name, description FROM muscle_groups WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get muscle group: {e}")))?;
        Ok(row.as_ref().map(row_to_muscle_group))
    }

    /// Get a muscle group by name, ignoring case
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_by_name(&self, name: &str) -> AppResult<Option<MuscleGroup>> {
        let row = sqlx::query("SELECT id, name, description FROM muscle_groups WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get muscle group by name: {e}")))?;
        Ok(row.as_ref().map(row_to_muscle_group))
    }

    /// All muscle groups ordered by name
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list(&self) -> AppResult<Vec<MuscleGroup>> {
        let rows = sqlx::query("SELECT id, name, description FROM muscle_groups ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list muscle groups: {e}")))?;
        Ok(rows.iter().map(row_to_muscle_group).collect())
    }

    /// Delete a muscle group, returning whether a row was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails
    pub async fn delete(&self, conn: &mut SqliteConnection, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM muscle_groups WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete muscle group: {e}")))?;
        Ok(result.rows_affected() > 0)
    }
}

fn row_to_muscle_group(row: &SqliteRow) -> MuscleGroup {
    MuscleGroup {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
    }
}
