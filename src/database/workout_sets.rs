// ABOUTME: Workout set storage, independent records owned by a workout
// ABOUTME: Insert, update, batch lookup by id list and batch removal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

use std::collections::HashMap;

use sqlx::{sqlite::SqliteRow, Row, SqliteConnection, SqlitePool};

use crate::errors::{AppError, AppResult};
use crate::models::WorkoutSet;

/// Workout set store
#[derive(Clone)]
pub struct WorkoutSetManager {
    pool: SqlitePool,
}

impl WorkoutSetManager {
    /// Create a new workout set manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a set
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails
    pub async fn insert(&self, conn: &mut SqliteConnection, set: &WorkoutSet) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO workout_sets (id, exercise_id, reps, weight, notes, completed)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(&set.id)
        .bind(&set.exercise_id)
        .bind(i64::from(set.reps))
        .bind(set.weight)
        .bind(&set.notes)
        .bind(set.completed)
        .execute(&mut *conn)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert workout set: {e}")))?;
        Ok(())
    }

    /// Overwrite a set's values
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails
    pub async fn update(&self, conn: &mut SqliteConnection, set: &WorkoutSet) -> AppResult<()> {
        sqlx::query(
            r"
            UPDATE workout_sets
            SET exercise_id = $2, reps = $3, weight = $4, notes = $5, completed = $6
            WHERE id = $1
            ",
        )
        .bind(&set.id)
        .bind(&set.exercise_id)
        .bind(i64::from(set.reps))
        .bind(set.weight)
        .bind(&set.notes)
        .bind(set.completed)
        .execute(&mut *conn)
        .await
        .map_err(|e| AppError::database(format!("Failed to update workout set: {e}")))?;
        Ok(())
    }

    /// Get a set by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get(&self, id: &str) -> AppResult<Option<WorkoutSet>> {
        let row = sqlx::query(
            "SELECT id, exercise_id, reps, weight, notes, completed FROM workout_sets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get workout set: {e}")))?;
        Ok(row.as_ref().map(row_to_set))
    }

    /// Load sets in the order of `ids`; ids without a record are skipped
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<WorkoutSet>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids_json = serde_json::to_string(ids)?;

        let rows = sqlx::query(
            r"
            SELECT id, exercise_id, reps, weight, notes, completed FROM workout_sets
            WHERE id IN (SELECT value FROM json_each($1))
            ",
        )
        .bind(ids_json)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to load workout sets: {e}")))?;

        let mut by_id: HashMap<String, WorkoutSet> = rows
            .iter()
            .map(row_to_set)
            .map(|set| (set.id.clone(), set))
            .collect();
        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    /// Delete every set whose id is listed, returning the number removed
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails
    pub async fn delete_many(&self, conn: &mut SqliteConnection, ids: &[String]) -> AppResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let ids_json = serde_json::to_string(ids)?;

        let result = sqlx::query("DELETE FROM workout_sets WHERE id IN (SELECT value FROM json_each($1))")
            .bind(ids_json)
            .execute(&mut *conn)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete workout sets: {e}")))?;
        Ok(result.rows_affected())
    }

    /// Number of sets referencing an exercise template
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_by_exercise(&self, exercise_id: &str) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM workout_sets WHERE exercise_id = $1")
            .bind(exercise_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count workout sets: {e}")))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn row_to_set(row: &SqliteRow) -> WorkoutSet {
    let reps: i64 = row.get("reps");

    WorkoutSet {
        id: row.get("id"),
        exercise_id: row.get("exercise_id"),
        reps: reps as u32,
        weight: row.get("weight"),
        notes: row.get("notes"),
        completed: row.get("completed"),
    }
}
