// ABOUTME: Workout storage; the workout row references its sets by a JSON id list
// ABOUTME: Aggregate loading with ordered sets, filtered listing by member, trainer and date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

use chrono::NaiveDateTime;
use sqlx::{sqlite::SqliteRow, Row, SqliteConnection, SqlitePool};

use super::{format_local_column, parse_local_column, parse_timestamp, WorkoutSetManager};
use crate::errors::{AppError, AppResult};
use crate::formats::format_local;
use crate::models::Workout;

const WORKOUT_COLUMNS: &str = "id, name, description, member_id, trainer_id, set_ids, \
     scheduled_date, completed_date, completed, notes, created_at, updated_at";

/// Filter options for listing workouts
///
/// Date bounds are exclusive; workouts without a scheduled date never match a
/// bounded filter.
#[derive(Debug, Clone, Default)]
pub struct WorkoutFilter {
    /// Only workouts of this member
    pub member_id: Option<String>,
    /// Only workouts assigned by this trainer
    pub trainer_id: Option<String>,
    /// Scheduled strictly after
    pub scheduled_after: Option<NaiveDateTime>,
    /// Scheduled strictly before
    pub scheduled_before: Option<NaiveDateTime>,
    /// Only completed (`true`) or open (`false`) workouts
    pub completed: Option<bool>,
    /// Only workouts with a set whose exercise trains this muscle group,
    /// as primary or secondary
    pub muscle_group_id: Option<String>,
}

/// Workout store
#[derive(Clone)]
pub struct WorkoutManager {
    pool: SqlitePool,
    sets: WorkoutSetManager,
}

impl WorkoutManager {
    /// Create a new workout manager
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        let sets = WorkoutSetManager::new(pool.clone());
        Self { pool, sets }
    }

    /// Insert the workout row; sets must be stored separately
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails
    pub async fn insert(&self, conn: &mut SqliteConnection, workout: &Workout) -> AppResult<()> {
        let set_ids = serde_json::to_string(&workout.set_ids())?;

        sqlx::query(
            r"
            INSERT INTO workouts (
                id, name, description, member_id, trainer_id, set_ids,
                scheduled_date, completed_date, completed, notes, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(&workout.id)
        .bind(&workout.name)
        .bind(&workout.description)
        .bind(&workout.member_id)
        .bind(&workout.trainer_id)
        .bind(set_ids)
        .bind(format_local_column(workout.scheduled_date.as_ref()))
        .bind(format_local_column(workout.completed_date.as_ref()))
        .bind(workout.completed)
        .bind(&workout.notes)
        .bind(workout.created_at.to_rfc3339())
        .bind(workout.updated_at.to_rfc3339())
        .execute(&mut *conn)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert workout: {e}")))?;
        Ok(())
    }

    /// Overwrite the workout row, including its set references
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails
    pub async fn update(&self, conn: &mut SqliteConnection, workout: &Workout) -> AppResult<()> {
        let set_ids = serde_json::to_string(&workout.set_ids())?;

        sqlx::query(
            r"
            UPDATE workouts SET
                name = $2, description = $3, member_id = $4, trainer_id = $5,
                set_ids = $6, scheduled_date = $7, completed_date = $8,
                completed = $9, notes = $10, updated_at = $11
            WHERE id = $1
            ",
        )
        .bind(&workout.id)
        .bind(&workout.name)
        .bind(&workout.description)
        .bind(&workout.member_id)
        .bind(&workout.trainer_id)
        .bind(set_ids)
        .bind(format_local_column(workout.scheduled_date.as_ref()))
        .bind(format_local_column(workout.completed_date.as_ref()))
        .bind(workout.completed)
        .bind(&workout.notes)
        .bind(workout.updated_at.to_rfc3339())
        .execute(&mut *conn)
        .await
        .map_err(|e| AppError::database(format!("Failed to update workout: {e}")))?;
        Ok(())
    }

    /// Load a workout together with its sets
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails or a stored value is corrupt
    pub async fn get(&self, id: &str) -> AppResult<Option<Workout>> {
        let row = sqlx::query(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get workout: {e}")))?;

        match row {
            Some(row) => Ok(Some(self.hydrate(&row).await?)),
            None => Ok(None),
        }
    }

    /// List workouts matching a filter, ordered by scheduled date then creation time
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails or a stored value is corrupt
    pub async fn list(&self, filter: &WorkoutFilter) -> AppResult<Vec<Workout>> {
        let mut conditions = Vec::new();
        let mut bind_values: Vec<String> = Vec::new();

        if let Some(ref member_id) = filter.member_id {
            conditions.push("member_id = ?");
            bind_values.push(member_id.clone());
        }
        if let Some(ref trainer_id) = filter.trainer_id {
            conditions.push("trainer_id = ?");
            bind_values.push(trainer_id.clone());
        }
        if let Some(ref after) = filter.scheduled_after {
            conditions.push("scheduled_date > ?");
            bind_values.push(format_local(after));
        }
        if let Some(ref before) = filter.scheduled_before {
            conditions.push("scheduled_date < ?");
            bind_values.push(format_local(before));
        }
        if let Some(completed) = filter.completed {
            conditions.push(if completed {
                "completed = 1"
            } else {
                "completed = 0"
            });
        }
        if let Some(ref muscle_group_id) = filter.muscle_group_id {
            conditions.push(
                "EXISTS (SELECT 1 FROM json_each(workouts.set_ids) j \
                 JOIN workout_sets s ON s.id = j.value \
                 JOIN exercise_templates e ON e.id = s.exercise_id \
                 WHERE e.primary_muscle_group_id = ? OR e.secondary_muscle_group_id = ?)",
            );
            bind_values.push(muscle_group_id.clone());
            bind_values.push(muscle_group_id.clone());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let query = format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts {where_clause} \
             ORDER BY scheduled_date ASC, created_at ASC"
        );

        let mut sql_query = sqlx::query(&query);
        for value in &bind_values {
            sql_query = sql_query.bind(value);
        }
        let rows = sql_query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list workouts: {e}")))?;

        let mut workouts = Vec::with_capacity(rows.len());
        for row in &rows {
            workouts.push(self.hydrate(row).await?);
        }
        Ok(workouts)
    }

    /// Delete the workout row, returning whether a row was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails
    pub async fn delete(&self, conn: &mut SqliteConnection, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete workout: {e}")))?;
        Ok(result.rows_affected() > 0)
    }

    async fn hydrate(&self, row: &SqliteRow) -> AppResult<Workout> {
        let set_ids_json: String = row.get("set_ids");
        let set_ids: Vec<String> = serde_json::from_str(&set_ids_json)?;
        let mut workout = row_to_workout(row)?;
        workout.sets = self.sets.find_by_ids(&set_ids).await?;
        Ok(workout)
    }
}

fn row_to_workout(row: &SqliteRow) -> AppResult<Workout> {
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");

    Ok(Workout {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        member_id: row.get("member_id"),
        trainer_id: row.get("trainer_id"),
        sets: Vec::new(),
        scheduled_date: parse_local_column(row.get("scheduled_date"))?,
        completed_date: parse_local_column(row.get("completed_date"))?,
        completed: row.get("completed"),
        notes: row.get("notes"),
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}
