// ABOUTME: Exercise template storage
// ABOUTME: CRUD for templates plus lookups by muscle group and reference counting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

use sqlx::{sqlite::SqliteRow, Error as SqlxError, Row, SqliteConnection, SqlitePool};

use super::parse_timestamp;
use crate::errors::{AppError, AppResult};
use crate::models::ExerciseTemplate;

const TEMPLATE_COLUMNS: &str = "id, name, description, primary_muscle_group_id, \
     secondary_muscle_group_id, instructions, created_at, updated_at";

/// Exercise template store
#[derive(Clone)]
pub struct ExerciseTemplateManager {
    pool: SqlitePool,
}

impl ExerciseTemplateManager {
    /// Create a new exercise template manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a template
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_ALREADY_EXISTS` on a name collision (ignoring case)
    pub async fn insert(
        &self,
        conn: &mut SqliteConnection,
        template: &ExerciseTemplate,
    ) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO exercise_templates (
                id, name, description, primary_muscle_group_id,
                secondary_muscle_group_id, instructions, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(&template.id)
        .bind(&template.name)
        .bind(&template.description)
        .bind(&template.primary_muscle_group_id)
        .bind(&template.secondary_muscle_group_id)
        .bind(&template.instructions)
        .bind(template.created_at.to_rfc3339())
        .bind(template.updated_at.to_rfc3339())
        .execute(&mut *conn)
        .await
        .map_err(|e| name_conflict_or_database(&e, &template.name, "insert"))?;
        Ok(())
    }

    /// Overwrite a template's fields
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_ALREADY_EXISTS` when renamed onto an existing name
    pub async fn update(
        &self,
        conn: &mut SqliteConnection,
        template: &ExerciseTemplate,
    ) -> AppResult<()> {
        sqlx::query(
            r"
            UPDATE exercise_templates SET
                name = $2, description = $3, primary_muscle_group_id = $4,
                secondary_muscle_group_id = $5, instructions = $6, updated_at = $7
            WHERE id = $1
            ",
        )
        .bind(&template.id)
        .bind(&template.name)
        .bind(&template.description)
        .bind(&template.primary_muscle_group_id)
        .bind(&template.secondary_muscle_group_id)
        .bind(&template.instructions)
        .bind(template.updated_at.to_rfc3339())
        .execute(&mut *conn)
        .await
        .map_err(|e| name_conflict_or_database(&e, &template.name, "update"))?;
        Ok(())
    }

    /// Get a template by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get(&self, id: &str) -> AppResult<Option<ExerciseTemplate>> {
        let row = sqlx::query(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM exercise_templates WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get exercise template: {e}")))?;

        row.as_ref().map(row_to_template).transpose()
    }

    /// Get a template by name, ignoring case
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_by_name(&self, name: &str) -> AppResult<Option<ExerciseTemplate>> {
        let row = sqlx::query(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM exercise_templates WHERE name = $1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get exercise template by name: {e}")))?;

        row.as_ref().map(row_to_template).transpose()
    }

    /// All templates ordered by name
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list(&self) -> AppResult<Vec<ExerciseTemplate>> {
        let rows = sqlx::query(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM exercise_templates ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list exercise templates: {e}")))?;

        rows.iter().map(row_to_template).collect()
    }

    /// Templates targeting a muscle group as primary or secondary
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_by_muscle_group(
        &self,
        muscle_group_id: &str,
    ) -> AppResult<Vec<ExerciseTemplate>> {
        let rows = sqlx::query(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM exercise_templates \
             WHERE primary_muscle_group_id = $1 OR secondary_muscle_group_id = $1 \
             ORDER BY name"
        ))
        .bind(muscle_group_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to list exercise templates by muscle group: {e}"))
        })?;

        rows.iter().map(row_to_template).collect()
    }

    /// Number of templates referencing a muscle group
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_by_muscle_group(&self, muscle_group_id: &str) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM exercise_templates \
             WHERE primary_muscle_group_id = $1 OR secondary_muscle_group_id = $1",
        )
        .bind(muscle_group_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to count exercise templates: {e}")))
    }

    /// Delete a template, returning whether a row was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails
    pub async fn delete(&self, conn: &mut SqliteConnection, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM exercise_templates WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete exercise template: {e}")))?;
        Ok(result.rows_affected() > 0)
    }
}

fn name_conflict_or_database(error: &SqlxError, name: &str, action: &str) -> AppError {
    match error {
        SqlxError::Database(db) if db.is_unique_violation() => {
            AppError::already_exists(format!("Exercise '{name}' already exists"))
        }
        _ => AppError::database(format!("Failed to {action} exercise template: {error}")),
    }
}

fn row_to_template(row: &SqliteRow) -> AppResult<ExerciseTemplate> {
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");

    Ok(ExerciseTemplate {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        primary_muscle_group_id: row.get("primary_muscle_group_id"),
        secondary_muscle_group_id: row.get("secondary_muscle_group_id"),
        instructions: row.get("instructions"),
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}
