// ABOUTME: Exercise template operations and projection
// ABOUTME: Validates muscle group references, bulk import and reference-guarded removal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

use std::collections::HashSet;

use chrono::Utc;
use serde_json::json;
use tracing::{debug, info};

use crate::database::{Database, ExerciseTemplateManager, MuscleGroupManager, WorkoutSetManager};
use crate::dto::{ExerciseTemplateRequest, ExerciseTemplateResponse};
use crate::errors::{AppError, AppResult};
use crate::models::{ExerciseTemplate, MuscleGroup};

/// Exercise template service
#[derive(Clone)]
pub struct ExerciseService {
    database: Database,
    exercises: ExerciseTemplateManager,
    groups: MuscleGroupManager,
    sets: WorkoutSetManager,
}

impl ExerciseService {
    /// Create a new exercise template service
    #[must_use]
    pub fn new(database: Database) -> Self {
        Self {
            exercises: database.exercises(),
            groups: database.muscle_groups(),
            sets: database.workout_sets(),
            database,
        }
    }

    /// Create a template
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown muscle group or
    /// `RESOURCE_ALREADY_EXISTS` for a taken name
    pub async fn create(&self, request: &ExerciseTemplateRequest) -> AppResult<ExerciseTemplate> {
        let template = self.prepare(request, None).await?;

        let mut conn = self.database.acquire().await?;
        self.exercises.insert(&mut conn, &template).await?;

        info!(exercise.id = %template.id, exercise.name = %template.name, "Created exercise template");
        Ok(template)
    }

    /// Create several templates; either all are stored or none
    ///
    /// # Errors
    ///
    /// Fails on the first invalid request, including a name repeated within the batch
    pub async fn bulk_create(
        &self,
        requests: &[ExerciseTemplateRequest],
    ) -> AppResult<Vec<ExerciseTemplate>> {
        let mut seen = HashSet::new();
        let mut templates = Vec::with_capacity(requests.len());
        for request in requests {
            let template = self.prepare(request, None).await?;
            if !seen.insert(template.name.to_lowercase()) {
                return Err(AppError::already_exists(format!(
                    "Exercise '{}' appears more than once",
                    template.name
                )));
            }
            templates.push(template);
        }

        let mut tx = self.database.begin().await?;
        for template in &templates {
            self.exercises.insert(tx.executor()?, template).await?;
        }
        tx.commit().await?;

        info!(count = templates.len(), "Imported exercise templates");
        Ok(templates)
    }

    /// Get a template by id
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if absent
    pub async fn get(&self, id: &str) -> AppResult<ExerciseTemplate> {
        self.exercises
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Exercise").with_resource_id(id))
    }

    /// All templates ordered by name
    ///
    /// # Errors
    ///
    /// Returns a storage error
    pub async fn list(&self) -> AppResult<Vec<ExerciseTemplate>> {
        self.exercises.list().await
    }

    /// Templates targeting a muscle group, primarily or secondarily
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown muscle group
    pub async fn list_by_muscle_group(
        &self,
        muscle_group_id: &str,
    ) -> AppResult<Vec<ExerciseTemplate>> {
        self.require_group(muscle_group_id).await?;
        self.exercises.list_by_muscle_group(muscle_group_id).await
    }

    /// Replace a template's fields
    ///
    /// # Errors
    ///
    /// Same as [`Self::create`], plus `RESOURCE_NOT_FOUND` for an unknown template
    pub async fn update(
        &self,
        id: &str,
        request: &ExerciseTemplateRequest,
    ) -> AppResult<ExerciseTemplate> {
        let existing = self.get(id).await?;
        let mut template = self.prepare(request, Some(id)).await?;
        template.id = existing.id;
        template.created_at = existing.created_at;
        template.updated_at = Utc::now();

        let mut conn = self.database.acquire().await?;
        self.exercises.update(&mut conn, &template).await?;

        info!(exercise.id = %template.id, "Updated exercise template");
        Ok(template)
    }

    /// Delete a template no workout set refers to
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if absent or `RESOURCE_LOCKED` while referenced
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let template = self.get(id).await?;
        let references = self.sets.count_by_exercise(id).await?;
        if references > 0 {
            return Err(AppError::locked(format!(
                "Exercise '{}' is used by {references} workout set(s)",
                template.name
            ))
            .with_resource_id(id)
            .with_details(json!({ "references": references })));
        }

        let mut conn = self.database.acquire().await?;
        self.exercises.delete(&mut conn, id).await?;
        info!(exercise.id = %id, "Deleted exercise template");
        Ok(())
    }

    /// Project a template with its muscle groups resolved
    ///
    /// # Errors
    ///
    /// Returns a storage error
    pub async fn to_response(&self, template: &ExerciseTemplate) -> AppResult<ExerciseTemplateResponse> {
        let primary = self.groups.get(&template.primary_muscle_group_id).await?;
        let secondary = match &template.secondary_muscle_group_id {
            Some(id) => self.groups.get(id).await?,
            None => None,
        };
        Ok(ExerciseTemplateResponse::new(
            template,
            primary.as_ref(),
            secondary.as_ref(),
        ))
    }

    /// Validate a request and build the template it describes
    ///
    /// `current_id` is the template being updated, which may keep its own name.
    async fn prepare(
        &self,
        request: &ExerciseTemplateRequest,
        current_id: Option<&str>,
    ) -> AppResult<ExerciseTemplate> {
        request.validate()?;
        let name = request.name.trim();

        if let Some(existing) = self.exercises.get_by_name(name).await? {
            if current_id != Some(existing.id.as_str()) {
                return Err(AppError::already_exists(format!(
                    "Exercise '{name}' already exists"
                )));
            }
        }

        let primary = self.require_group(&request.primary_muscle_group_id).await?;
        let secondary = match &request.secondary_muscle_group_id {
            Some(id) => Some(self.require_group(id).await?),
            None => None,
        };
        debug!(
            primary = %primary.name,
            secondary = ?secondary.as_ref().map(|g| g.name.as_str()),
            "Resolved muscle groups"
        );

        let mut template = ExerciseTemplate::new(name.to_owned(), primary.id);
        template.description.clone_from(&request.description);
        template.secondary_muscle_group_id = secondary.map(|g| g.id);
        template.instructions.clone_from(&request.instructions);
        Ok(template)
    }

    async fn require_group(&self, id: &str) -> AppResult<MuscleGroup> {
        self.groups
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Muscle group").with_resource_id(id))
    }
}
