// ABOUTME: Muscle group operations
// ABOUTME: Creation with case-insensitive unique names and guarded removal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

use serde_json::json;
use tracing::info;

use crate::database::{Database, ExerciseTemplateManager, MuscleGroupManager};
use crate::dto::MuscleGroupRequest;
use crate::errors::{AppError, AppResult};
use crate::models::MuscleGroup;

/// Muscle group service
#[derive(Clone)]
pub struct MuscleGroupService {
    database: Database,
    groups: MuscleGroupManager,
    exercises: ExerciseTemplateManager,
}

impl MuscleGroupService {
    /// Create a new muscle group service
    #[must_use]
    pub fn new(database: Database) -> Self {
        Self {
            groups: database.muscle_groups(),
            exercises: database.exercises(),
            database,
        }
    }

    /// Create a muscle group
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_ALREADY_EXISTS` if the name is taken ignoring case
    pub async fn create(&self, request: &MuscleGroupRequest) -> AppResult<MuscleGroup> {
        request.validate()?;
        let name = request.name.trim();
        if self.groups.get_by_name(name).await?.is_some() {
            return Err(AppError::already_exists(format!(
                "Muscle group '{name}' already exists"
            )));
        }

        let group = MuscleGroup::new(name.to_owned(), request.description.clone());
        let mut conn = self.database.acquire().await?;
        self.groups.insert(&mut conn, &group).await?;

        info!(muscle_group.id = %group.id, muscle_group.name = %group.name, "Created muscle group");
        Ok(group)
    }

    /// Get a muscle group by id
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if absent
    pub async fn get(&self, id: &str) -> AppResult<MuscleGroup> {
        self.groups
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Muscle group").with_resource_id(id))
    }

    /// Get a muscle group by name, ignoring case
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if absent
    pub async fn get_by_name(&self, name: &str) -> AppResult<MuscleGroup> {
        self.groups
            .get_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("Muscle group").with_resource_id(name))
    }

    /// All muscle groups ordered by name
    ///
    /// # Errors
    ///
    /// Returns a storage error
    pub async fn list(&self) -> AppResult<Vec<MuscleGroup>> {
        self.groups.list().await
    }

    /// Delete a muscle group no exercise template refers to
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if absent or `RESOURCE_LOCKED` while referenced
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let group = self.get(id).await?;
        let references = self.exercises.count_by_muscle_group(id).await?;
        if references > 0 {
            return Err(AppError::locked(format!(
                "Muscle group '{}' is used by {references} exercise template(s)",
                group.name
            ))
            .with_resource_id(id)
            .with_details(json!({ "references": references })));
        }

        let mut conn = self.database.acquire().await?;
        self.groups.delete(&mut conn, id).await?;
        info!(muscle_group.id = %id, "Deleted muscle group");
        Ok(())
    }
}
