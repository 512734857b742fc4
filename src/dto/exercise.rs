// ABOUTME: Exercise template and muscle group request/response shapes
// ABOUTME: Templates are projected with their muscle groups resolved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

use serde::{Deserialize, Serialize};

use super::require_text;
use crate::errors::AppResult;
use crate::models::{ExerciseTemplate, MuscleGroup};

/// Create a muscle group
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleGroupRequest {
    /// Display name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MuscleGroupRequest {
    /// Check required fields
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` for a blank name
    pub fn validate(&self) -> AppResult<()> {
        require_text("name", &self.name)
    }
}

/// Muscle group projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleGroupResponse {
    /// Identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
}

impl From<&MuscleGroup> for MuscleGroupResponse {
    fn from(group: &MuscleGroup) -> Self {
        Self {
            id: group.id.clone(),
            name: group.name.clone(),
            description: group.description.clone(),
        }
    }
}

/// Create or update an exercise template
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTemplateRequest {
    /// Exercise name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Primary muscle group id
    pub primary_muscle_group_id: String,
    /// Secondary muscle group id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_muscle_group_id: Option<String>,
    /// Execution instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl ExerciseTemplateRequest {
    /// Check required fields
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` for a blank name or primary muscle group
    pub fn validate(&self) -> AppResult<()> {
        require_text("name", &self.name)?;
        require_text("primaryMuscleGroupId", &self.primary_muscle_group_id)
    }
}

/// Exercise template projection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseTemplateResponse {
    /// Identifier
    pub id: String,
    /// Exercise name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Primary muscle group, absent if it no longer resolves
    pub primary_muscle_group: Option<MuscleGroupResponse>,
    /// Secondary muscle group
    pub secondary_muscle_group: Option<MuscleGroupResponse>,
    /// Execution instructions
    pub instructions: Option<String>,
}

impl ExerciseTemplateResponse {
    /// Project a template with its already-loaded muscle groups
    #[must_use]
    pub fn new(
        template: &ExerciseTemplate,
        primary: Option<&MuscleGroup>,
        secondary: Option<&MuscleGroup>,
    ) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            description: template.description.clone(),
            primary_muscle_group: primary.map(MuscleGroupResponse::from),
            secondary_muscle_group: secondary.map(MuscleGroupResponse::from),
            instructions: template.instructions.clone(),
        }
    }
}
