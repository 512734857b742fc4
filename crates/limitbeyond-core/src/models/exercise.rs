// ABOUTME: Exercise reference data: muscle groups and exercise templates
// ABOUTME: Templates name a primary and optional secondary muscle group by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A body region tag such as "Chest" or "Hamstrings"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuscleGroup {
    /// Unique identifier
    pub id: String,
    /// Display name, unique ignoring case
    pub name: String,
    /// Optional description
    pub description: Option<String>,
}

impl MuscleGroup {
    /// Create a muscle group with a fresh identifier
    #[must_use]
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
        }
    }
}

/// Reusable exercise definition referenced by workout sets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseTemplate {
    /// Unique identifier
    pub id: String,
    /// Exercise name, unique ignoring case
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Muscle group primarily targeted
    pub primary_muscle_group_id: String,
    /// Muscle group secondarily targeted
    pub secondary_muscle_group_id: Option<String>,
    /// Optional execution instructions
    pub instructions: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl ExerciseTemplate {
    /// Create a template with a fresh identifier
    #[must_use]
    pub fn new(name: String, primary_muscle_group_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description: None,
            primary_muscle_group_id,
            secondary_muscle_group_id: None,
            instructions: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the template targets a muscle group, primarily or secondarily
    #[must_use]
    pub fn targets(&self, muscle_group_id: &str) -> bool {
        self.primary_muscle_group_id == muscle_group_id
            || self.secondary_muscle_group_id.as_deref() == Some(muscle_group_id)
    }
}
