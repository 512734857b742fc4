// ABOUTME: Workout request and response shapes
// ABOUTME: Incoming workout/set requests and the resolved workout projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{require_text, ExerciseTemplateResponse, UserSummary};
use crate::errors::{AppError, AppResult};
use crate::formats::optional_local_date_time;

/// Create or update a workout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRequest {
    /// Workout name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Member performing the workout
    pub member_id: String,
    /// Assigning trainer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<String>,
    /// Sets to create; on update `None` keeps the current sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<Vec<WorkoutSetRequest>>,
    /// Planned date
    #[serde(
        default,
        with = "optional_local_date_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheduled_date: Option<NaiveDateTime>,
    /// Optional notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutRequest {
    /// Check required fields and set values
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` for a blank name or member id, or the
    /// first set error
    pub fn validate(&self) -> AppResult<()> {
        require_text("name", &self.name)?;
        require_text("memberId", &self.member_id)?;
        for set in self.sets.iter().flatten() {
            set.validate()?;
        }
        Ok(())
    }
}

/// One set inside a [`WorkoutRequest`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSetRequest {
    /// Exercise template to perform
    pub exercise_id: String,
    /// Target repetitions
    pub reps: u32,
    /// Optional load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Optional notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutSetRequest {
    /// Check required fields and value ranges
    ///
    /// # Errors
    ///
    /// Returns an error for a blank exercise id or a negative or non-finite weight
    pub fn validate(&self) -> AppResult<()> {
        require_text("exerciseId", &self.exercise_id)?;
        if let Some(weight) = self.weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "Weight must be a non-negative number, got {weight}"
                )));
            }
        }
        Ok(())
    }
}

/// Workout projection with resolved people and exercises
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutResponse {
    /// Workout id
    pub id: String,
    /// Workout name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Member summary, absent if the account no longer resolves
    pub member: Option<UserSummary>,
    /// Trainer summary
    pub trainer: Option<UserSummary>,
    /// Sets in order
    pub sets: Vec<WorkoutSetResponse>,
    /// Planned date
    #[serde(default, with = "optional_local_date_time")]
    pub scheduled_date: Option<NaiveDateTime>,
    /// Completion date
    #[serde(default, with = "optional_local_date_time")]
    pub completed_date: Option<NaiveDateTime>,
    /// Whether every set was completed
    pub completed: bool,
    /// Optional notes
    pub notes: Option<String>,
}

/// Set projection with its exercise resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSetResponse {
    /// Set id
    pub id: String,
    /// Exercise performed
    pub exercise: ExerciseTemplateResponse,
    /// Target repetitions
    pub reps: u32,
    /// Optional load
    pub weight: Option<f64>,
    /// Optional notes
    pub notes: Option<String>,
    /// Whether the set has been performed
    pub completed: bool,
}
