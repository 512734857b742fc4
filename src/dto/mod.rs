// ABOUTME: JSON request and response shapes for the club's public surface
// ABOUTME: camelCase field names with `yyyy-MM-dd'T'HH:mm:ss` local dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

//! Request/response shapes
//!
//! Requests are plain deserialisable structs with a `validate` step; responses
//! are projections built by the services from stored records.

/// Exercise template and muscle group shapes
pub mod exercise;
/// Account shapes
pub mod user;
/// Workout shapes
pub mod workout;

pub use exercise::{
    ExerciseTemplateRequest, ExerciseTemplateResponse, MuscleGroupRequest, MuscleGroupResponse,
};
pub use user::{CreateUserRequest, UserResponse, UserSummary};
pub use workout::{WorkoutRequest, WorkoutResponse, WorkoutSetRequest, WorkoutSetResponse};

use crate::errors::{AppError, AppResult};

/// Reject a missing or blank text field
pub(crate) fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::missing_field(field));
    }
    Ok(())
}
