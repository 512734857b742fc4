// ABOUTME: Domain models for the fitness club backend
// ABOUTME: Re-exports users, reference data and the workout aggregate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

//! # Data Models
//!
//! - `User` / `Role`: club accounts
//! - `MuscleGroup` / `ExerciseTemplate`: reference data
//! - `Workout` / `WorkoutSet`: the workout aggregate

mod exercise;
mod user;
mod workout;

pub use exercise::{ExerciseTemplate, MuscleGroup};
pub use user::{Role, User};
pub use workout::{Workout, WorkoutSet};
