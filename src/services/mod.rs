// ABOUTME: Domain service layer for the fitness club backend
// ABOUTME: Accounts, muscle groups, exercise templates and the workout lifecycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

//! Domain service layer
//!
//! Services resolve references between collections, enforce uniqueness and
//! reference rules, and decide which writes share a transaction. They are
//! cheap to clone and independent of any front end.

/// Exercise template operations
pub mod exercises;

/// Muscle group operations
pub mod muscle_groups;

/// Account operations
pub mod users;

/// Workout lifecycle and queries
pub mod workouts;

pub use exercises::ExerciseService;
pub use muscle_groups::MuscleGroupService;
pub use users::UserService;
pub use workouts::WorkoutService;
