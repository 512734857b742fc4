// ABOUTME: Main library entry point for the LimitBeyond fitness club backend
// ABOUTME: Accounts, exercise templates by muscle group, and workouts made of sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

#![deny(unsafe_code)]

//! # LimitBeyond
//!
//! Backend for a fitness club. Members perform workouts that trainers assign;
//! a workout is an ordered list of sets, each set pointing at an exercise
//! template tagged with the muscle groups it trains.
//!
//! ## Architecture
//!
//! - **Models** (`limitbeyond-core`): `User`, `MuscleGroup`, `ExerciseTemplate`,
//!   and the `Workout` aggregate owning its `WorkoutSet`s
//! - **Database**: SQLite stores per collection plus a transaction guard
//! - **Services**: reference resolution and the workout lifecycle
//! - **DTO**: camelCase JSON requests and projections
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use limitbeyond::config::AppConfig;
//! use limitbeyond::database::Database;
//! use limitbeyond::errors::AppResult;
//! use limitbeyond::services::WorkoutService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let database = Database::new(&config.database).await?;
//!     let workouts = WorkoutService::new(database);
//!
//!     let open = workouts.find_incomplete("member-id").await?;
//!     println!("{} open workouts", open.len());
//!     Ok(())
//! }
//! ```

pub use limitbeyond_core::{constants, errors, formats, models};

/// Environment-based configuration
pub mod config;

/// SQLite storage for every collection
pub mod database;

/// JSON request and response shapes
pub mod dto;

/// Structured logging setup
pub mod logging;

/// Domain services
pub mod services;
