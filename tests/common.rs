// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory databases and seeded accounts, muscle groups and exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `limitbeyond`

use std::collections::BTreeSet;
use std::env;
use std::sync::Once;

use anyhow::Result;
use limitbeyond::database::Database;
use limitbeyond::dto::{
    CreateUserRequest, ExerciseTemplateRequest, MuscleGroupRequest, WorkoutRequest,
    WorkoutSetRequest,
};
use limitbeyond::models::{ExerciseTemplate, MuscleGroup, Role, User};
use limitbeyond::services::{ExerciseService, MuscleGroupService, UserService};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Minimum bcrypt cost keeps account creation fast in tests
pub const TEST_HASH_COST: u32 = 4;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::in_memory().await?)
}

/// Account service with a cheap hash cost
pub fn user_service(database: &Database) -> UserService {
    UserService::with_hash_cost(database.clone(), TEST_HASH_COST)
}

/// Create an account holding `roles`
pub async fn create_user(database: &Database, username: &str, roles: &[Role]) -> Result<User> {
    let request = CreateUserRequest {
        username: username.to_owned(),
        password: "correct horse battery staple".to_owned(),
        email: format!("{username}@limitbeyond.test"),
        first_name: username.to_owned(),
        last_name: "Tester".to_owned(),
        phone_number: None,
        roles: roles.iter().copied().collect::<BTreeSet<_>>(),
    };
    Ok(user_service(database).create(&request).await?)
}

/// Create a member account
pub async fn create_member(database: &Database, username: &str) -> Result<User> {
    create_user(database, username, &[Role::Member]).await
}

/// Create a trainer account
pub async fn create_trainer(database: &Database, username: &str) -> Result<User> {
    create_user(database, username, &[Role::Trainer]).await
}

/// Create a muscle group
pub async fn create_muscle_group(database: &Database, name: &str) -> Result<MuscleGroup> {
    let request = MuscleGroupRequest {
        name: name.to_owned(),
        description: None,
    };
    Ok(MuscleGroupService::new(database.clone())
        .create(&request)
        .await?)
}

/// Exercise request targeting `primary` and optionally `secondary`
pub fn exercise_request(
    name: &str,
    primary: &MuscleGroup,
    secondary: Option<&MuscleGroup>,
) -> ExerciseTemplateRequest {
    ExerciseTemplateRequest {
        name: name.to_owned(),
        description: Some(format!("{name} description")),
        primary_muscle_group_id: primary.id.clone(),
        secondary_muscle_group_id: secondary.map(|group| group.id.clone()),
        instructions: None,
    }
}

/// Create an exercise template
pub async fn create_exercise(
    database: &Database,
    name: &str,
    primary: &MuscleGroup,
    secondary: Option<&MuscleGroup>,
) -> Result<ExerciseTemplate> {
    Ok(ExerciseService::new(database.clone())
        .create(&exercise_request(name, primary, secondary))
        .await?)
}

/// Set request for `exercise`
pub fn set_request(exercise: &ExerciseTemplate, reps: u32, weight: Option<f64>) -> WorkoutSetRequest {
    WorkoutSetRequest {
        exercise_id: exercise.id.clone(),
        reps,
        weight,
        notes: None,
    }
}

/// Workout request for `member` with the given sets
pub fn workout_request(
    name: &str,
    member: &User,
    trainer: Option<&User>,
    sets: Vec<WorkoutSetRequest>,
) -> WorkoutRequest {
    WorkoutRequest {
        name: name.to_owned(),
        member_id: member.id.clone(),
        trainer_id: trainer.map(|user| user.id.clone()),
        sets: Some(sets),
        ..WorkoutRequest::default()
    }
}

/// A member, a trainer and two exercises over two muscle groups
pub struct Club {
    pub database: Database,
    pub member: User,
    pub trainer: User,
    pub chest: MuscleGroup,
    pub legs: MuscleGroup,
    pub bench: ExerciseTemplate,
    pub squat: ExerciseTemplate,
}

/// Seed a small club on a fresh in-memory database
pub async fn seed_club() -> Result<Club> {
    let database = create_test_database().await?;
    let member = create_member(&database, "sam").await?;
    let trainer = create_trainer(&database, "casey").await?;
    let chest = create_muscle_group(&database, "Chest").await?;
    let legs = create_muscle_group(&database, "Legs").await?;
    let bench = create_exercise(&database, "Bench Press", &chest, None).await?;
    let squat = create_exercise(&database, "Back Squat", &legs, None).await?;

    Ok(Club {
        database,
        member,
        trainer,
        chest,
        legs,
        bench,
        squat,
    })
}
