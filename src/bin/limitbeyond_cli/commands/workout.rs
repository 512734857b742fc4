// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness
// ABOUTME: Workout commands for limitbeyond-cli
// ABOUTME: Lifecycle operations and member/trainer queries printed as projections

use std::path::Path;

use chrono::NaiveDateTime;
use limitbeyond::database::Database;
use limitbeyond::dto::{WorkoutRequest, WorkoutResponse};
use limitbeyond::errors::{AppError, AppResult};
use limitbeyond::models::Workout;
use limitbeyond::services::WorkoutService;

use crate::helpers::display::{print_deleted, print_json};
use crate::helpers::input::read_json;

/// Which workouts `workout list` selects
pub struct ListQuery {
    pub member: Option<String>,
    pub muscle_group: Option<String>,
    pub trainer: Option<String>,
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
    pub completed: Option<bool>,
}

pub async fn create(database: &Database, file: &Path) -> AppResult<()> {
    let request: WorkoutRequest = read_json(file).await?;
    let service = WorkoutService::new(database.clone());
    let workout = service.create(&request).await?;
    print_workout(&service, &workout).await
}

pub async fn update(database: &Database, id: &str, file: &Path) -> AppResult<()> {
    let request: WorkoutRequest = read_json(file).await?;
    let service = WorkoutService::new(database.clone());
    let workout = service.update(id, &request).await?;
    print_workout(&service, &workout).await
}

pub async fn show(database: &Database, id: &str) -> AppResult<()> {
    let service = WorkoutService::new(database.clone());
    let workout = service.find_by_id(id).await?;
    print_workout(&service, &workout).await
}

pub async fn complete_set(database: &Database, workout_id: &str, set_id: &str) -> AppResult<()> {
    let service = WorkoutService::new(database.clone());
    let workout = service.complete_set(workout_id, set_id).await?;
    print_workout(&service, &workout).await
}

pub async fn complete(database: &Database, id: &str) -> AppResult<()> {
    let service = WorkoutService::new(database.clone());
    let workout = service.complete_workout(id).await?;
    print_workout(&service, &workout).await
}

pub async fn copy(database: &Database, id: &str, date: Option<NaiveDateTime>) -> AppResult<()> {
    let service = WorkoutService::new(database.clone());
    let workout = service.copy_workout(id, date).await?;
    print_workout(&service, &workout).await
}

pub async fn delete(database: &Database, id: &str) -> AppResult<()> {
    WorkoutService::new(database.clone()).delete(id).await?;
    print_deleted("workout", id);
    Ok(())
}

pub async fn list(database: &Database, query: ListQuery) -> AppResult<()> {
    let service = WorkoutService::new(database.clone());
    let range = date_range(query.from, query.to)?;
    if let Some(muscle_group) = query.muscle_group {
        let workouts = service.find_by_muscle_group(&muscle_group).await?;
        return print_workouts(&service, &workouts).await;
    }
    let workouts = match (query.member, query.trainer, range, query.completed) {
        (Some(member), _, Some((from, to)), _) => {
            service.find_by_member_and_date_range(&member, from, to).await?
        }
        (None, Some(trainer), Some((from, to)), _) => {
            service.find_by_trainer_and_date_range(&trainer, from, to).await?
        }
        (Some(member), _, None, Some(true)) => service.find_completed(&member).await?,
        (Some(member), _, None, Some(false)) => service.find_incomplete(&member).await?,
        (Some(member), _, None, None) => service.find_by_member(&member).await?,
        (None, Some(trainer), None, _) => service.find_by_trainer(&trainer).await?,
        (None, None, _, _) => {
            return Err(AppError::invalid_input(
                "workout list needs --member, --trainer or --muscle-group",
            ))
        }
    };
    print_workouts(&service, &workouts).await
}

async fn print_workouts(service: &WorkoutService, workouts: &[Workout]) -> AppResult<()> {
    let mut responses: Vec<WorkoutResponse> = Vec::with_capacity(workouts.len());
    for workout in workouts {
        responses.push(service.to_response(workout).await?);
    }
    print_json(&responses)
}

async fn print_workout(service: &WorkoutService, workout: &Workout) -> AppResult<()> {
    print_json(&service.to_response(workout).await?)
}

/// Both bounds or neither; a single bound is rejected rather than ignored
fn date_range(
    from: Option<NaiveDateTime>,
    to: Option<NaiveDateTime>,
) -> AppResult<Option<(NaiveDateTime, NaiveDateTime)>> {
    match (from, to) {
        (Some(from), Some(to)) => Ok(Some((from, to))),
        (None, None) => Ok(None),
        _ => Err(AppError::invalid_input(
            "A date range needs both --from and --to",
        )),
    }
}
