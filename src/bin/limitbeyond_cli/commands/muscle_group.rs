// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness
// ABOUTME: Muscle group commands for limitbeyond-cli
// ABOUTME: Create, list and delete muscle group tags

use limitbeyond::database::Database;
use limitbeyond::dto::{MuscleGroupRequest, MuscleGroupResponse};
use limitbeyond::errors::AppResult;
use limitbeyond::services::MuscleGroupService;

use crate::helpers::display::{print_deleted, print_json};

pub async fn create(database: &Database, name: String, description: Option<String>) -> AppResult<()> {
    let service = MuscleGroupService::new(database.clone());
    let group = service
        .create(&MuscleGroupRequest { name, description })
        .await?;
    print_json(&MuscleGroupResponse::from(&group))
}

pub async fn list(database: &Database) -> AppResult<()> {
    let service = MuscleGroupService::new(database.clone());
    let groups = service.list().await?;
    let responses: Vec<MuscleGroupResponse> = groups.iter().map(MuscleGroupResponse::from).collect();
    print_json(&responses)
}

pub async fn delete(database: &Database, id: &str) -> AppResult<()> {
    MuscleGroupService::new(database.clone()).delete(id).await?;
    print_deleted("muscle group", id);
    Ok(())
}
