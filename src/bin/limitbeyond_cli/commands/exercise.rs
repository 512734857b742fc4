// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness
// ABOUTME: Exercise template commands for limitbeyond-cli
// ABOUTME: Create, import, update, list and delete templates

use std::path::Path;

use limitbeyond::database::Database;
use limitbeyond::dto::{ExerciseTemplateRequest, ExerciseTemplateResponse};
use limitbeyond::errors::AppResult;
use limitbeyond::models::ExerciseTemplate;
use limitbeyond::services::ExerciseService;
use tracing::info;

use crate::helpers::display::{print_deleted, print_json};
use crate::helpers::input::read_json;

pub async fn create(database: &Database, request: ExerciseTemplateRequest) -> AppResult<()> {
    let service = ExerciseService::new(database.clone());
    let template = service.create(&request).await?;
    print_json(&service.to_response(&template).await?)
}

pub async fn import(database: &Database, file: &Path) -> AppResult<()> {
    let requests: Vec<ExerciseTemplateRequest> = read_json(file).await?;
    let service = ExerciseService::new(database.clone());
    let templates = service.bulk_create(&requests).await?;
    info!("Imported {} exercise templates from {}", templates.len(), file.display());
    print_responses(&service, &templates).await
}

pub async fn update(database: &Database, id: &str, file: &Path) -> AppResult<()> {
    let request: ExerciseTemplateRequest = read_json(file).await?;
    let service = ExerciseService::new(database.clone());
    let template = service.update(id, &request).await?;
    print_json(&service.to_response(&template).await?)
}

pub async fn show(database: &Database, id: &str) -> AppResult<()> {
    let service = ExerciseService::new(database.clone());
    let template = service.get(id).await?;
    print_json(&service.to_response(&template).await?)
}

pub async fn list(database: &Database, muscle_group: Option<&str>) -> AppResult<()> {
    let service = ExerciseService::new(database.clone());
    let templates = match muscle_group {
        Some(id) => service.list_by_muscle_group(id).await?,
        None => service.list().await?,
    };
    print_responses(&service, &templates).await
}

pub async fn delete(database: &Database, id: &str) -> AppResult<()> {
    ExerciseService::new(database.clone()).delete(id).await?;
    print_deleted("exercise template", id);
    Ok(())
}

async fn print_responses(service: &ExerciseService, templates: &[ExerciseTemplate]) -> AppResult<()> {
    let mut responses: Vec<ExerciseTemplateResponse> = Vec::with_capacity(templates.len());
    for template in templates {
        responses.push(service.to_response(template).await?);
    }
    print_json(&responses)
}
