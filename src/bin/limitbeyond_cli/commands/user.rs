// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness
// ABOUTME: Account commands for limitbeyond-cli
// ABOUTME: Create, show and list club accounts

use std::collections::BTreeSet;

use limitbeyond::database::Database;
use limitbeyond::dto::{CreateUserRequest, UserResponse};
use limitbeyond::errors::AppResult;
use limitbeyond::models::Role;
use limitbeyond::services::UserService;
use tracing::info;

use crate::helpers::display::print_json;

/// Fields for a new account
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub roles: Vec<Role>,
}

pub async fn create(database: &Database, user: NewUser) -> AppResult<()> {
    let service = UserService::new(database.clone());
    let request = CreateUserRequest {
        username: user.username,
        password: user.password,
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
        phone_number: user.phone_number,
        roles: user.roles.into_iter().collect::<BTreeSet<_>>(),
    };

    let created = service.create(&request).await?;
    info!("Account {} created", created.username);
    print_json(&UserResponse::from(&created))
}

pub async fn show(database: &Database, id_or_username: &str) -> AppResult<()> {
    let service = UserService::new(database.clone());
    let user = match service.get(id_or_username).await {
        Ok(user) => user,
        Err(_) => service.get_by_username(id_or_username).await?,
    };
    print_json(&UserResponse::from(&user))
}

pub async fn list(database: &Database, role: Option<Role>) -> AppResult<()> {
    let service = UserService::new(database.clone());
    let users = match role {
        Some(role) => service.list_by_role(role).await?,
        None => service.list().await?,
    };
    let responses: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    print_json(&responses)
}
