// ABOUTME: Account operations: creation with hashed credentials and lookups
// ABOUTME: Enforces unique usernames and the default MEMBER role
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

use std::collections::BTreeSet;

use tokio::task;
use tracing::info;

use crate::database::{Database, UserManager};
use crate::dto::CreateUserRequest;
use crate::errors::{AppError, AppResult};
use crate::models::{Role, User};

/// Account service
#[derive(Clone)]
pub struct UserService {
    database: Database,
    users: UserManager,
    hash_cost: u32,
}

impl UserService {
    /// Create a service hashing with the default bcrypt cost
    #[must_use]
    pub fn new(database: Database) -> Self {
        Self::with_hash_cost(database, bcrypt::DEFAULT_COST)
    }

    /// Create a service with an explicit bcrypt cost
    #[must_use]
    pub fn with_hash_cost(database: Database, hash_cost: u32) -> Self {
        let users = database.users();
        Self {
            database,
            users,
            hash_cost,
        }
    }

    /// Register a new account
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_ALREADY_EXISTS` for a taken username, a validation
    /// error for blank fields, or a storage error
    pub async fn create(&self, request: &CreateUserRequest) -> AppResult<User> {
        request.validate()?;
        if self.users.exists_by_username(&request.username).await? {
            return Err(AppError::already_exists(format!(
                "Username '{}' is already taken",
                request.username
            )));
        }

        let password_hash = self.hash_password(&request.password).await?;
        let roles = if request.roles.is_empty() {
            BTreeSet::from([Role::Member])
        } else {
            request.roles.clone()
        };

        let mut user = User::new(
            request.username.clone(),
            password_hash,
            request.email.clone(),
            request.first_name.clone(),
            request.last_name.clone(),
            roles,
        );
        user.phone_number.clone_from(&request.phone_number);

        let mut conn = self.database.acquire().await?;
        self.users.insert(&mut conn, &user).await?;

        info!(user.id = %user.id, user.username = %user.username, roles = ?user.roles, "Created user");
        Ok(user)
    }

    /// Get an account by id
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no account has this id
    pub async fn get(&self, id: &str) -> AppResult<User> {
        self.users
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("User").with_resource_id(id))
    }

    /// Get an account by username
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no account has this username
    pub async fn get_by_username(&self, username: &str) -> AppResult<User> {
        self.users
            .get_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User").with_resource_id(username))
    }

    /// All accounts
    ///
    /// # Errors
    ///
    /// Returns a storage error
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    /// Accounts holding a role
    ///
    /// # Errors
    ///
    /// Returns a storage error
    pub async fn list_by_role(&self, role: Role) -> AppResult<Vec<User>> {
        self.users.list_by_role(role).await
    }

    /// Number of accounts
    ///
    /// # Errors
    ///
    /// Returns a storage error
    pub async fn count(&self) -> AppResult<i64> {
        self.users.count().await
    }

    async fn hash_password(&self, password: &str) -> AppResult<String> {
        let password = password.to_owned();
        let cost = self.hash_cost;
        task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
            .map_err(AppError::from)
    }
}
