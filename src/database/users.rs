// ABOUTME: User account storage with JSON-encoded role sets
// ABOUTME: Insert and lookups by id, username and role for club accounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

use std::collections::BTreeSet;

use sqlx::{sqlite::SqliteRow, Error as SqlxError, Row, SqliteConnection, SqlitePool};

use super::parse_timestamp;
use crate::errors::{AppError, AppResult};
use crate::models::{Role, User};

const USER_COLUMNS: &str = "id, username, password_hash, email, first_name, last_name, \
     phone_number, active, roles, created_at, updated_at";

/// User account store
#[derive(Clone)]
pub struct UserManager {
    pool: SqlitePool,
}

impl UserManager {
    /// Create a new user manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new account
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_ALREADY_EXISTS` if the username is taken, or a
    /// database error otherwise
    pub async fn insert(&self, conn: &mut SqliteConnection, user: &User) -> AppResult<()> {
        let roles_json = serde_json::to_string(&user.roles)?;

        sqlx::query(
            r"
            INSERT INTO users (
                id, username, password_hash, email, first_name, last_name,
                phone_number, active, roles, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone_number)
        .bind(user.active)
        .bind(roles_json)
        .bind(user.created_at.to_rfc3339())
        .bind(user.updated_at.to_rfc3339())
        .execute(&mut *conn)
        .await
        .map_err(|e| match &e {
            SqlxError::Database(db) if db.is_unique_violation() => {
                AppError::already_exists(format!("Username '{}' is already taken", user.username))
            }
            _ => AppError::database(format!("Failed to insert user: {e}")),
        })?;

        Ok(())
    }

    /// Get an account by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get(&self, id: &str) -> AppResult<Option<User>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get user: {e}")))?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Get an account by username
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get user by username: {e}")))?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Whether a username is taken
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to check username: {e}")))?;
        Ok(count > 0)
    }

    /// All accounts ordered by username
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY username"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list users: {e}")))?;

        rows.iter().map(row_to_user).collect()
    }

    /// Accounts holding a role, ordered by username
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_by_role(&self, role: Role) -> AppResult<Vec<User>> {
        let rows = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE EXISTS (SELECT 1 FROM json_each(users.roles) WHERE json_each.value = $1) \
             ORDER BY username"
        ))
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list users by role: {e}")))?;

        rows.iter().map(row_to_user).collect()
    }

    /// Number of accounts
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count users: {e}")))
    }
}

fn row_to_user(row: &SqliteRow) -> AppResult<User> {
    let roles_json: String = row.get("roles");
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");
    let roles: BTreeSet<Role> = serde_json::from_str(&roles_json)?;

    Ok(User {
        id: row.get("id"),
        username: row.get("username"),
        password_hash: row.get("password_hash"),
        email: row.get("email"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        phone_number: row.get("phone_number"),
        active: row.get("active"),
        roles,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}
