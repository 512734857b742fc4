// ABOUTME: Account request/response shapes
// ABOUTME: Account creation input and projections that never expose the password hash
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::require_text;
use crate::errors::{AppError, AppResult};
use crate::models::{Role, User};

/// Create an account
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Login name
    pub username: String,
    /// Plain-text password, hashed before storage
    pub password: String,
    /// Contact email
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Optional phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Roles; empty means `MEMBER`
    #[serde(default)]
    pub roles: BTreeSet<Role>,
}

impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("email", &self.email)
            .field("roles", &self.roles)
            .finish_non_exhaustive()
    }
}

impl CreateUserRequest {
    /// Check required fields
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` for blank fields or `INVALID_FORMAT`
    /// for an email without `@`
    pub fn validate(&self) -> AppResult<()> {
        require_text("username", &self.username)?;
        require_text("password", &self.password)?;
        require_text("email", &self.email)?;
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)?;
        if !self.email.contains('@') {
            return Err(AppError::invalid_format(format!(
                "Invalid email address: {}",
                self.email
            )));
        }
        Ok(())
    }
}

/// Short account reference embedded in workout projections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Identifier
    pub id: String,
    /// Login name
    pub username: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

/// Full account projection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Identifier
    pub id: String,
    /// Login name
    pub username: String,
    /// Contact email
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Optional phone number
    pub phone_number: Option<String>,
    /// Whether the account is active
    pub active: bool,
    /// Held roles
    pub roles: BTreeSet<Role>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone_number: user.phone_number.clone(),
            active: user.active,
            roles: user.roles.clone(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_has_no_password_hash() {
        let user = User::new(
            "jane".into(),
            "$2b$04$hash".into(),
            "jane@example.com".into(),
            "Jane".into(),
            "Doe".into(),
            [Role::Trainer].into_iter().collect(),
        );
        let json = serde_json::to_string(&UserResponse::from(&user)).unwrap();
        assert!(!json.contains("hash"));
        assert!(json.contains(r#""firstName":"Jane""#));
        assert!(json.contains(r#""roles":["TRAINER"]"#));
    }

    #[test]
    fn test_debug_redacts_password() {
        let request: CreateUserRequest = serde_json::from_str(
            r#"{"username":"u","password":"hunter2","email":"u@x.io","firstName":"U","lastName":"X"}"#,
        )
        .unwrap();
        assert!(request.roles.is_empty());
        assert!(!format!("{request:?}").contains("hunter2"));
        assert!(request.validate().is_ok());
    }
}
