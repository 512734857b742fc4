// ABOUTME: User account model with club roles
// ABOUTME: User and Role definitions shared by storage, services and projections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::roles;
use crate::errors::AppError;

/// Role tag held by a club account
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Club administrator
    Admin,
    /// Trainer who assigns workouts to members
    Trainer,
    /// Member who performs workouts
    Member,
}

impl Role {
    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => roles::ADMIN,
            Self::Trainer => roles::TRAINER,
            Self::Member => roles::MEMBER,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            roles::ADMIN => Ok(Self::Admin),
            roles::TRAINER => Ok(Self::Trainer),
            roles::MEMBER => Ok(Self::Member),
            _ => Err(AppError::invalid_input(format!("Invalid role: {s}"))),
        }
    }
}

/// A club account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: String,
    /// Login name, unique across the club
    pub username: String,
    /// bcrypt hash of the password
    pub password_hash: String,
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
    /// Role set
    pub roles: BTreeSet<Role>,
    /// When the account was created
    pub created_at: DateTime<Utc>,
    /// Last modification
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active account with a fresh identifier
    #[must_use]
    pub fn new(
        username: String,
        password_hash: String,
        email: String,
        first_name: String,
        last_name: String,
        roles: BTreeSet<Role>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            password_hash,
            email,
            first_name,
            last_name,
            phone_number: None,
            active: true,
            roles,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the account holds a role
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("trainer".parse::<Role>().unwrap(), Role::Trainer);
        assert_eq!("MEMBER".parse::<Role>().unwrap(), Role::Member);
        assert!("coach".parse::<Role>().is_err());
    }

    #[test]
    fn test_roles_serialize_uppercase() {
        let roles: BTreeSet<Role> = [Role::Member, Role::Admin].into_iter().collect();
        assert_eq!(serde_json::to_string(&roles).unwrap(), r#"["ADMIN","MEMBER"]"#);
    }
}
