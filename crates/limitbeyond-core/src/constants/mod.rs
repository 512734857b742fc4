// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Date formats, role tags, defaults and service names for the fitness club backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

//! Constants module
//!
//! Constants are grouped into small domain modules rather than a single flat list.

/// Date and time formats used on the JSON surface and in storage
pub mod formats {
    /// Local date-time format (`yyyy-MM-dd'T'HH:mm:ss`)
    pub const LOCAL_DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S";
}

/// Role tags as stored in the `roles` JSON column
pub mod roles {
    /// Club administrator
    pub const ADMIN: &str = "ADMIN";
    /// Trainer assigning workouts
    pub const TRAINER: &str = "TRAINER";
    /// Member performing workouts
    pub const MEMBER: &str = "MEMBER";
}

/// Service identification for structured logs
pub mod service_names {
    /// Default service name
    pub const LIMITBEYOND: &str = "limitbeyond";
}

/// Workout defaults
pub mod workouts {
    /// Suffix appended to the name of a copied workout
    pub const COPY_SUFFIX: &str = " (Copy)";
}

/// Default values for configuration
pub mod defaults {
    /// Default on-disk database location
    pub const DATABASE_URL: &str = "sqlite:./data/limitbeyond.db";
    /// Default log level
    pub const LOG_LEVEL: &str = "info";
}
