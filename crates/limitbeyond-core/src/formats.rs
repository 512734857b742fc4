// ABOUTME: Serde helpers for the `yyyy-MM-dd'T'HH:mm:ss` local date-time format
// ABOUTME: Used by request/response shapes and by the text columns in storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

//! Local date-time formatting
//!
//! Scheduled and completed dates carry no time zone. They are written as
//! `2025-03-01T07:30:00`, which also sorts correctly as text.

use chrono::NaiveDateTime;

use crate::constants::formats::LOCAL_DATE_TIME;
use crate::errors::{AppError, AppResult};

/// Format a local date-time as `yyyy-MM-dd'T'HH:mm:ss`
#[must_use]
pub fn format_local(value: &NaiveDateTime) -> String {
    value.format(LOCAL_DATE_TIME).to_string()
}

/// Parse a local date-time in `yyyy-MM-dd'T'HH:mm:ss`
///
/// # Errors
///
/// Returns an `INVALID_FORMAT` error if the text does not match the format
pub fn parse_local(value: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, LOCAL_DATE_TIME).map_err(|e| {
        AppError::invalid_format(format!(
            "Invalid date '{value}', expected yyyy-MM-dd'T'HH:mm:ss: {e}"
        ))
    })
}

/// `#[serde(with = "optional_local_date_time")]` for optional fields
pub mod optional_local_date_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize `Some` as `yyyy-MM-dd'T'HH:mm:ss`, `None` as null
    ///
    /// # Errors
    ///
    /// Propagates serializer failures
    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_str(&super::format_local(v)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional `yyyy-MM-dd'T'HH:mm:ss` string
    ///
    /// # Errors
    ///
    /// Fails when a present string does not match the format
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_local(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}
