// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness
// ABOUTME: Input helpers for limitbeyond-cli
// ABOUTME: Reads JSON request files and parses local date-time arguments

use std::io::{self, Read};
use std::path::Path;

use chrono::NaiveDateTime;
use limitbeyond::errors::{AppError, AppResult};
use limitbeyond::formats::parse_local;
use serde::de::DeserializeOwned;
use tokio::fs;

/// Read and deserialize a JSON request file (`-` reads stdin)
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| AppError::invalid_input(format!("Failed to read stdin: {e}")))?;
        buffer
    } else {
        fs::read_to_string(path).await.map_err(|e| {
            AppError::invalid_input(format!("Failed to read {}: {e}", path.display()))
        })?
    };
    Ok(serde_json::from_str(&raw)?)
}

/// clap value parser for `yyyy-MM-ddTHH:mm:ss` arguments
pub fn parse_date(value: &str) -> Result<NaiveDateTime, String> {
    parse_local(value).map_err(|e| e.message)
}
