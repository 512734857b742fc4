// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness
// ABOUTME: Output formatting helpers for limitbeyond-cli
// ABOUTME: Pretty JSON on stdout for results, short confirmations for deletions

use limitbeyond::errors::{AppResult, ErrorResponse};
use serde::Serialize;

/// Print a projection as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a confirmation for an operation without a body
pub fn print_deleted(kind: &str, id: &str) {
    println!("Deleted {kind} {id}");
}

/// Print an error envelope to stderr
pub fn print_error(response: &ErrorResponse) {
    match serde_json::to_string_pretty(response) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{}", response.error.message),
    }
}
