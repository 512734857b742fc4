// ABOUTME: Core types and constants for the LimitBeyond fitness club backend
// ABOUTME: Foundation crate with error handling, domain models, and date formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness

#![deny(unsafe_code)]

//! # LimitBeyond Core
//!
//! Foundation crate providing shared types for the LimitBeyond club backend.
//! It changes rarely, which keeps incremental builds of the main crate cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Users, muscle groups, exercise templates, workouts
//! - **formats**: `yyyy-MM-dd'T'HH:mm:ss` serde helpers

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;

/// Local date-time formatting for JSON and storage
pub mod formats;
