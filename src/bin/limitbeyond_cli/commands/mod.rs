// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness
// ABOUTME: Re-exports command modules for limitbeyond-cli
// ABOUTME: Accounts, muscle groups, exercise templates and workouts

pub mod exercise;
pub mod muscle_group;
pub mod user;
pub mod workout;
