// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LimitBeyond Fitness
// ABOUTME: Re-exports helper modules for limitbeyond-cli
// ABOUTME: Provides JSON output, request file loading and argument parsers

pub mod display;
pub mod input;
