// ABOUTME: Core types and constants for the Pierre strength analytics toolkit
// ABOUTME: Foundation crate with error handling, training data models, and policy constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for the strength
//! analytics toolkit. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Policy constants organized by domain
//! - **models**: Session, exercise, set, and goal value types

/// Unified error handling with standard error codes
pub mod errors;

/// Policy constants organized by domain
pub mod constants;

/// Training record and goal data models
pub mod models;
