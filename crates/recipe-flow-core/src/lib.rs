// ABOUTME: Core types and constants for the Recipe Flow dependency-graph transform
// ABOUTME: Foundation crate with error handling, recipe models, and unit/category constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

#![deny(unsafe_code)]

//! # Recipe Flow Core
//!
//! Foundation crate providing shared types and constants for the recipe
//! dependency-graph transform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the structural `GraphError`
//! - **constants**: Unit conversion factors, category ordering, and view defaults
//! - **models**: Authored recipe schema plus the derived sub-recipe and shopping-list types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Recipe data models (authored input and derived output)
pub mod models;
