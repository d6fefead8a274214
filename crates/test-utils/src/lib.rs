//! Shared test utilities for the climate-api workspace.
//!
//! This crate provides common testing infrastructure:
//! - In-memory SQLite store construction
//! - Row seeding helpers for the station and measurement tables
//! - A small pre-baked sample dataset
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{memory_store, seed_measurement, seed_station};
//! ```

pub mod fixtures;

// Re-export commonly used items at the crate root
pub use fixtures::*;
