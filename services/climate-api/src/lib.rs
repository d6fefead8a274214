//! Climate API Service Library
//!
//! This crate provides the HTTP server implementation for the read-only
//! climate observation API.

pub mod handlers;
pub mod routes;
pub mod state;
