//! Climate API Service Library
//!
//! This crate provides the HTTP server implementation for the read-only
//! precipitation and temperature API.

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod router;
pub mod state;
