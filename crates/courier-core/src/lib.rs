//! # courier-core
//!
//! Error handling, configuration, and the request context shared by the
//! Courier schema and method crates.

pub mod config;
pub mod context;
pub mod error;
