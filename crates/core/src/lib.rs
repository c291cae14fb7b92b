//! Tidemark Core - Shared types library.
//!
//! This crate provides common types used across all Tidemark admin components:
//! - `admin` - Internal administration panel for the Tidemark platform
//! - `cli` - Command-line tools for operational checks
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
