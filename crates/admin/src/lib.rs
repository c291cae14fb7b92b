//! Tidemark Admin library.
//!
//! This crate provides the admin panel functionality as a library,
//! allowing it to be tested and reused by the CLI and integration tests.
//!
//! # Security
//!
//! This crate holds a bearer token with full platform admin scope for the
//! lifetime of each session. Only deploy on VPN-protected infrastructure.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod platform;
pub mod routes;
pub mod services;
pub mod state;
