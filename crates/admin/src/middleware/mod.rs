//! Middleware and extractors for the admin panel.

pub mod auth;
pub mod session;

pub use auth::{OptionalAdminAuth, RequireAdminAuth, RequireAdminRole};
pub use session::create_session_layer;
