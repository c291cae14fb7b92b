//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::platform::{PlatformClient, PlatformError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the platform API client. There is no database pool -
/// the platform owns all persistence.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    platform: PlatformClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform client cannot be constructed from
    /// the configuration (invalid base URL).
    pub fn new(config: AdminConfig) -> Result<Self, PlatformError> {
        let platform = PlatformClient::new(&config.platform)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, platform }),
        })
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the platform API client.
    #[must_use]
    pub fn platform(&self) -> &PlatformClient {
        &self.inner.platform
    }
}
