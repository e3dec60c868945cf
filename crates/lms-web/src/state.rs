//! Application state management

use crate::api_client::ApiClient;
use lms_core::{Config, Result};

/// Application state holding configuration and the backend client
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// API client for backend communication
    pub api_client: ApiClient,
}

impl AppState {
    /// Create new application state
    ///
    /// # Errors
    ///
    /// Returns an error if the backend client cannot be built from the
    /// configuration.
    pub fn new(config: Config) -> Result<Self> {
        let api_client = ApiClient::from_config(&config.backend)?;

        Ok(Self { config, api_client })
    }

    /// Backend client acting for a caller, forwarding their credentials
    #[must_use]
    pub fn api_for(&self, authorization: Option<&str>) -> ApiClient {
        self.api_client.for_caller(authorization)
    }
}
