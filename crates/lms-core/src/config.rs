//! Configuration management for the LMS dashboard

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Web server configuration
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,

    /// REST backend the pages fetch from
    #[serde(default)]
    #[validate(nested)]
    pub backend: BackendConfig,

    /// Page display settings
    #[serde(default)]
    #[validate(nested)]
    pub dashboard: DashboardConfig,

    /// Logging configuration
    #[serde(default)]
    #[validate(nested)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    #[validate(length(min = 1))]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BackendConfig {
    /// Base URL every endpoint path is appended to
    #[serde(default = "default_base_url")]
    #[validate(url)]
    pub base_url: String,

    /// Static bearer token used when the caller's request carries none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Per-request timeout in seconds; requests never time out when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub request_timeout_secs: Option<u64>,
}

/// Page display settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DashboardConfig {
    /// Audit log entries shown on the admin page
    #[serde(default = "default_audit_log_limit")]
    #[validate(range(min = 1, max = 1000))]
    pub audit_log_limit: usize,

    /// Students shown in the instructor page's recent students table
    #[serde(default = "default_recent_students_limit")]
    #[validate(range(min = 1, max = 1000))]
    pub recent_students_limit: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// Human readable
    Text,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

const fn default_audit_log_limit() -> usize {
    10
}

const fn default_recent_students_limit() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_log_format() -> LogFormat {
    LogFormat::Json
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_token: None,
            request_timeout_secs: None,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            audit_log_limit: default_audit_log_limit(),
            recent_students_limit: default_recent_students_limit(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from `config.{toml,yaml,json}` in the working
    /// directory, then `LMS__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the result fails validation.
    pub fn load() -> crate::Result<Self> {
        Self::load_from(config::File::with_name("config").required(false))
    }

    /// Load configuration from an explicit file source plus the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the result fails validation.
    pub fn load_from<S>(file: S) -> crate::Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config: Self = config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix("LMS").separator("__"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }
}
