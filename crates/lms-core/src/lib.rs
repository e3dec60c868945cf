//! Core types and utilities for the LMS dashboard

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod access;
pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use access::{CourseActions, CurrentUser, Role};
pub use config::Config;
pub use error::{Error, Result};
pub use types::{AuditLogEntry, Course, InstructorStats, Student, SystemHealth};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &config::LoggingConfig) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        config::LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        config::LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };

    result.map_err(|e| Error::Configuration {
        message: format!("Failed to install log subscriber: {e}"),
    })?;
    tracing::debug!(level = %config.level, format = ?config.format, "Logging initialized");

    Ok(())
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn test_second_logging_init_is_a_configuration_error() {
        let logging = config::LoggingConfig::default();

        // The first call may lose to another test; the second always finds a subscriber
        let _ = init_logging(&logging);
        let second = init_logging(&logging);

        assert!(matches!(second, Err(Error::Configuration { .. })));
    }
}
