//! LMS dashboard web server
#![forbid(unsafe_code)]

use lms_core::Config;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config is read before logging exists; report a fallback once it does
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    lms_core::init_logging(&config.logging)?;

    if let Some(e) = load_error {
        warn!("Failed to load config: {e}, using defaults");
    }

    lms_web::serve(config).await?;

    Ok(())
}
