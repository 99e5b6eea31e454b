//! In-memory user registry: create, look up, deactivate and report on users.

pub mod config;
pub mod telemetry;
pub mod users;

pub use config::AppConfig;
pub use users::{NewUser, User, UserRegistry, UserStatus, UserValidationError};

/// Load `.env`, read the config and install logging.
pub fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    telemetry::init(&config.log)?;

    tracing::info!(json_logs = config.log.json, "user registry ready");
    Ok(config)
}
