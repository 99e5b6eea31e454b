use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub log: LogConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log = LogConfig {
            filter: lookup("RUST_LOG").unwrap_or_else(|| "user_registry=debug".into()),
            json: lookup("LOG_FORMAT")
                .map(|v| v == "json")
                .unwrap_or(false),
        };
        if log.filter.trim().is_empty() {
            anyhow::bail!("RUST_LOG is set but empty");
        }
        Ok(Self { log })
    }
}
