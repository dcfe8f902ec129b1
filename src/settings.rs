use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub debug: bool,
    pub enable_swagger: bool,
    pub port: u16,
    /// IANA zone used for datetime display when a request does not ask for one.
    pub default_timezone: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // Load from environment variables with APP_ prefix
            .add_source(Environment::with_prefix("APP"))
            .set_default("database_url", "sqlite:fitness_booking.db")?
            .set_default("debug", false)?
            .set_default("enable_swagger", true)?
            .set_default("port", 8000)?
            .set_default("default_timezone", "Asia/Kolkata")?
            .build()?;

        config.try_deserialize()
    }
}
