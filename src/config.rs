//! Configuration management for the HouseSkiper booking core

use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Booking-screen defaults applied when a configurator is created.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BookingConfig {
    /// Count a room category resets to when it becomes selected
    pub default_room_count: u32,
    /// Initial dirtiness slider position
    pub default_dirtiness: f32,
    /// Time pre-selected on the booking screen
    pub default_time: String,
}

/// Payment summary settings for the confirmation step.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PaymentConfig {
    pub service_fee: Decimal,
    pub currency: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub booking: BookingConfig,
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix HOUSESKIPER_)
            .add_source(
                Environment::with_prefix("HOUSESKIPER")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            default_room_count: 1,
            default_dirtiness: 30.0,
            default_time: "2:00 pm".to_string(),
        }
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            service_fee: dec!(5),
            currency: "USD".to_string(),
        }
    }
}
