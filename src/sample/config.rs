//! TOML-based configuration for the sample data generator.
//!
//! Supports a config file (staylens.toml) with serde defaults, so a partial
//! file only overrides the fields it names:
//! ```toml
//! num_dates = 30
//! num_hotels = 5
//! num_bookings = 100
//! seed = 42
//! start_date = "2024-01-01"
//! ```

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for generator configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Sizes and seed for one synthetic snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Calendar length in days (DateID domain).
    pub num_dates: u32,
    /// Hotel count (HotelID domain).
    pub num_hotels: u32,
    /// Booking count (BookingID domain).
    pub num_bookings: u32,
    /// RNG seed; the same seed reproduces the same snapshot.
    pub seed: u64,
    /// First calendar day of the date dimension.
    pub start_date: NaiveDate,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            num_dates: 30,
            num_hotels: 5,
            num_bookings: 100,
            seed: 42,
            start_date: default_start_date(),
        }
    }
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("literal date")
}

impl GeneratorConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        let config: GeneratorConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all sizes are positive and the calendar fits in chrono's
    /// date domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_dates == 0 {
            return Err(ConfigError::InvalidConfig(
                "num_dates must be positive".to_string(),
            ));
        }
        if self.num_hotels == 0 {
            return Err(ConfigError::InvalidConfig(
                "num_hotels must be positive".to_string(),
            ));
        }
        if self.num_bookings == 0 {
            return Err(ConfigError::InvalidConfig(
                "num_bookings must be positive".to_string(),
            ));
        }
        if self
            .start_date
            .checked_add_days(Days::new(u64::from(self.num_dates) - 1))
            .is_none()
        {
            return Err(ConfigError::InvalidConfig(format!(
                "calendar of {} days starting {} overflows the date domain",
                self.num_dates, self.start_date
            )));
        }
        Ok(())
    }
}
