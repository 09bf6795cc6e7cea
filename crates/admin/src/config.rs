//! Admin UI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ADMIN_PER_PAGE` - Default page size (default: 20, one of 10/20/50/100)
//! - `ADMIN_LOW_STOCK_THRESHOLD` - Stock at or below this shows "Low stock" (default: 5)

use storeview_core::view::PER_PAGE_OPTIONS;
use storeview_core::StockStatus;
use thiserror::Error;

const DEFAULT_PER_PAGE: u32 = 20;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin UI settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Page size used until the user picks another.
    pub per_page: u32,
    /// Low-stock badge threshold.
    pub low_stock_threshold: u32,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            low_stock_threshold: StockStatus::DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let per_page = match lookup("ADMIN_PER_PAGE") {
            Some(raw) => {
                let value = raw.trim().parse::<u32>().map_err(|e| {
                    ConfigError::InvalidEnvVar("ADMIN_PER_PAGE".to_string(), e.to_string())
                })?;
                if !PER_PAGE_OPTIONS.contains(&value) {
                    return Err(ConfigError::InvalidEnvVar(
                        "ADMIN_PER_PAGE".to_string(),
                        "must be one of 10, 20, 50, 100".to_string(),
                    ));
                }
                value
            }
            None => defaults.per_page,
        };

        let low_stock_threshold = lookup("ADMIN_LOW_STOCK_THRESHOLD")
            .map(|raw| {
                raw.trim().parse::<u32>().map_err(|e| {
                    ConfigError::InvalidEnvVar("ADMIN_LOW_STOCK_THRESHOLD".to_string(), e.to_string())
                })
            })
            .transpose()?
            .unwrap_or(defaults.low_stock_threshold);

        Ok(Self {
            per_page,
            low_stock_threshold,
        })
    }
}
