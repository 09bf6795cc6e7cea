//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_CURRENCY` - Display currency (default: INR)
//! - `STOREFRONT_SHIPPING_FEE` - Flat shipping fee in minor units (default: 4900)
//! - `STOREFRONT_FREE_SHIPPING_ABOVE` - Free shipping threshold in minor units,
//!   `none` to disable (default: 99900)

use std::str::FromStr;

use storeview_core::CurrencyCode;
use storeview_core::cart::ShippingRule;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub currency: CurrencyCode,
    pub shipping: ShippingRule,
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

impl StorefrontConfig {
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

        let currency = lookup("STOREFRONT_CURRENCY")
            .map(|raw| parse_var::<CurrencyCode>("STOREFRONT_CURRENCY", &raw))
            .transpose()?
            .unwrap_or(defaults.currency);

        let flat_fee = lookup("STOREFRONT_SHIPPING_FEE")
            .map(|raw| parse_var::<i64>("STOREFRONT_SHIPPING_FEE", &raw))
            .transpose()?
            .unwrap_or(defaults.shipping.flat_fee);
        if flat_fee < 0 {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_SHIPPING_FEE".to_string(),
                "must not be negative".to_string(),
            ));
        }

        let free_above = match lookup("STOREFRONT_FREE_SHIPPING_ABOVE") {
            Some(raw) if raw.trim().eq_ignore_ascii_case("none") => None,
            Some(raw) => Some(parse_var::<i64>("STOREFRONT_FREE_SHIPPING_ABOVE", &raw)?),
            None => defaults.shipping.free_above,
        };

        Ok(Self {
            currency,
            shipping: ShippingRule {
                flat_fee,
                free_above,
            },
        })
    }
}
