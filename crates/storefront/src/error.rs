//! Error type for storefront components.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the storefront crate.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
