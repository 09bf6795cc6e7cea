//! Unified error handling for admin components.

use thiserror::Error;

use crate::catalog::SeedError;
use crate::config::ConfigError;

/// Errors surfaced by the admin crate.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog seeding failed.
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_error_display() {
        let err = AdminError::Config(ConfigError::InvalidEnvVar(
            "ADMIN_PER_PAGE".to_string(),
            "must be one of 10, 20, 50, 100".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Config error: Invalid environment variable ADMIN_PER_PAGE: must be one of 10, 20, 50, 100"
        );
    }
}
