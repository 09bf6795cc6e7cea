//! Seed a catalog fixture.
//!
//! There is no database behind the CLI, so seeding runs against the
//! in-memory catalog. It exercises the same service calls, in the same order,
//! that a real backend would receive.

use std::path::Path;

use storeview_admin::catalog::{InMemoryCatalog, SeedData, SeedError, seed_catalog, validate_seed_data};
use tracing::{error, info};

/// Load the fixture at `file`, or the bundled demo catalog.
pub(crate) fn load(file: Option<&Path>) -> Result<SeedData, SeedError> {
    match file {
        Some(path) => {
            info!(path = %path.display(), "Loading catalog fixture");
            SeedData::from_path(path)
        }
        None => {
            info!("Loading bundled demo catalog");
            SeedData::demo()
        }
    }
}

/// Validate and seed a catalog fixture.
///
/// # Errors
///
/// Returns an error if the fixture cannot be read, fails validation, or a
/// create call fails.
pub async fn catalog(
    file: Option<&Path>,
    validate_only: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = load(file)?;
    info!(
        regions = data.regions.len(),
        categories = data.categories.len(),
        products = data.products.len(),
        variants = data.variant_count(),
        "Parsed fixture"
    );

    if let Err(SeedError::Invalid(problems)) = validate_seed_data(&data) {
        error!("Fixture validation failed:");
        for problem in &problems {
            error!("  - {problem}");
        }
        return Err(format!("{} validation errors found", problems.len()).into());
    }
    info!("Fixture validated successfully");

    if validate_only {
        return Ok(());
    }

    let service = InMemoryCatalog::new();
    let result = seed_catalog(&service, &data).await?;

    info!("Seeding complete!");
    info!("  Regions created: {}", result.regions);
    info!("  Categories created: {}", result.categories);
    info!("  Products created: {}", result.products);
    info!("  Variants created: {}", result.variants);

    Ok(())
}
