//! Demo catalog seeding.
//!
//! Loads a YAML fixture and pushes it through a [`CatalogService`] one call
//! at a time: regions, categories, then each product followed by its
//! variants. The first failed call aborts the run. Records created before
//! the failure stay in place.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use storeview_core::catalog::{DetailSection, MerchantCentre, ProductAttribute, Seo};
use storeview_core::{CategoryId, CurrencyCode, Money};
use thiserror::Error;
use tracing::{info, instrument, warn};

use super::{CatalogError, CatalogService, NewCategory, NewProduct, NewRegion, NewVariant};

/// The bundled demo catalog.
pub const DEMO_CATALOG: &str = include_str!("../../data/demo_catalog.yaml");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid seed data: {}", .0.join("; "))]
    Invalid(Vec<String>),

    #[error("Seeding aborted at {step}: {source}")]
    Step {
        step: String,
        #[source]
        source: CatalogError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedRegion {
    pub name: String,
    pub currency: CurrencyCode,
    #[serde(default)]
    pub countries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedCategory {
    pub handle: String,
    pub name: String,
    /// Handle of the parent category, which must appear earlier.
    pub parent: Option<String>,
}

/// A variant row. Price and MRP default to the product's.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedVariant {
    pub sku: String,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    pub price: Option<i64>,
    pub mrp: Option<i64>,
    #[serde(default)]
    pub stock: u32,
}

/// A product row. Amounts are minor units of `currency`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedProduct {
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub description: String,
    /// Category handle.
    pub category: Option<String>,
    #[serde(default)]
    pub currency: CurrencyCode,
    pub price: i64,
    pub mrp: Option<i64>,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_published")]
    pub published: bool,
    #[serde(default)]
    pub attributes: Vec<ProductAttribute>,
    #[serde(default)]
    pub variants: Vec<SeedVariant>,
    #[serde(default)]
    pub seo: Seo,
    #[serde(default)]
    pub merchant_centre: MerchantCentre,
    #[serde(default)]
    pub sections: Vec<DetailSection>,
}

const fn default_published() -> bool {
    true
}

/// A whole seed fixture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub regions: Vec<SeedRegion>,
    #[serde(default)]
    pub categories: Vec<SeedCategory>,
    #[serde(default)]
    pub products: Vec<SeedProduct>,
}

impl SeedData {
    /// Parse a YAML fixture.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Parse` if the YAML does not match the fixture shape.
    pub fn from_yaml(yaml: &str) -> Result<Self, SeedError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML fixture from disk.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Io` if the file cannot be read or
    /// `SeedError::Parse` if it is not a valid fixture.
    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// The bundled demo catalog.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Parse` if the bundled fixture is malformed.
    pub fn demo() -> Result<Self, SeedError> {
        Self::from_yaml(DEMO_CATALOG)
    }

    pub fn variant_count(&self) -> usize {
        self.products.iter().map(|p| p.variants.len()).sum()
    }
}

/// Counts of records created by [`seed_catalog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedResult {
    pub regions: usize,
    pub categories: usize,
    pub products: usize,
    pub variants: usize,
}

/// Check a fixture for problems the catalog service would only surface
/// halfway through a run.
///
/// # Errors
///
/// Returns `SeedError::Invalid` listing every problem found.
pub fn validate_seed_data(data: &SeedData) -> Result<(), SeedError> {
    let mut problems = Vec::new();

    let mut category_handles = HashSet::new();
    for category in &data.categories {
        if let Some(parent) = &category.parent
            && !category_handles.contains(parent.as_str())
        {
            problems.push(format!(
                "category {}: parent {parent} must be defined before it",
                category.handle
            ));
        }
        if !category_handles.insert(category.handle.as_str()) {
            problems.push(format!("duplicate category handle {}", category.handle));
        }
    }

    let mut product_handles = HashSet::new();
    for product in &data.products {
        let label = &product.handle;
        if product.title.trim().is_empty() {
            problems.push(format!("product {label}: empty title"));
        }
        if !product_handles.insert(product.handle.as_str()) {
            problems.push(format!("duplicate product handle {label}"));
        }
        if let Some(category) = &product.category
            && !category_handles.contains(category.as_str())
        {
            problems.push(format!("product {label}: unknown category {category}"));
        }
        for variant in &product.variants {
            for (name, value) in &variant.options {
                match product.attributes.iter().find(|a| &a.name == name) {
                    None => problems.push(format!(
                        "product {label}: variant {} uses unknown attribute {name}",
                        variant.sku
                    )),
                    Some(attribute) if !attribute.allows(value) => problems.push(format!(
                        "product {label}: variant {} uses unknown {name} value {value}",
                        variant.sku
                    )),
                    Some(_) => {}
                }
            }
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(SeedError::Invalid(problems))
    }
}

fn step_error(step: impl Into<String>) -> impl FnOnce(CatalogError) -> SeedError {
    let step = step.into();
    move |source| SeedError::Step { step, source }
}

/// Push `data` through `service`, strictly in order.
///
/// Re-running against the same service creates every record again.
///
/// # Errors
///
/// Returns `SeedError::Invalid` if validation fails before any call is made,
/// or `SeedError::Step` naming the first create call that failed.
#[instrument(skip_all, fields(products = data.products.len()))]
pub async fn seed_catalog<S: CatalogService>(
    service: &S,
    data: &SeedData,
) -> Result<SeedResult, SeedError> {
    validate_seed_data(data)?;
    let mut result = SeedResult::default();

    for region in &data.regions {
        service
            .create_region(NewRegion {
                name: region.name.clone(),
                currency: region.currency,
                countries: region.countries.clone(),
            })
            .await
            .map_err(step_error(format!("region {}", region.name)))?;
        result.regions += 1;
    }

    let mut category_ids: HashMap<&str, CategoryId> = HashMap::new();
    for category in &data.categories {
        let parent = category
            .parent
            .as_deref()
            .and_then(|handle| category_ids.get(handle).cloned());
        let created = service
            .create_category(NewCategory {
                name: category.name.clone(),
                handle: category.handle.clone(),
                parent,
            })
            .await
            .map_err(step_error(format!("category {}", category.handle)))?;
        category_ids.insert(category.handle.as_str(), created.id);
        result.categories += 1;
    }

    for product in &data.products {
        let currency = product.currency;
        let price = Money::new(product.price, currency);
        let mrp = Money::new(product.mrp.unwrap_or(product.price), currency);
        let created = service
            .create_product(NewProduct {
                title: product.title.clone(),
                handle: product.handle.clone(),
                description: product.description.clone(),
                category: product
                    .category
                    .as_deref()
                    .and_then(|handle| category_ids.get(handle).cloned()),
                price,
                mrp,
                thumbnail: product.thumbnail.clone(),
                images: product.images.clone(),
                attributes: product.attributes.clone(),
                is_published: product.published,
                seo: product.seo.clone(),
                merchant_centre: product.merchant_centre.clone(),
                sections: product.sections.clone(),
            })
            .await
            .map_err(step_error(format!("product {}", product.handle)))?;
        result.products += 1;

        if product.variants.is_empty() {
            warn!(handle = %product.handle, "Product has no variants");
        }
        for variant in &product.variants {
            service
                .create_variant(NewVariant {
                    product_id: created.product.id.clone(),
                    sku: variant.sku.clone(),
                    options: variant.options.clone(),
                    price: variant.price.map_or(price, |p| Money::new(p, currency)),
                    mrp: variant.mrp.map_or(mrp, |p| Money::new(p, currency)),
                    stock: variant.stock,
                })
                .await
                .map_err(step_error(format!("variant {}", variant.sku)))?;
            result.variants += 1;
        }
    }

    info!(
        regions = result.regions,
        categories = result.categories,
        products = result.products,
        variants = result.variants,
        "Catalog seeded"
    );
    Ok(result)
}
