//! Catalog service seam and an in-memory implementation.
//!
//! The admin crate never talks to a database. Anything that can create
//! regions, categories, products and variants implements [`CatalogService`];
//! [`InMemoryCatalog`] backs previews and tests.

pub mod seed;

pub use seed::{SeedData, SeedError, SeedResult, seed_catalog, validate_seed_data};

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use storeview_core::catalog::{
    DetailSection, MerchantCentre, Product, ProductAttribute, ProductDetail, ProductVariant, Seo,
};
use storeview_core::{CategoryId, CurrencyCode, Money, ProductId, RegionId, VariantId};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

/// Errors returned by a catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Duplicate handle: {0}")]
    DuplicateHandle(String),

    #[error("Catalog service unavailable: {0}")]
    Unavailable(String),
}

/// A sales region with its currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
    pub currency: CurrencyCode,
    pub countries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub handle: String,
    pub parent: Option<CategoryId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegion {
    pub name: String,
    pub currency: CurrencyCode,
    pub countries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub handle: String,
    pub parent: Option<CategoryId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub title: String,
    pub handle: String,
    pub description: String,
    pub category: Option<CategoryId>,
    pub price: Money,
    pub mrp: Money,
    pub thumbnail: Option<String>,
    pub images: Vec<String>,
    pub attributes: Vec<ProductAttribute>,
    pub is_published: bool,
    pub seo: Seo,
    pub merchant_centre: MerchantCentre,
    pub sections: Vec<DetailSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVariant {
    pub product_id: ProductId,
    pub sku: String,
    pub options: BTreeMap<String, String>,
    pub price: Money,
    pub mrp: Money,
    pub stock: u32,
}

/// Create operations used by the seeder.
///
/// Each call returns the created record with a service-assigned id.
pub trait CatalogService {
    fn create_region(
        &self,
        region: NewRegion,
    ) -> impl Future<Output = Result<Region, CatalogError>> + Send;

    fn create_category(
        &self,
        category: NewCategory,
    ) -> impl Future<Output = Result<Category, CatalogError>> + Send;

    fn create_product(
        &self,
        product: NewProduct,
    ) -> impl Future<Output = Result<ProductDetail, CatalogError>> + Send;

    fn create_variant(
        &self,
        variant: NewVariant,
    ) -> impl Future<Output = Result<ProductVariant, CatalogError>> + Send;
}

#[derive(Debug, Default)]
struct CatalogState {
    regions: Vec<Region>,
    categories: Vec<Category>,
    products: Vec<ProductDetail>,
}

/// Catalog held in memory.
///
/// Handles may repeat unless [`InMemoryCatalog::reject_duplicate_handles`]
/// is set, so seeding twice duplicates every record.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    state: Mutex<CatalogState>,
    calls: AtomicUsize,
    fail_after: Option<usize>,
    reject_duplicate_handles: bool,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every create call after the first `calls` succeed.
    #[must_use]
    pub const fn fail_after(mut self, calls: usize) -> Self {
        self.fail_after = Some(calls);
        self
    }

    /// Reject products whose handle already exists.
    #[must_use]
    pub const fn reject_duplicate_handles(mut self) -> Self {
        self.reject_duplicate_handles = true;
        self
    }

    fn check_available(&self) -> Result<(), CatalogError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_after {
            Some(limit) if call >= limit => Err(CatalogError::Unavailable(format!(
                "injected failure on call {}",
                call + 1
            ))),
            _ => Ok(()),
        }
    }

    pub async fn regions(&self) -> Vec<Region> {
        self.state.lock().await.regions.clone()
    }

    pub async fn categories(&self) -> Vec<Category> {
        self.state.lock().await.categories.clone()
    }

    pub async fn product_details(&self) -> Vec<ProductDetail> {
        self.state.lock().await.products.clone()
    }

    /// List records for the products table.
    pub async fn products(&self) -> Vec<Product> {
        self.state
            .lock()
            .await
            .products
            .iter()
            .map(|p| p.product.clone())
            .collect()
    }
}

impl CatalogService for InMemoryCatalog {
    async fn create_region(&self, region: NewRegion) -> Result<Region, CatalogError> {
        self.check_available()?;
        let region = Region {
            id: RegionId::generate(),
            name: region.name,
            currency: region.currency,
            countries: region.countries,
        };
        debug!(id = %region.id, name = %region.name, "Created region");
        self.state.lock().await.regions.push(region.clone());
        Ok(region)
    }

    async fn create_category(&self, category: NewCategory) -> Result<Category, CatalogError> {
        self.check_available()?;
        let mut state = self.state.lock().await;
        if let Some(parent) = &category.parent
            && !state.categories.iter().any(|c| &c.id == parent)
        {
            return Err(CatalogError::NotFound {
                kind: "category",
                id: parent.to_string(),
            });
        }
        let category = Category {
            id: CategoryId::generate(),
            name: category.name,
            handle: category.handle,
            parent: category.parent,
        };
        debug!(id = %category.id, handle = %category.handle, "Created category");
        state.categories.push(category.clone());
        Ok(category)
    }

    async fn create_product(&self, product: NewProduct) -> Result<ProductDetail, CatalogError> {
        self.check_available()?;
        let mut state = self.state.lock().await;
        if self.reject_duplicate_handles
            && state.products.iter().any(|p| p.product.handle == product.handle)
        {
            return Err(CatalogError::DuplicateHandle(product.handle));
        }
        let detail = ProductDetail {
            product: Product {
                id: ProductId::generate(),
                title: product.title,
                handle: product.handle,
                category: product.category,
                price: product.price,
                mrp: product.mrp,
                stock: 0,
                thumbnail: product.thumbnail,
                is_published: product.is_published,
                created_at: Utc::now(),
            },
            description: product.description,
            images: product.images,
            attributes: product.attributes,
            variants: Vec::new(),
            seo: product.seo,
            merchant_centre: product.merchant_centre,
            sections: product.sections,
        };
        debug!(id = %detail.product.id, handle = %detail.product.handle, "Created product");
        state.products.push(detail.clone());
        Ok(detail)
    }

    async fn create_variant(&self, variant: NewVariant) -> Result<ProductVariant, CatalogError> {
        self.check_available()?;
        let mut state = self.state.lock().await;
        let product = state
            .products
            .iter_mut()
            .find(|p| p.product.id == variant.product_id)
            .ok_or_else(|| CatalogError::NotFound {
                kind: "product",
                id: variant.product_id.to_string(),
            })?;
        let created = ProductVariant {
            id: VariantId::generate(),
            sku: variant.sku,
            options: variant.options,
            price: variant.price,
            mrp: variant.mrp,
            stock: variant.stock,
        };
        product.product.stock = product.product.stock.saturating_add(created.stock);
        product.variants.push(created.clone());
        debug!(id = %created.id, sku = %created.sku, "Created variant");
        Ok(created)
    }
}
