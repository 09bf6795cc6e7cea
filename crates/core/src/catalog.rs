//! Product catalog display records.
//!
//! Variant pricing and stock are flat per variant. No relational
//! constraints are checked here; the catalog service owns consistency.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CategoryId, Money, ProductId, StockStatus, VariantId};

/// A product as shown in list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub handle: String,
    pub category: Option<CategoryId>,
    /// Selling price.
    pub price: Money,
    /// Maximum retail price, shown struck through when above `price`.
    pub mrp: Money,
    pub stock: u32,
    pub thumbnail: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Stock classification with the given low-stock threshold.
    #[must_use]
    pub const fn stock_status(&self, low_threshold: u32) -> StockStatus {
        StockStatus::from_stock(self.stock, low_threshold)
    }
}

/// SEO metadata for a product page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seo {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Shopping feed (Merchant Centre) attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantCentre {
    pub gtin: Option<String>,
    pub brand: Option<String>,
    pub google_category: Option<String>,
    #[serde(default)]
    pub condition: ItemCondition,
}

/// Item condition for shopping feeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCondition {
    #[default]
    New,
    Refurbished,
    Used,
}

/// One allowed value of a product attribute.
///
/// Deserializes from either a plain string (`"M"`) or a swatch object
/// (`{ value = "Red", color = "#d32f2f" }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Plain(String),
    Swatch { value: String, color: String },
}

impl AttributeValue {
    /// The value used for variant matching.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Plain(value) | Self::Swatch { value, .. } => value,
        }
    }

    /// Swatch color, if this is a color value.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Swatch { color, .. } => Some(color),
        }
    }
}

/// A named attribute (e.g. "Size") with its enumerated values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttribute {
    pub name: String,
    pub values: Vec<AttributeValue>,
}

impl ProductAttribute {
    /// Whether `value` is one of this attribute's allowed values.
    #[must_use]
    pub fn allows(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.value() == value)
    }
}

/// A purchasable configuration: one value per attribute plus its own price and stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: VariantId,
    pub sku: String,
    /// Attribute name to value, e.g. `{"Color": "Blue", "Size": "M"}`.
    pub options: BTreeMap<String, String>,
    pub price: Money,
    pub mrp: Money,
    pub stock: u32,
}

impl ProductVariant {
    /// Every key in `selection` equals this variant's value for that key.
    #[must_use]
    pub fn matches(&self, selection: &BTreeMap<String, String>) -> bool {
        selection
            .iter()
            .all(|(name, value)| self.options.get(name) == Some(value))
    }

    /// Option values joined for display, e.g. `Blue / M`.
    #[must_use]
    pub fn title(&self) -> String {
        self.options
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

/// A collapsible details section on the product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailSection {
    pub title: String,
    pub body: String,
}

/// Full product record for detail pages and the admin editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<ProductAttribute>,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    #[serde(default)]
    pub seo: Seo,
    #[serde(default)]
    pub merchant_centre: MerchantCentre,
    #[serde(default)]
    pub sections: Vec<DetailSection>,
}

impl ProductDetail {
    /// The variant shown before the shopper picks anything.
    #[must_use]
    pub fn default_variant(&self) -> Option<&ProductVariant> {
        self.variants.first()
    }

    /// Selection map matching the default variant.
    #[must_use]
    pub fn initial_selection(&self) -> BTreeMap<String, String> {
        self.default_variant()
            .map(|v| v.options.clone())
            .unwrap_or_default()
    }

    /// Look up a variant by id.
    #[must_use]
    pub fn variant(&self, id: &VariantId) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| &v.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::CurrencyCode;

    fn variant(size: &str, color: &str) -> ProductVariant {
        ProductVariant {
            id: VariantId::new(format!("variant_{size}_{color}")),
            sku: format!("TEE-{size}-{color}"),
            options: BTreeMap::from([
                ("Size".to_string(), size.to_string()),
                ("Color".to_string(), color.to_string()),
            ]),
            price: Money::new(99_900, CurrencyCode::INR),
            mrp: Money::new(129_900, CurrencyCode::INR),
            stock: 3,
        }
    }

    #[test]
    fn test_matches_partial_selection() {
        let v = variant("M", "Blue");
        let selection = BTreeMap::from([("Size".to_string(), "M".to_string())]);
        assert!(v.matches(&selection));
        assert!(v.matches(&BTreeMap::new()));
    }

    #[test]
    fn test_matches_rejects_unknown_key() {
        let v = variant("M", "Blue");
        let selection = BTreeMap::from([("Fit".to_string(), "Slim".to_string())]);
        assert!(!v.matches(&selection));
    }

    #[test]
    fn test_variant_title() {
        assert_eq!(variant("L", "Red").title(), "Red / L");
    }

    #[test]
    fn test_attribute_value_untagged() {
        let values: Vec<AttributeValue> =
            serde_json::from_str(r##"["S", {"value": "Red", "color": "#ff0000"}]"##).unwrap();
        assert_eq!(values[0], AttributeValue::Plain("S".to_string()));
        assert_eq!(values[1].value(), "Red");
        assert_eq!(values[1].color(), Some("#ff0000"));
    }
}
