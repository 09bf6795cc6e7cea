//! Variant resolution for the product detail page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{ProductDetail, ProductVariant};
use crate::types::VariantId;

/// Local selection state: the attribute values picked so far and the
/// variant they resolved to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSelector {
    pub selection: BTreeMap<String, String>,
    pub selected: Option<VariantId>,
}

impl VariantSelector {
    /// Start from the product's first variant.
    #[must_use]
    pub fn for_product(product: &ProductDetail) -> Self {
        Self {
            selection: product.initial_selection(),
            selected: product.default_variant().map(|v| v.id.clone()),
        }
    }

    /// Pick `value` for `attribute`.
    ///
    /// The value is merged into the selection and the first variant matching
    /// every selected value becomes the selected variant. With no match the
    /// previously selected variant stays in place. Returns whether the
    /// selected variant changed.
    pub fn select(
        &mut self,
        attribute: &str,
        value: &str,
        variants: &[ProductVariant],
    ) -> bool {
        self.selection
            .insert(attribute.to_string(), value.to_string());

        let Some(found) = variants.iter().find(|v| v.matches(&self.selection)) else {
            debug!(attribute, value, "no variant matches selection, keeping previous");
            return false;
        };

        if self.selected.as_ref() == Some(&found.id) {
            return false;
        }
        self.selected = Some(found.id.clone());
        true
    }

    /// The currently selected variant record.
    #[must_use]
    pub fn selected_variant<'a>(&self, variants: &'a [ProductVariant]) -> Option<&'a ProductVariant> {
        let id = self.selected.as_ref()?;
        variants.iter().find(|v| &v.id == id)
    }

    /// Whether `value` is the currently selected value for `attribute`.
    #[must_use]
    pub fn is_selected(&self, attribute: &str, value: &str) -> bool {
        self.selection.get(attribute).is_some_and(|v| v == value)
    }

    /// Whether picking `value` for `attribute` (keeping the other
    /// selections) would land on an in-stock variant.
    #[must_use]
    pub fn is_value_available(
        &self,
        attribute: &str,
        value: &str,
        variants: &[ProductVariant],
    ) -> bool {
        let mut candidate = self.selection.clone();
        candidate.insert(attribute.to_string(), value.to_string());
        variants
            .iter()
            .any(|v| v.stock > 0 && v.matches(&candidate))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{CurrencyCode, Money};

    fn variants(skip: Option<(&str, &str)>) -> Vec<ProductVariant> {
        let mut out = Vec::new();
        for size in ["S", "M", "L"] {
            for color in ["Red", "Blue"] {
                if skip == Some((size, color)) {
                    continue;
                }
                out.push(ProductVariant {
                    id: VariantId::new(format!("{size}-{color}")),
                    sku: format!("SKU-{size}-{color}"),
                    options: BTreeMap::from([
                        ("Size".to_string(), size.to_string()),
                        ("Color".to_string(), color.to_string()),
                    ]),
                    price: Money::new(99_900, CurrencyCode::INR),
                    mrp: Money::new(99_900, CurrencyCode::INR),
                    stock: if color == "Blue" && size == "L" { 0 } else { 4 },
                });
            }
        }
        out
    }

    fn selector(size: &str, color: &str) -> VariantSelector {
        VariantSelector {
            selection: BTreeMap::from([
                ("Size".to_string(), size.to_string()),
                ("Color".to_string(), color.to_string()),
            ]),
            selected: Some(VariantId::new(format!("{size}-{color}"))),
        }
    }

    #[test]
    fn test_select_resolves_full_match() {
        let all = variants(None);
        let mut sel = selector("M", "Red");
        assert!(sel.select("Color", "Blue", &all));
        assert_eq!(sel.selected, Some(VariantId::new("M-Blue")));
        assert_eq!(sel.selected_variant(&all).unwrap().sku, "SKU-M-Blue");
    }

    #[test]
    fn test_no_match_keeps_previous_variant() {
        let partial = variants(Some(("S", "Blue")));
        let mut sel = selector("S", "Red");
        assert!(!sel.select("Color", "Blue", &partial));
        assert_eq!(sel.selected, Some(VariantId::new("S-Red")));
        // The selection map still records the pick.
        assert!(sel.is_selected("Color", "Blue"));
    }

    #[test]
    fn test_reselecting_same_value_reports_no_change() {
        let all = variants(None);
        let mut sel = selector("M", "Red");
        assert!(!sel.select("Size", "M", &all));
    }

    #[test]
    fn test_first_matching_variant_wins() {
        let all = variants(None);
        let mut sel = VariantSelector::default();
        assert!(sel.select("Size", "L", &all));
        assert_eq!(sel.selected, Some(VariantId::new("L-Red")));
    }

    #[test]
    fn test_value_availability_considers_stock() {
        let all = variants(None);
        let sel = selector("L", "Red");
        assert!(sel.is_value_available("Size", "M", &all));
        assert!(!sel.is_value_available("Color", "Blue", &all));
        assert!(!sel.is_value_available("Size", "XL", &all));
    }
}
