//! Cart items, coupons and the derived order summary.
//!
//! `OrderSummary` is not stored anywhere. It is recomputed from the cart
//! items on every render.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CurrencyCode, Money, VariantId};

/// A line in the shopper's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub variant_id: VariantId,
    pub title: String,
    pub variant_title: Option<String>,
    pub thumbnail: Option<String>,
    pub price: Money,
    pub mrp: Money,
    pub quantity: u32,
}

impl CartItem {
    /// Selling price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }

    /// MRP times quantity.
    #[must_use]
    pub fn line_mrp_total(&self) -> Money {
        self.mrp.times(self.quantity)
    }
}

/// How a coupon reduces the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CouponKind {
    /// A percentage of the subtotal, optionally capped (minor units).
    Percentage { percent: u32, max_discount: Option<i64> },
    /// A fixed amount off (minor units).
    Flat { amount: i64 },
}

/// Why a coupon cannot be applied.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum CouponIneligible {
    #[error("This coupon is not applicable to your cart")]
    NotApplicable,
    #[error("Add {shortfall} more to use this coupon")]
    BelowMinimum { shortfall: Money },
}

/// A discount code with eligibility rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub description: Option<String>,
    pub kind: CouponKind,
    /// Minimum subtotal in minor units; 0 means no minimum.
    #[serde(default)]
    pub min_order_value: i64,
    /// Backend-computed applicability flag (e.g. category restrictions).
    #[serde(default = "default_true")]
    pub is_applicable: bool,
}

const fn default_true() -> bool {
    true
}

impl Coupon {
    /// Check whether the coupon can be applied to `subtotal`.
    ///
    /// # Errors
    ///
    /// Returns `CouponIneligible` when the applicability flag is off or the
    /// subtotal is below `min_order_value`.
    pub fn eligibility(&self, subtotal: Money) -> Result<(), CouponIneligible> {
        if !self.is_applicable {
            return Err(CouponIneligible::NotApplicable);
        }
        if subtotal.amount < self.min_order_value {
            return Err(CouponIneligible::BelowMinimum {
                shortfall: Money::new(self.min_order_value - subtotal.amount, subtotal.currency_code),
            });
        }
        Ok(())
    }

    /// Discount for `subtotal`, never more than the subtotal itself.
    /// Zero when the coupon is ineligible.
    #[must_use]
    pub fn discount_for(&self, subtotal: Money) -> Money {
        if self.eligibility(subtotal).is_err() || subtotal.amount <= 0 {
            return Money::zero(subtotal.currency_code);
        }
        let raw = match self.kind {
            CouponKind::Percentage {
                percent,
                max_discount,
            } => {
                let pct = subtotal.amount.saturating_mul(i64::from(percent.min(100))) / 100;
                max_discount.map_or(pct, |cap| pct.min(cap))
            }
            CouponKind::Flat { amount } => amount.max(0),
        };
        Money::new(raw.min(subtotal.amount), subtotal.currency_code)
    }
}

/// Shipping fee rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRule {
    /// Fee in minor units charged below the threshold.
    pub flat_fee: i64,
    /// Subtotal (minor units) at or above which shipping is free.
    pub free_above: Option<i64>,
}

impl Default for ShippingRule {
    fn default() -> Self {
        Self {
            flat_fee: 4_900,
            free_above: Some(99_900),
        }
    }
}

/// Totals derived from the cart items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub item_count: u32,
    pub subtotal: Money,
    pub mrp_total: Money,
    /// `mrp_total - subtotal`.
    pub savings: Money,
    pub coupon_discount: Money,
    pub shipping: Money,
    pub total: Money,
    /// Set when a coupon was supplied but could not be applied.
    pub coupon_error: Option<CouponIneligible>,
}

impl OrderSummary {
    /// Recompute the summary from cart items.
    ///
    /// The currency is taken from the first item (INR for an empty cart).
    /// Items in other currencies are skipped.
    #[must_use]
    pub fn compute(items: &[CartItem], coupon: Option<&Coupon>, shipping: ShippingRule) -> Self {
        Self::compute_in(items, coupon, shipping, CurrencyCode::default())
    }

    /// Like [`OrderSummary::compute`], with `fallback` as the currency of an
    /// empty cart.
    #[must_use]
    pub fn compute_in(
        items: &[CartItem],
        coupon: Option<&Coupon>,
        shipping: ShippingRule,
        fallback: CurrencyCode,
    ) -> Self {
        let currency = items.first().map_or(fallback, |i| i.price.currency_code);

        let mut item_count: u32 = 0;
        let mut subtotal: i64 = 0;
        let mut mrp_total: i64 = 0;
        for item in items.iter().filter(|i| i.price.currency_code == currency) {
            item_count = item_count.saturating_add(item.quantity);
            subtotal = subtotal.saturating_add(item.line_total().amount);
            mrp_total = mrp_total.saturating_add(item.line_mrp_total().amount.max(item.line_total().amount));
        }

        let subtotal_money = Money::new(subtotal, currency);
        let (coupon_discount, coupon_error) = coupon.map_or((0, None), |c| {
            match c.eligibility(subtotal_money) {
                Ok(()) => (c.discount_for(subtotal_money).amount, None),
                Err(e) => (0, Some(e)),
            }
        });

        let shipping_fee = if item_count == 0
            || shipping.free_above.is_some_and(|threshold| subtotal >= threshold)
        {
            0
        } else {
            shipping.flat_fee
        };

        let total = subtotal
            .saturating_sub(coupon_discount)
            .saturating_add(shipping_fee);

        Self {
            item_count,
            subtotal: subtotal_money,
            mrp_total: Money::new(mrp_total, currency),
            savings: Money::new(mrp_total.saturating_sub(subtotal), currency),
            coupon_discount: Money::new(coupon_discount, currency),
            shipping: Money::new(shipping_fee, currency),
            total: Money::new(total, currency),
            coupon_error,
        }
    }

    /// Whether shipping is free for this summary.
    #[must_use]
    pub const fn has_free_shipping(&self) -> bool {
        self.shipping.amount == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn inr(amount: i64) -> Money {
        Money::new(amount, CurrencyCode::INR)
    }

    fn item(price: i64, mrp: i64, quantity: u32) -> CartItem {
        CartItem {
            variant_id: VariantId::generate(),
            title: "Item".to_string(),
            variant_title: None,
            thumbnail: None,
            price: inr(price),
            mrp: inr(mrp),
            quantity,
        }
    }

    fn percent_coupon(percent: u32, cap: Option<i64>, min: i64) -> Coupon {
        Coupon {
            code: "SAVE".to_string(),
            description: None,
            kind: CouponKind::Percentage {
                percent,
                max_discount: cap,
            },
            min_order_value: min,
            is_applicable: true,
        }
    }

    #[test]
    fn test_summary_totals() {
        let items = [item(349_900, 399_900, 1), item(49_900, 59_900, 2)];
        let summary = OrderSummary::compute(&items, None, ShippingRule::default());
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.subtotal, inr(449_700));
        assert_eq!(summary.mrp_total, inr(519_700));
        assert_eq!(summary.savings, inr(70_000));
        assert!(summary.has_free_shipping());
        assert_eq!(summary.total, inr(449_700));
    }

    #[test]
    fn test_summary_charges_shipping_below_threshold() {
        let summary = OrderSummary::compute(&[item(19_900, 19_900, 1)], None, ShippingRule::default());
        assert_eq!(summary.shipping, inr(4_900));
        assert_eq!(summary.total, inr(24_800));
    }

    #[test]
    fn test_empty_cart_has_no_shipping() {
        let summary = OrderSummary::compute(&[], None, ShippingRule::default());
        assert_eq!(summary.item_count, 0);
        assert_eq!(summary.total, inr(0));
    }

    #[test]
    fn test_percentage_coupon_is_capped() {
        let coupon = percent_coupon(20, Some(50_000), 0);
        let summary = OrderSummary::compute(&[item(500_000, 500_000, 1)], Some(&coupon), ShippingRule::default());
        assert_eq!(summary.coupon_discount, inr(50_000));
        assert_eq!(summary.total, inr(450_000));
    }

    #[test]
    fn test_coupon_below_minimum_reports_shortfall() {
        let coupon = percent_coupon(10, None, 100_000);
        let summary = OrderSummary::compute(&[item(60_000, 60_000, 1)], Some(&coupon), ShippingRule::default());
        assert_eq!(summary.coupon_discount, inr(0));
        assert_eq!(
            summary.coupon_error,
            Some(CouponIneligible::BelowMinimum { shortfall: inr(40_000) })
        );
    }

    #[test]
    fn test_not_applicable_coupon() {
        let mut coupon = percent_coupon(10, None, 0);
        coupon.is_applicable = false;
        assert_eq!(coupon.eligibility(inr(10_000)), Err(CouponIneligible::NotApplicable));
        assert_eq!(coupon.discount_for(inr(10_000)), inr(0));
    }

    #[test]
    fn test_flat_coupon_never_exceeds_subtotal() {
        let coupon = Coupon {
            code: "FLAT500".to_string(),
            description: None,
            kind: CouponKind::Flat { amount: 50_000 },
            min_order_value: 0,
            is_applicable: true,
        };
        assert_eq!(coupon.discount_for(inr(30_000)), inr(30_000));
    }

    #[test]
    fn test_empty_cart_uses_fallback_currency() {
        let summary = OrderSummary::compute_in(&[], None, ShippingRule::default(), CurrencyCode::USD);
        assert_eq!(summary.total, Money::new(0, CurrencyCode::USD));
        assert_eq!(summary.shipping.currency_code, CurrencyCode::USD);
    }

    #[test]
    fn test_item_currency_wins_over_fallback() {
        let summary =
            OrderSummary::compute_in(&[item(10_000, 10_000, 1)], None, ShippingRule::default(), CurrencyCode::USD);
        assert_eq!(summary.subtotal, inr(10_000));
    }

    #[test]
    fn test_huge_totals_saturate() {
        let rule = ShippingRule {
            flat_fee: 4_900,
            free_above: None,
        };
        let summary = OrderSummary::compute(&[item(i64::MAX, i64::MAX, 2)], None, rule);
        assert_eq!(summary.subtotal, inr(i64::MAX));
        assert_eq!(summary.total, inr(i64::MAX));
        assert_eq!(summary.savings, inr(0));
    }

    #[test]
    fn test_summary_serializes_coupon_error() {
        let coupon = percent_coupon(10, None, 100_000);
        let summary = OrderSummary::compute(&[item(60_000, 60_000, 1)], Some(&coupon), ShippingRule::default());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["coupon_error"]["reason"], "below_minimum");
        let back: OrderSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn test_shortfall_message() {
        let err = CouponIneligible::BelowMinimum { shortfall: inr(40_000) };
        assert_eq!(err.to_string(), "Add ₹400.00 more to use this coupon");
    }
}
