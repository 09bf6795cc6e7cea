//! Filter state for the order and product lists.
//!
//! Filters are plain records owned by the parent. Components emit partial
//! patches; the owner merges them with [`OrderFilters::merged`] /
//! [`ProductFilters::merged`] and re-derives pagination.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::status::{ParseEnumError, keyed_enum};
use crate::types::{CategoryId, OrderStatus, PaymentStatus, StockStatus};

use super::sort::{OrderSortField, ProductSortField, SortDirection, SortState};

/// Quick-select date range shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatePreset {
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "7days")]
    Last7Days,
    #[serde(rename = "30days")]
    Last30Days,
    #[serde(rename = "custom")]
    Custom,
}

keyed_enum!(DatePreset, "date preset", [
    (Today, "today", "Today"),
    (Last7Days, "7days", "Last 7 days"),
    (Last30Days, "30days", "Last 30 days"),
    (Custom, "custom", "Custom range"),
]);

impl DatePreset {
    /// Concrete bounds for this preset relative to `today`.
    ///
    /// `Custom` returns `None`: its bounds come from the date pickers.
    #[must_use]
    pub fn resolve(self, today: NaiveDate) -> Option<DateRange> {
        let days_back = match self {
            Self::Today => 0,
            Self::Last7Days => 7,
            Self::Last30Days => 30,
            Self::Custom => return None,
        };
        let from = today.checked_sub_days(Days::new(days_back)).unwrap_or(NaiveDate::MIN);
        Some(DateRange { from, to: today })
    }
}

/// Inclusive date bounds. Serializes as ISO `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Whether `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Current filter selections for the orders table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderFilters {
    pub search: String,
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub date_preset: Option<DatePreset>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub sort: SortState<OrderSortField>,
}

impl Default for OrderFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            payment_status: None,
            date_preset: None,
            date_from: None,
            date_to: None,
            sort: SortState::by(OrderSortField::PlacedAt, SortDirection::Desc),
        }
    }
}

/// Partial update to [`OrderFilters`].
///
/// `None` leaves a field untouched; `Some(None)` clears a clearable field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFilterPatch {
    pub search: Option<String>,
    pub status: Option<Option<OrderStatus>>,
    pub payment_status: Option<Option<PaymentStatus>>,
    pub date_preset: Option<Option<DatePreset>>,
    pub date_from: Option<Option<NaiveDate>>,
    pub date_to: Option<Option<NaiveDate>>,
    pub sort: Option<SortState<OrderSortField>>,
}

impl OrderFilterPatch {
    /// Change the search text.
    #[must_use]
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Self::default()
        }
    }

    /// Change (or clear) the status filter.
    #[must_use]
    pub fn status(status: Option<OrderStatus>) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Change (or clear) the payment status filter.
    #[must_use]
    pub fn payment_status(status: Option<PaymentStatus>) -> Self {
        Self {
            payment_status: Some(status),
            ..Self::default()
        }
    }

    /// Select a date preset. Known presets carry concrete bounds computed
    /// from `today`; `Custom` only switches the preset and leaves the bounds
    /// to manual input.
    #[must_use]
    pub fn date_preset(preset: DatePreset, today: NaiveDate) -> Self {
        let bounds = preset.resolve(today);
        Self {
            date_preset: Some(Some(preset)),
            date_from: bounds.map(|r| Some(r.from)),
            date_to: bounds.map(|r| Some(r.to)),
            ..Self::default()
        }
    }

    /// Manual bounds from the date pickers.
    #[must_use]
    pub fn custom_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            date_preset: Some(Some(DatePreset::Custom)),
            date_from: Some(from),
            date_to: Some(to),
            ..Self::default()
        }
    }

    /// Change the sort.
    #[must_use]
    pub fn sort(sort: SortState<OrderSortField>) -> Self {
        Self {
            sort: Some(sort),
            ..Self::default()
        }
    }

    /// Clear every filter, keeping the sort.
    #[must_use]
    pub fn clear() -> Self {
        Self {
            search: Some(String::new()),
            status: Some(None),
            payment_status: Some(None),
            date_preset: Some(None),
            date_from: Some(None),
            date_to: Some(None),
            sort: None,
        }
    }

    /// Whether this patch changes anything other than the sort.
    #[must_use]
    pub const fn touches_filters(&self) -> bool {
        self.search.is_some()
            || self.status.is_some()
            || self.payment_status.is_some()
            || self.date_preset.is_some()
            || self.date_from.is_some()
            || self.date_to.is_some()
    }
}

impl OrderFilters {
    /// Apply a patch, returning the merged filters.
    #[must_use]
    pub fn merged(mut self, patch: OrderFilterPatch) -> Self {
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(payment_status) = patch.payment_status {
            self.payment_status = payment_status;
        }
        if let Some(preset) = patch.date_preset {
            self.date_preset = preset;
        }
        if let Some(from) = patch.date_from {
            self.date_from = from;
        }
        if let Some(to) = patch.date_to {
            self.date_to = to;
        }
        if let Some(sort) = patch.sort {
            self.sort = sort;
        }
        self
    }

    /// Number of non-sort filters currently set.
    #[must_use]
    pub fn active_count(&self) -> usize {
        [
            !self.search.trim().is_empty(),
            self.status.is_some(),
            self.payment_status.is_some(),
            self.date_from.is_some() || self.date_to.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Whether any non-sort filter is set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }
}

/// Current filter selections for the products list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFilters {
    pub search: String,
    pub category: Option<CategoryId>,
    pub stock_status: Option<StockStatus>,
    pub published: Option<bool>,
    pub sort: SortState<ProductSortField>,
}

/// Partial update to [`ProductFilters`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilterPatch {
    pub search: Option<String>,
    pub category: Option<Option<CategoryId>>,
    pub stock_status: Option<Option<StockStatus>>,
    pub published: Option<Option<bool>>,
    pub sort: Option<SortState<ProductSortField>>,
}

impl ProductFilterPatch {
    #[must_use]
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn category(category: Option<CategoryId>) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn stock_status(status: Option<StockStatus>) -> Self {
        Self {
            stock_status: Some(status),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn published(published: Option<bool>) -> Self {
        Self {
            published: Some(published),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn sort(sort: SortState<ProductSortField>) -> Self {
        Self {
            sort: Some(sort),
            ..Self::default()
        }
    }

    /// Clear every filter, keeping the sort.
    #[must_use]
    pub fn clear() -> Self {
        Self {
            search: Some(String::new()),
            category: Some(None),
            stock_status: Some(None),
            published: Some(None),
            sort: None,
        }
    }

    #[must_use]
    pub const fn touches_filters(&self) -> bool {
        self.search.is_some()
            || self.category.is_some()
            || self.stock_status.is_some()
            || self.published.is_some()
    }
}

impl ProductFilters {
    /// Apply a patch, returning the merged filters.
    #[must_use]
    pub fn merged(mut self, patch: ProductFilterPatch) -> Self {
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(stock_status) = patch.stock_status {
            self.stock_status = stock_status;
        }
        if let Some(published) = patch.published {
            self.published = published;
        }
        if let Some(sort) = patch.sort {
            self.sort = sort;
        }
        self
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        [
            !self.search.trim().is_empty(),
            self.category.is_some(),
            self.stock_status.is_some(),
            self.published.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }
}
