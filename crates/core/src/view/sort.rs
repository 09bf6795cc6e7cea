//! Column sort state and the click-to-toggle rule.

use serde::{Deserialize, Serialize};

use crate::types::status::{ParseEnumError, keyed_enum};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

keyed_enum!(SortDirection, "sort direction", [
    (Asc, "asc", "Ascending"),
    (Desc, "desc", "Descending"),
]);

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Current sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState<F> {
    pub field: Option<F>,
    #[serde(default)]
    pub direction: SortDirection,
}

impl<F> Default for SortState<F> {
    fn default() -> Self {
        Self {
            field: None,
            direction: SortDirection::Asc,
        }
    }
}

impl<F: Copy + PartialEq> SortState<F> {
    /// Sort by `field` in `direction`.
    #[must_use]
    pub const fn by(field: F, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }

    /// State after the user clicks the header for `field`.
    ///
    /// Clicking the active column flips the direction. Clicking any other
    /// column selects it ascending.
    #[must_use]
    pub fn toggled(self, field: F) -> Self {
        if self.field == Some(field) {
            Self {
                field: Some(field),
                direction: self.direction.flipped(),
            }
        } else {
            Self::by(field, SortDirection::Asc)
        }
    }

    /// Direction for `field` if it is the active column.
    #[must_use]
    pub fn direction_for(&self, field: F) -> Option<SortDirection> {
        (self.field == Some(field)).then_some(self.direction)
    }
}

/// Sortable columns of the orders table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSortField {
    PlacedAt,
    Number,
    Customer,
    Total,
    Status,
}

keyed_enum!(OrderSortField, "order sort field", [
    (PlacedAt, "placed_at", "Date"),
    (Number, "number", "Order"),
    (Customer, "customer", "Customer"),
    (Total, "total", "Total"),
    (Status, "status", "Status"),
]);

/// Sortable columns of the products list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSortField {
    Title,
    Price,
    Stock,
    CreatedAt,
}

keyed_enum!(ProductSortField, "product sort field", [
    (Title, "title", "Product"),
    (Price, "price", "Price"),
    (Stock, "stock", "Stock"),
    (CreatedAt, "created_at", "Created"),
]);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_clicking_active_column_flips_direction() {
        let state = SortState::by(OrderSortField::Total, SortDirection::Asc);
        assert_eq!(
            state.toggled(OrderSortField::Total),
            SortState::by(OrderSortField::Total, SortDirection::Desc)
        );
        assert_eq!(
            state.toggled(OrderSortField::Total).toggled(OrderSortField::Total),
            state
        );
    }

    #[test]
    fn test_clicking_other_column_resets_to_asc() {
        let state = SortState::by(OrderSortField::Total, SortDirection::Asc);
        assert_eq!(
            state.toggled(OrderSortField::Status),
            SortState::by(OrderSortField::Status, SortDirection::Asc)
        );

        let desc = SortState::by(OrderSortField::Total, SortDirection::Desc);
        assert_eq!(
            desc.toggled(OrderSortField::Status).direction,
            SortDirection::Asc
        );
    }

    #[test]
    fn test_first_click_on_unsorted_table() {
        let state = SortState::<ProductSortField>::default();
        assert_eq!(
            state.toggled(ProductSortField::Price),
            SortState::by(ProductSortField::Price, SortDirection::Asc)
        );
    }

    #[test]
    fn test_direction_for() {
        let state = SortState::by(OrderSortField::Total, SortDirection::Desc);
        assert_eq!(state.direction_for(OrderSortField::Total), Some(SortDirection::Desc));
        assert_eq!(state.direction_for(OrderSortField::Status), None);
    }

    #[test]
    fn test_sort_field_keys() {
        assert_eq!("total".parse::<OrderSortField>().unwrap(), OrderSortField::Total);
        assert_eq!(ProductSortField::CreatedAt.as_str(), "created_at");
    }
}
