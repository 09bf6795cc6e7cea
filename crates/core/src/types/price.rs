//! Type-safe money representation.
//!
//! Amounts are stored in the currency's minor unit (paise, cents, pence) as
//! an `i64`. Conversion to a decimal major-unit value goes through
//! `rust_decimal` so display never touches floating point.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::status::ParseEnumError;

/// Errors from money arithmetic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        left: CurrencyCode,
        right: CurrencyCode,
    },
    #[error("money arithmetic overflowed")]
    Overflow,
}

/// An amount of money in a specific currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's minor unit (e.g., paise for INR).
    pub amount: i64,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: CurrencyCode,
}

impl Money {
    /// Create a new amount from minor units.
    #[must_use]
    pub const fn new(amount: i64, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(0, currency_code)
    }

    /// Amount in minor units.
    #[must_use]
    pub const fn minor_units(&self) -> i64 {
        self.amount
    }

    /// Amount in major units as a decimal (e.g., `3499.00`).
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.amount, 2)
    }

    /// Add two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError` on currency mismatch or overflow.
    pub fn checked_add(self, other: Self) -> Result<Self, MoneyError> {
        self.same_currency(other)?;
        self.amount
            .checked_add(other.amount)
            .map(|amount| Self::new(amount, self.currency_code))
            .ok_or(MoneyError::Overflow)
    }

    /// Subtract an amount of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError` on currency mismatch or overflow.
    pub fn checked_sub(self, other: Self) -> Result<Self, MoneyError> {
        self.same_currency(other)?;
        self.amount
            .checked_sub(other.amount)
            .map(|amount| Self::new(amount, self.currency_code))
            .ok_or(MoneyError::Overflow)
    }

    /// Multiply by a quantity, saturating at the `i64` bounds.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(
            self.amount.saturating_mul(i64::from(quantity)),
            self.currency_code,
        )
    }

    /// Format for display, e.g. `₹3,499.00` or `-$5.50`.
    #[must_use]
    pub fn display(&self) -> String {
        let decimal = self.to_decimal().abs().round_dp(2);
        let text = format!("{decimal:.2}");
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        let sign = if self.amount < 0 { "-" } else { "" };
        format!(
            "{sign}{}{}.{fraction}",
            self.currency_code.symbol(),
            group_thousands(whole)
        )
    }

    fn same_currency(self, other: Self) -> Result<(), MoneyError> {
        if self.currency_code == other.currency_code {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.currency_code,
                right: other.currency_code,
            })
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Display symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::INR => "₹",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// Three-letter code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::INR => "INR",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INR" => Ok(Self::INR),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            _ => Err(ParseEnumError::new("currency", s)),
        }
    }
}
