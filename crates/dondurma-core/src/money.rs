//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing line totals as binary floats drifts:                           │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Kuruş                                            │
//! │    ₺12.50 is stored as 1250, basket totals are exact sums               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use dondurma_core::money::Money;
//!
//! let price = Money::from_kurus(1250); // ₺12.50
//! let doubled = price * 2;             // ₺25.00
//! assert_eq!(doubled.to_string(), "₺25.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// Currency symbol used by `Display`.
pub const CURRENCY_SYMBOL: &str = "₺";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in kuruş (1/100 of a Turkish lira).
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► LineItem.price ──► LineItem.total_price
///                                             │
///                                             ▼
///                                BasketState.total_amount ──► "₺40.00"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from kuruş.
    ///
    /// ```rust
    /// use dondurma_core::money::Money;
    ///
    /// assert_eq!(Money::from_kurus(1099).kurus(), 1099);
    /// ```
    #[inline]
    pub const fn from_kurus(kurus: i64) -> Self {
        Money(kurus)
    }

    /// Creates a Money value from lira and kuruş.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -₺5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Creates a Money value from whole lira.
    #[inline]
    pub const fn from_lira(lira: i64) -> Self {
        Money(lira * 100)
    }

    /// Returns the value in kuruş.
    #[inline]
    pub const fn kurus(&self) -> i64 {
        self.0
    }

    /// Returns the whole lira portion.
    #[inline]
    pub const fn lira(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the kuruş portion (always 0-99).
    #[inline]
    pub const fn kurus_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ```rust
    /// use dondurma_core::money::Money;
    ///
    /// let line_total = Money::from_kurus(299).multiply_quantity(3);
    /// assert_eq!(line_total.kurus(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Renders the amount without trailing zero decimals.
    ///
    /// This is how a catalog card prints a unit price:
    /// 2500 → `₺25`, 2550 → `₺25.5`, 2525 → `₺25.25`.
    pub fn to_compact_string(&self) -> String {
        self.to_compact_string_with(CURRENCY_SYMBOL)
    }

    /// [`Money::to_compact_string`] with another currency symbol.
    pub fn to_compact_string_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let major = self.lira().abs();
        let minor = self.kurus_part();

        match minor {
            0 => format!("{sign}{symbol}{major}"),
            m if m % 10 == 0 => format!("{sign}{symbol}{major}.{}", m / 10),
            m => format!("{sign}{symbol}{major}.{m:02}"),
        }
    }

    /// Two-decimal rendering with another currency symbol: `TL 12.50`.
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{sign}{symbol}{}.{:02}", self.lira().abs(), self.kurus_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Always two decimals: `₺12.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(CURRENCY_SYMBOL))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
