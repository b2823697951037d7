//! # Domain Types
//!
//! Catalog-side types shared by the basket, the catalog gate and the card.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │    Product      │   │    Serving      │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  id             │   │  Cone  "Külah"  │                              │
//! │  │  name           │   │  Cup "Bardakta" │                              │
//! │  │  price_kurus    │   └─────────────────┘                              │
//! │  │  unit           │                                                    │
//! │  │  image_url      │                                                    │
//! │  │  accent         │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

/// Catalog identifier of a product.
pub type ProductId = u32;

// =============================================================================
// Serving
// =============================================================================

/// How a product is served.
///
/// Part of a line item's identity: the same product in a cone and in a cup
/// are two different basket lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Serving {
    /// Served in a cone.
    #[default]
    #[serde(rename = "Külah")]
    Cone,
    /// Served in a cup.
    #[serde(rename = "Bardakta")]
    Cup,
}

impl Serving {
    /// Every serving option, in the order the card shows them.
    pub const ALL: [Serving; 2] = [Serving::Cone, Serving::Cup];

    /// The label shown to customers and used in messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Serving::Cone => "Külah",
            Serving::Cup => "Bardakta",
        }
    }
}

impl fmt::Display for Serving {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product offered by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    pub id: ProductId,

    /// Display name shown on the card and in the basket.
    pub name: String,

    /// Unit price in kuruş.
    pub price_kurus: i64,

    /// Sales unit shown next to the price, e.g. "top".
    pub unit: String,

    pub image_url: String,

    /// Background style class of the card's image area.
    #[serde(default)]
    pub accent: String,
}

impl Product {
    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_kurus(self.price_kurus)
    }

    /// Price label as printed on the card: `₺25 / top`.
    pub fn price_label(&self) -> String {
        self.price_label_with(crate::money::CURRENCY_SYMBOL)
    }

    /// [`Product::price_label`] with another currency symbol.
    pub fn price_label_with(&self, symbol: &str) -> String {
        format!("{} / {}", self.price().to_compact_string_with(symbol), self.unit)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
