//! # Catalog Gate
//!
//! Decides what the product section shows for a given catalog state.
//!
//! ```text
//! loading? ──yes──► Loading
//!    │no
//! error? ───yes──► Error(message)
//!    │no
//! empty? ───yes──► Empty ("Henüz ürün bulunmuyor")
//!    │no
//!    └────────────► Products (one card per product)
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Product, ProductId};

/// Shown when loading finished without any products.
pub const EMPTY_CATALOG_MESSAGE: &str = "Henüz ürün bulunmuyor";

/// Catalog state as delivered by whatever fetches products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogView {
    pub products: Vec<Product>,
    pub loading: bool,
    /// Opaque error text, displayed as-is.
    pub error: Option<String>,
}

/// What the product section renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogDisplay<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Products(&'a [Product]),
}

impl CatalogView {
    /// A catalog that is still being fetched.
    pub fn loading() -> Self {
        CatalogView {
            loading: true,
            ..Self::default()
        }
    }

    /// A catalog whose fetch failed.
    pub fn failed(message: impl Into<String>) -> Self {
        CatalogView {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// A loaded catalog.
    pub fn loaded(products: Vec<Product>) -> Self {
        CatalogView {
            products,
            ..Self::default()
        }
    }

    /// Applies the loading → error → empty → products precedence.
    pub fn display(&self) -> CatalogDisplay<'_> {
        if self.loading {
            return CatalogDisplay::Loading;
        }
        if let Some(message) = self.error.as_deref() {
            return CatalogDisplay::Error(message);
        }
        if self.products.is_empty() {
            return CatalogDisplay::Empty;
        }
        CatalogDisplay::Products(&self.products)
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
