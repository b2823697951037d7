//! # Catalog Commands
//!
//! What the category section renders for the current catalog state.

use dondurma_core::catalog::EMPTY_CATALOG_MESSAGE;
use dondurma_core::{CatalogDisplay, ProductCard, ProductId, Serving};
use serde::Serialize;
use tracing::debug;

use crate::state::{CatalogState, StorefrontConfig};

/// One card of the category section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCardDto {
    pub id: ProductId,
    pub name: String,
    /// `₺25 / top`
    pub price_label: String,
    pub image_url: String,
    pub accent: String,
    /// Serving preselected on a fresh card.
    pub selected_serving: Serving,
    pub servings: [Serving; 2],
}

impl ProductCardDto {
    pub fn new(card: &ProductCard, config: &StorefrontConfig) -> Self {
        let product = card.product();
        ProductCardDto {
            id: product.id,
            name: product.name.clone(),
            price_label: card.price_label_with(&config.currency_symbol),
            image_url: product.image_url.clone(),
            accent: product.accent.clone(),
            selected_serving: card.selected(),
            servings: Serving::ALL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum CatalogResponse {
    Loading,
    Error { message: String },
    Empty { message: String },
    Products { cards: Vec<ProductCardDto> },
}

/// Gets the category section contents.
pub fn get_catalog(catalog: &CatalogState, config: &StorefrontConfig) -> CatalogResponse {
    debug!("get_catalog command");

    catalog.with_view(|view| match view.display() {
        CatalogDisplay::Loading => CatalogResponse::Loading,
        CatalogDisplay::Error(message) => CatalogResponse::Error {
            message: message.to_string(),
        },
        CatalogDisplay::Empty => CatalogResponse::Empty {
            message: EMPTY_CATALOG_MESSAGE.to_string(),
        },
        CatalogDisplay::Products(products) => CatalogResponse::Products {
            cards: products
                .iter()
                .filter_map(|p| ProductCard::new(Some(p.clone())))
                .map(|card| ProductCardDto::new(&card, config))
                .collect(),
        },
    })
}
