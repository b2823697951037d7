//! # Catalog Loading
//!
//! Reads the product catalog from a JSON file, or falls back to the
//! built-in seed products.
//!
//! ## File Format
//! ```json
//! [
//!   { "id": 1, "name": "Vanilyalı", "priceKurus": 2000, "unit": "top",
//!     "imageUrl": "/images/vanilla.png", "accent": "bg-yellow-100" }
//! ]
//! ```

use std::path::Path;

use dondurma_core::validation::validate_catalog;
use dondurma_core::{CoreError, Product};
use tracing::info;

use crate::error::ApiError;

/// Seed products: (name, price in kuruş, image, accent)
const SEED_PRODUCTS: &[(&str, i64, &str, &str)] = &[
    ("Vanilyalı", 2000, "/images/vanilla.png", "bg-yellow-100"),
    ("Çikolatalı", 2250, "/images/chocolate.png", "bg-amber-200"),
    ("Çilekli", 2000, "/images/strawberry.png", "bg-rose-100"),
    ("Fıstıklı", 3000, "/images/pistachio.png", "bg-green-100"),
    ("Limonlu", 1750, "/images/lemon.png", "bg-lime-100"),
];

/// Loads and validates a catalog file.
///
/// ## Errors
/// - `CATALOG_ERROR` if the file is unreadable or not valid JSON
/// - `VALIDATION_ERROR` if a product breaks a catalog rule
pub fn load_catalog(path: &Path) -> Result<Vec<Product>, ApiError> {
    let raw = std::fs::read_to_string(path)?;
    let products: Vec<Product> = serde_json::from_str(&raw)?;
    validate_catalog(&products).map_err(CoreError::from)?;

    info!(path = %path.display(), count = products.len(), "Catalog loaded");
    Ok(products)
}

/// The built-in catalog used when no file is configured.
pub fn seed_catalog() -> Vec<Product> {
    SEED_PRODUCTS
        .iter()
        .zip(1..)
        .map(|(&(name, price_kurus, image_url, accent), id)| Product {
            id,
            name: name.to_string(),
            price_kurus,
            unit: "top".to_string(),
            image_url: image_url.to_string(),
            accent: accent.to_string(),
        })
        .collect()
}
