//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`DONDURMA_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use dondurma_core::{Money, Product};
use serde::{Deserialize, Serialize};

/// Default `tracing` filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,dondurma_core=debug,dondurma_storefront=debug";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontConfig {
    /// Store name shown in the header
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// JSON file with the product catalog. `None` uses the built-in seed.
    pub catalog_path: Option<PathBuf>,

    /// Fallback log filter
    pub log_filter: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            store_name: "Dondurma Dükkanı".to_string(),
            currency_symbol: dondurma_core::money::CURRENCY_SYMBOL.to_string(),
            catalog_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `DONDURMA_STORE_NAME`: Override store name
    /// - `DONDURMA_CATALOG_PATH`: Load the catalog from this JSON file
    /// - `DONDURMA_CURRENCY_SYMBOL`: Override currency symbol
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StorefrontConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StorefrontConfig::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(store_name) = non_empty("DONDURMA_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(path) = non_empty("DONDURMA_CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(symbol) = non_empty("DONDURMA_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats an amount with the configured symbol: `₺12.34`.
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol)
    }

    /// Card price label with the configured symbol: `₺25 / top`.
    pub fn format_price_label(&self, product: &Product) -> String {
        product.price_label_with(&self.currency_symbol)
    }
}
