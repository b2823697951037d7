//! # dondurma-core: Pure Basket Logic for the Dondurma Storefront
//!
//! All storefront state transitions as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Dondurma Storefront Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front-end                                    │   │
//! │  │    Category Section ──► Product Card ──► Basket Drawer          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Storefront commands (app)                    │   │
//! │  │    add_to_basket, remove_from_basket, confirm_order, etc.       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ dondurma-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  basket  │ │ catalog  │ │   card   │ │  notify  │          │   │
//! │  │   │ reducer  │ │   gate   │ │ serving  │ │ Notifier │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCKS • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`basket`] - Basket reducer (line items, totals)
//! - [`catalog`] - Loading / error / empty / products precedence
//! - [`card`] - Serving selection on a product card
//! - [`drawer`] - Basket drawer state and labels
//! - [`notify`] - Fire-and-forget notification sink
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Product and Serving
//! - [`validation`] - Catalog record rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use dondurma_core::{BasketState, Money, Product, Serving};
//!
//! let cone = Product {
//!     id: 1,
//!     name: "Külah".to_string(),
//!     price_kurus: 1000,
//!     unit: "top".to_string(),
//!     image_url: "/cone.png".to_string(),
//!     accent: String::new(),
//! };
//!
//! let mut basket = BasketState::new();
//! basket.add_item(&cone, Serving::Cone);
//! basket.add_item(&cone, Serving::Cone);
//!
//! assert_eq!(basket.items()[0].quantity, 2);
//! assert_eq!(basket.total_amount(), Money::from_lira(20));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod card;
pub mod catalog;
pub mod drawer;
pub mod error;
pub mod money;
pub mod notify;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basket::{reduce, BasketAction, BasketOutcome, BasketState, ConfirmedOrder, LineItem, LineKey};
pub use card::ProductCard;
pub use catalog::{CatalogDisplay, CatalogView};
pub use drawer::DrawerState;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use notify::{Notification, Notifier, RecordingNotifier};
pub use types::*;
