//! # State Module
//!
//! Separate state types instead of one `AppState`: each command asks for
//! exactly the state it touches.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌─────────────┐ │
//! │  │ BasketStore  │  │ DrawerHandle │  │ CatalogState │  │ Storefront  │ │
//! │  │              │  │              │  │              │  │ Config      │ │
//! │  │ Arc<Mutex<   │  │ Arc<Mutex<   │  │ Arc<RwLock<  │  │             │ │
//! │  │  Basket      │  │  Drawer      │  │  Catalog     │  │ read-only   │ │
//! │  │ >>           │  │ >>           │  │ >>           │  │             │ │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └─────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod basket;
mod catalog;
mod config;
mod drawer;

pub use basket::BasketStore;
pub use catalog::CatalogState;
pub use config::{StorefrontConfig, DEFAULT_LOG_FILTER};
pub use drawer::DrawerHandle;
