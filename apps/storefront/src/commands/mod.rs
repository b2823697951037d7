//! # Commands Module
//!
//! Everything the front-end can ask the storefront to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (command enum, exports)
//! ├── basket.rs   ◄─── Basket manipulation, order confirmation
//! ├── catalog.rs  ◄─── Category section contents
//! └── drawer.rs   ◄─── Drawer open/close
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the drawer
//! fn open_drawer(drawer: &DrawerHandle)
//!
//! // Needs the catalog to resolve the product
//! fn add_to_basket(store: &BasketStore, catalog: &CatalogState, config: &StorefrontConfig, notifier: &dyn Notifier, ...)
//!
//! // Closes the drawer on success
//! fn confirm_order(store: &BasketStore, drawer: &DrawerHandle, config: &StorefrontConfig, notifier: &dyn Notifier)
//! ```

pub mod basket;
pub mod catalog;
pub mod drawer;

use dondurma_core::{ProductId, Serving};
use serde::{Deserialize, Serialize};

use basket::{BasketResponse, OrderReceipt};
use catalog::CatalogResponse;
use drawer::DrawerResponse;

/// A command as sent by the front-end (or read from a script file).
///
/// ```json
/// { "command": "add_to_basket", "productId": 1, "serving": "Külah" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum StorefrontCommand {
    GetCatalog,
    GetBasket,
    AddToBasket { product_id: ProductId, serving: Serving },
    IncreaseQuantity { product_id: ProductId, serving: Serving },
    DecreaseQuantity { product_id: ProductId, serving: Serving },
    RemoveFromBasket { product_id: ProductId, serving: Serving },
    ConfirmOrder,
    OpenDrawer,
    CloseDrawer,
}

/// What a dispatched command returned.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum CommandResult {
    Catalog(CatalogResponse),
    Basket(BasketResponse),
    Receipt(OrderReceipt),
    Drawer(DrawerResponse),
}
