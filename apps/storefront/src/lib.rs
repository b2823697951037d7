//! # Dondurma Storefront Library
//!
//! Storefront application layer: shared state, commands and notifiers on top
//! of `dondurma-core`.
//!
//! ## Module Organization
//! ```text
//! dondurma_storefront/
//! ├── lib.rs          ◄─── You are here (Storefront, startup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── basket.rs   ◄─── Basket store handle
//! │   ├── catalog.rs  ◄─── Catalog state
//! │   ├── config.rs   ◄─── Configuration
//! │   └── drawer.rs   ◄─── Drawer open/closed handle
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command enum
//! │   ├── basket.rs   ◄─── Basket commands
//! │   ├── catalog.rs  ◄─── Catalog commands
//! │   └── drawer.rs   ◄─── Drawer commands
//! ├── catalog.rs      ◄─── Catalog file loading, seed products
//! ├── notify.rs       ◄─── Tracing and channel notifiers
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod catalog;
pub mod commands;
pub mod error;
pub mod notify;
pub mod state;

use std::path::Path;

use dondurma_core::Notifier;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::basket::{
    add_to_basket, confirm_order, decrease_quantity, get_basket, increase_quantity,
    remove_from_basket,
};
use commands::catalog::get_catalog;
use commands::drawer::{close_drawer, open_drawer};
use commands::{CommandResult, StorefrontCommand};
use error::ApiError;
use state::{BasketStore, CatalogState, DrawerHandle, StorefrontConfig};

/// One storefront session: its own basket, drawer and catalog, plus the
/// notifier messages go to.
pub struct Storefront {
    pub basket: BasketStore,
    pub drawer: DrawerHandle,
    pub catalog: CatalogState,
    pub config: StorefrontConfig,
    notifier: Box<dyn Notifier>,
}

impl Storefront {
    pub fn new(config: StorefrontConfig, catalog: CatalogState, notifier: Box<dyn Notifier>) -> Self {
        Storefront {
            basket: BasketStore::new(),
            drawer: DrawerHandle::new(),
            catalog,
            config,
            notifier,
        }
    }

    /// Routes a command to its handler.
    pub fn dispatch(&self, command: StorefrontCommand) -> Result<CommandResult, ApiError> {
        let notifier = self.notifier.as_ref();
        let config = &self.config;

        let result = match command {
            StorefrontCommand::GetCatalog => {
                CommandResult::Catalog(get_catalog(&self.catalog, config))
            }
            StorefrontCommand::GetBasket => CommandResult::Basket(get_basket(&self.basket, config)),
            StorefrontCommand::AddToBasket {
                product_id,
                serving,
            } => CommandResult::Basket(add_to_basket(
                &self.basket,
                &self.catalog,
                config,
                notifier,
                product_id,
                serving,
            )?),
            StorefrontCommand::IncreaseQuantity {
                product_id,
                serving,
            } => {
                CommandResult::Basket(increase_quantity(&self.basket, config, product_id, serving))
            }
            StorefrontCommand::DecreaseQuantity {
                product_id,
                serving,
            } => {
                CommandResult::Basket(decrease_quantity(&self.basket, config, product_id, serving))
            }
            StorefrontCommand::RemoveFromBasket {
                product_id,
                serving,
            } => CommandResult::Basket(remove_from_basket(
                &self.basket,
                config,
                notifier,
                product_id,
                serving,
            )),
            StorefrontCommand::ConfirmOrder => {
                CommandResult::Receipt(confirm_order(&self.basket, &self.drawer, config, notifier))
            }
            StorefrontCommand::OpenDrawer => CommandResult::Drawer(open_drawer(&self.drawer)),
            StorefrontCommand::CloseDrawer => CommandResult::Drawer(close_drawer(&self.drawer)),
        };

        Ok(result)
    }
}

/// Runs a scripted session.
///
/// ## Startup Sequence
/// 1. Initialize tracing (`RUST_LOG` or the configured default)
/// 2. Load configuration from `DONDURMA_*` variables
/// 3. Load the catalog file, or the seed catalog when none is configured
/// 4. Replay the commands in `script` (a JSON array of commands), if given
/// 5. Print the final basket as JSON on stdout
pub fn run(script: Option<&Path>) -> Result<(), ApiError> {
    let config = StorefrontConfig::from_env();
    init_tracing(&config.log_filter);

    info!(store = %config.store_name, "Starting storefront");

    let catalog_state = CatalogState::new();
    match &config.catalog_path {
        Some(path) => match catalog::load_catalog(path) {
            Ok(products) => catalog_state.set_loaded(products),
            Err(err) => {
                warn!(%err, "Catalog could not be loaded");
                catalog_state.set_failed(err.message);
            }
        },
        None => catalog_state.set_loaded(catalog::seed_catalog()),
    }

    let storefront = Storefront::new(config, catalog_state, Box::new(notify::TracingNotifier));

    if let Some(path) = script {
        let raw = std::fs::read_to_string(path)?;
        let commands: Vec<StorefrontCommand> = serde_json::from_str(&raw)?;
        info!(count = commands.len(), "Replaying commands");

        for command in commands {
            if let Err(err) = storefront.dispatch(command.clone()) {
                warn!(?command, %err, "Command failed");
            }
        }
    }

    let basket = get_basket(&storefront.basket, &storefront.config);
    info!(
        total_quantity = basket.totals.total_quantity,
        total = %basket.totals.total_amount_label,
        "Session finished"
    );

    let json = serde_json::to_string_pretty(&basket)
        .map_err(|e| ApiError::internal(format!("Basket could not be serialized: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=dondurma_core=trace` - Trace for one crate only
/// - Default: `fallback`
fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed (tests, embedding apps).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use dondurma_core::{Money, Notification, RecordingNotifier, Serving};
    use std::sync::Arc;

    fn storefront() -> (Storefront, Arc<RecordingNotifier>) {
        let catalog_state = CatalogState::new();
        catalog_state.set_loaded(catalog::seed_catalog());
        let recorder = Arc::new(RecordingNotifier::new());
        let storefront = Storefront::new(
            StorefrontConfig::default(),
            catalog_state,
            Box::new(Arc::clone(&recorder)),
        );
        (storefront, recorder)
    }

    #[test]
    fn test_scripted_session() {
        let (storefront, recorder) = storefront();
        let script = r#"[
            { "command": "open_drawer" },
            { "command": "add_to_basket", "productId": 1, "serving": "Külah" },
            { "command": "add_to_basket", "productId": 1, "serving": "Külah" },
            { "command": "add_to_basket", "productId": 2, "serving": "Bardakta" },
            { "command": "increase_quantity", "productId": 2, "serving": "Bardakta" },
            { "command": "decrease_quantity", "productId": 1, "serving": "Külah" },
            { "command": "remove_from_basket", "productId": 1, "serving": "Külah" }
        ]"#;
        let commands: Vec<StorefrontCommand> = serde_json::from_str(script).unwrap();

        for command in commands {
            storefront.dispatch(command).unwrap();
        }

        let basket = storefront.basket.snapshot();
        assert_eq!(basket.line_count(), 1);
        assert_eq!(basket.total_quantity(), 2);
        assert_eq!(basket.total_amount(), Money::from_kurus(4500));
        assert!(storefront.drawer.is_open());
        assert_eq!(
            recorder.count(&Notification::Info("Ürün sepetten çıkarıldı".to_string())),
            1
        );
    }

    #[test]
    fn test_confirm_closes_drawer() {
        let (storefront, recorder) = storefront();
        storefront.dispatch(StorefrontCommand::OpenDrawer).unwrap();
        storefront
            .dispatch(StorefrontCommand::AddToBasket {
                product_id: 3,
                serving: Serving::Cup,
            })
            .unwrap();

        let result = storefront.dispatch(StorefrontCommand::ConfirmOrder).unwrap();

        let CommandResult::Receipt(receipt) = result else {
            panic!("expected a receipt");
        };
        assert_eq!(receipt.total_quantity, 1);
        assert!(storefront.basket.snapshot().is_empty());
        assert!(!storefront.drawer.is_open());
        assert_eq!(
            recorder.sent().last(),
            Some(&Notification::Success("Siparişiniz alındı! Teşekkür ederiz 🎉".to_string()))
        );
    }

    #[test]
    fn test_unknown_product_is_an_error() {
        let (storefront, recorder) = storefront();

        let err = storefront
            .dispatch(StorefrontCommand::AddToBasket {
                product_id: 404,
                serving: Serving::Cone,
            })
            .unwrap_err();

        assert_eq!(err.code, error::ErrorCode::NotFound);
        assert!(recorder.sent().is_empty());
    }
}
