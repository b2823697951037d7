//! # Basket Commands
//!
//! One command per basket operation. Each applies the transition, fires the
//! matching notification and returns the updated basket.
//!
//! ## Basket Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐      ┌──────────┐      ┌──────────┐                       │
//! │  │  Empty   │─────►│ In Basket│─────►│ Confirmed│──► (back to empty)    │
//! │  └──────────┘      └──────────┘      └──────────┘                       │
//! │               add_to_basket     confirm_order                           │
//! │               increase_quantity                                         │
//! │               decrease_quantity                                         │
//! │               remove_from_basket                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Notifications
//! | Command              | Notification                                   |
//! |----------------------|------------------------------------------------|
//! | `add_to_basket`      | success `"{name} sepete eklendi! ({serving})"` |
//! | `remove_from_basket` | info `"Ürün sepetten çıkarıldı"`               |
//! | `confirm_order`      | success `"Siparişiniz alındı! Teşekkür ederiz 🎉"` |

use chrono::{DateTime, Utc};
use dondurma_core::drawer::{
    decrease_label, empty_basket_message, increase_label, item_count_label, remove_label,
    total_amount_label,
};
use dondurma_core::notify::{item_added_message, ITEM_REMOVED_MESSAGE, ORDER_CONFIRMED_MESSAGE};
use dondurma_core::{
    BasketOutcome, BasketState, CoreError, LineItem, LineKey, Money, Notifier, ProductId, Serving,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{BasketStore, CatalogState, DrawerHandle, StorefrontConfig};

/// Basket response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketResponse {
    pub items: Vec<LineItem>,
    /// Button names for each line, in `items` order.
    pub controls: Vec<LineControls>,
    pub totals: BasketTotals,
    /// `Sepetiniz boş` while there are no lines.
    pub empty_message: Option<String>,
}

/// Accessible names of one drawer line's controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineControls {
    pub key: LineKey,
    /// `₺40.00`
    pub total_price_label: String,
    /// `1-Külah miktarını artır`
    pub increase_label: String,
    /// `1-Külah miktarını azalt`
    pub decrease_label: String,
    /// `1-Külah ürününü sepetten çıkar`
    pub remove_label: String,
}

/// Basket aggregates plus the labels the drawer prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketTotals {
    pub line_count: usize,
    pub total_quantity: u32,
    pub total_amount: Money,
    /// `(3 ürün)`
    pub item_count_label: String,
    /// `₺55.00`
    pub total_amount_label: String,
}

impl BasketResponse {
    /// Snapshot of `basket`, with amounts in the configured currency.
    pub fn new(basket: &BasketState, config: &StorefrontConfig) -> Self {
        let controls = basket
            .items()
            .iter()
            .map(|item| {
                let key = item.key();
                LineControls {
                    key,
                    total_price_label: config.format_currency(item.total_price),
                    increase_label: increase_label(&key),
                    decrease_label: decrease_label(&key),
                    remove_label: remove_label(&key),
                }
            })
            .collect();

        BasketResponse {
            items: basket.items().to_vec(),
            controls,
            totals: BasketTotals {
                line_count: basket.line_count(),
                total_quantity: basket.total_quantity(),
                total_amount: basket.total_amount(),
                item_count_label: item_count_label(basket),
                total_amount_label: total_amount_label(basket, &config.currency_symbol),
            },
            empty_message: empty_basket_message(basket).map(str::to_string),
        }
    }
}

/// Receipt of a confirmed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub confirmed_at: DateTime<Utc>,
    pub items: Vec<LineItem>,
    pub total_quantity: u32,
    pub total_amount: Money,
    /// The basket after confirmation (always empty).
    pub basket: BasketResponse,
}

/// Gets the current basket contents.
pub fn get_basket(store: &BasketStore, config: &StorefrontConfig) -> BasketResponse {
    debug!("get_basket command");
    store.with_basket(|b| BasketResponse::new(b, config))
}

/// Adds a catalog product with the chosen serving.
///
/// ## Behavior
/// - Same product and serving already in the basket: quantity increases
/// - Otherwise: a new line with quantity 1
///
/// ## Errors
/// `NOT_FOUND` if the catalog has no such product. The basket is untouched.
pub fn add_to_basket(
    store: &BasketStore,
    catalog: &CatalogState,
    config: &StorefrontConfig,
    notifier: &dyn Notifier,
    product_id: ProductId,
    serving: Serving,
) -> Result<BasketResponse, ApiError> {
    debug!(product_id, %serving, "add_to_basket command");

    let product = catalog
        .product(product_id)
        .ok_or(CoreError::ProductNotFound(product_id))?;

    let (outcome, response) = store.with_basket_mut(|b| {
        let outcome = b.add_item(&product, serving);
        (outcome, BasketResponse::new(b, config))
    });
    debug!(?outcome, "item added");

    notifier.success(&item_added_message(&product.name, serving));
    Ok(response)
}

/// Adds one unit to a line. Unknown lines are left alone.
pub fn increase_quantity(
    store: &BasketStore,
    config: &StorefrontConfig,
    product_id: ProductId,
    serving: Serving,
) -> BasketResponse {
    debug!(product_id, %serving, "increase_quantity command");
    apply(store, config, |b| b.increase_quantity(LineKey::new(product_id, serving))).1
}

/// Takes one unit off a line, dropping it at zero. Unknown lines are left
/// alone.
pub fn decrease_quantity(
    store: &BasketStore,
    config: &StorefrontConfig,
    product_id: ProductId,
    serving: Serving,
) -> BasketResponse {
    debug!(product_id, %serving, "decrease_quantity command");
    apply(store, config, |b| b.decrease_quantity(LineKey::new(product_id, serving))).1
}

/// Removes a line regardless of quantity.
///
/// The info notification fires only when a line actually left the basket.
pub fn remove_from_basket(
    store: &BasketStore,
    config: &StorefrontConfig,
    notifier: &dyn Notifier,
    product_id: ProductId,
    serving: Serving,
) -> BasketResponse {
    debug!(product_id, %serving, "remove_from_basket command");

    let (outcome, response) = apply(store, config, |b| b.remove_item(LineKey::new(product_id, serving)));
    if let BasketOutcome::Removed { .. } = outcome {
        notifier.info(ITEM_REMOVED_MESSAGE);
    }
    response
}

/// Confirms the order: the basket empties, the drawer closes and the
/// customer is thanked.
pub fn confirm_order(
    store: &BasketStore,
    drawer: &DrawerHandle,
    config: &StorefrontConfig,
    notifier: &dyn Notifier,
) -> OrderReceipt {
    debug!("confirm_order command");

    let (order, basket) = store.with_basket_mut(|b| {
        let order = b.take_order();
        (order, BasketResponse::new(b, config))
    });

    let receipt = OrderReceipt {
        order_id: Uuid::new_v4(),
        confirmed_at: Utc::now(),
        items: order.items,
        total_quantity: order.total_quantity,
        total_amount: order.total_amount,
        basket,
    };
    info!(
        order_id = %receipt.order_id,
        total_quantity = receipt.total_quantity,
        total_amount = %config.format_currency(receipt.total_amount),
        "Order confirmed"
    );

    notifier.success(ORDER_CONFIRMED_MESSAGE);
    drawer.close();
    receipt
}

fn apply<F>(store: &BasketStore, config: &StorefrontConfig, f: F) -> (BasketOutcome, BasketResponse)
where
    F: FnOnce(&mut BasketState) -> BasketOutcome,
{
    store.with_basket_mut(|b| {
        let outcome = f(b);
        (outcome, BasketResponse::new(b, config))
    })
}
