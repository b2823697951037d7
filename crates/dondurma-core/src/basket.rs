//! # Basket
//!
//! The basket reducer: line items plus derived aggregates.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Basket Operations                                    │
//! │                                                                         │
//! │  Action                 Basket Change                    Outcome        │
//! │  ──────                 ─────────────                    ───────        │
//! │  AddItem(p, s) ───────► qty += 1 or push new line ─────► Added          │
//! │  IncreaseQuantity(k) ─► qty += 1 ──────────────────────► QuantityChanged│
//! │  DecreaseQuantity(k) ─► qty -= 1, drop line at 0 ──────► QuantityChanged│
//! │                                                          or Removed     │
//! │  RemoveItem(k) ───────► drop line ─────────────────────► Removed        │
//! │  ConfirmOrder ────────► clear everything ──────────────► Confirmed      │
//! │                                                                         │
//! │  Unknown key ─────────► nothing ───────────────────────► Unchanged      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are recomputed after every operation, so
//! `total_quantity == Σ quantity` and `total_amount == Σ total_price` hold
//! between any two calls.
//!
//! Lines are looked up by a linear scan over insertion order. The basket
//! never holds two lines with the same [`LineKey`], so the first match is
//! the only match.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId, Serving};

// =============================================================================
// Line Key
// =============================================================================

/// Identity of a basket line: the same product with another serving is
/// another line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineKey {
    pub product_id: ProductId,
    pub serving: Serving,
}

impl LineKey {
    pub const fn new(product_id: ProductId, serving: Serving) -> Self {
        LineKey {
            product_id,
            serving,
        }
    }
}

/// `1-Külah`, the form used in basket control labels.
impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.product_id, self.serving)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One line of the basket.
///
/// `name`, `price` and `image_url` are copied from the product when the line
/// is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    /// Unit price.
    pub price: Money,
    pub serving: Serving,
    /// Always at least 1 while the line is in the basket.
    pub quantity: u32,
    /// `price × quantity`.
    pub total_price: Money,
    pub image_url: String,
}

impl LineItem {
    /// Creates a line with quantity 1.
    pub fn from_product(product: &Product, serving: Serving) -> Self {
        let price = product.price();
        LineItem {
            product_id: product.id,
            name: product.name.clone(),
            price,
            serving,
            quantity: 1,
            total_price: price,
            image_url: product.image_url.clone(),
        }
    }

    #[inline]
    pub fn key(&self) -> LineKey {
        LineKey::new(self.product_id, self.serving)
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.total_price = self.price.multiply_quantity(quantity);
    }
}

// =============================================================================
// Actions & Outcomes
// =============================================================================

/// Everything that can happen to a basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasketAction {
    AddItem { product: Product, serving: Serving },
    IncreaseQuantity(LineKey),
    DecreaseQuantity(LineKey),
    RemoveItem(LineKey),
    ConfirmOrder,
}

/// What an applied action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasketOutcome {
    /// A product was added; `quantity` is the line's new quantity.
    Added { key: LineKey, quantity: u32 },
    QuantityChanged { key: LineKey, quantity: u32 },
    /// The line left the basket (explicit removal or decreased to zero).
    Removed { key: LineKey },
    /// The order was taken and the basket emptied.
    Confirmed(ConfirmedOrder),
    /// The action referenced a line that is not in the basket.
    Unchanged,
}

/// Contents of the basket at the moment an order was confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConfirmedOrder {
    pub items: Vec<LineItem>,
    pub total_quantity: u32,
    pub total_amount: Money,
}

// =============================================================================
// Basket State
// =============================================================================

/// The basket: ordered lines plus their aggregates.
///
/// ## Invariants
/// - Lines are unique by [`LineKey`]
/// - Every line has `quantity >= 1`
/// - `total_quantity` and `total_amount` are the sums over the lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BasketState {
    items: Vec<LineItem>,
    total_quantity: u32,
    total_amount: Money,
}

impl BasketState {
    /// Creates an empty basket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a basket from existing lines, e.g. a restored snapshot.
    ///
    /// Lines with quantity 0 are dropped, lines sharing a key are merged into
    /// the first one, and every `total_price` is recomputed from its unit
    /// price.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut basket = BasketState::new();
        for item in items.into_iter().filter(|i| i.quantity > 0) {
            let key = item.key();
            match basket.position(&key) {
                Some(index) => {
                    let merged = basket.items[index].quantity.saturating_add(item.quantity);
                    basket.items[index].set_quantity(merged);
                }
                None => {
                    let quantity = item.quantity;
                    basket.items.push(item);
                    if let Some(last) = basket.items.last_mut() {
                        last.set_quantity(quantity);
                    }
                }
            }
        }
        basket.recompute_totals();
        basket
    }

    /// Adds one unit of `product` served as `serving`.
    pub fn add_item(&mut self, product: &Product, serving: Serving) -> BasketOutcome {
        let key = LineKey::new(product.id, serving);
        let quantity = match self.position(&key) {
            Some(index) => {
                let item = &mut self.items[index];
                let quantity = item.quantity.saturating_add(1);
                item.set_quantity(quantity);
                quantity
            }
            None => {
                self.items.push(LineItem::from_product(product, serving));
                1
            }
        };
        self.recompute_totals();
        BasketOutcome::Added { key, quantity }
    }

    /// Adds one unit to an existing line.
    pub fn increase_quantity(&mut self, key: LineKey) -> BasketOutcome {
        let Some(index) = self.position(&key) else {
            return BasketOutcome::Unchanged;
        };

        let item = &mut self.items[index];
        let quantity = item.quantity.saturating_add(1);
        item.set_quantity(quantity);
        self.recompute_totals();
        BasketOutcome::QuantityChanged { key, quantity }
    }

    /// Takes one unit off a line; the line is dropped when it reaches zero.
    pub fn decrease_quantity(&mut self, key: LineKey) -> BasketOutcome {
        let Some(index) = self.position(&key) else {
            return BasketOutcome::Unchanged;
        };

        let quantity = self.items[index].quantity.saturating_sub(1);
        let outcome = if quantity == 0 {
            self.items.remove(index);
            BasketOutcome::Removed { key }
        } else {
            self.items[index].set_quantity(quantity);
            BasketOutcome::QuantityChanged { key, quantity }
        };
        self.recompute_totals();
        outcome
    }

    /// Drops a line regardless of its quantity.
    pub fn remove_item(&mut self, key: LineKey) -> BasketOutcome {
        let Some(index) = self.position(&key) else {
            return BasketOutcome::Unchanged;
        };

        self.items.remove(index);
        self.recompute_totals();
        BasketOutcome::Removed { key }
    }

    /// Takes the order and empties the basket.
    ///
    /// Confirming an empty basket still succeeds and yields an empty order.
    pub fn confirm_order(&mut self) -> BasketOutcome {
        BasketOutcome::Confirmed(self.take_order())
    }

    /// Empties the basket and returns what it held.
    pub fn take_order(&mut self) -> ConfirmedOrder {
        let taken = std::mem::take(self);
        ConfirmedOrder {
            items: taken.items,
            total_quantity: taken.total_quantity,
            total_amount: taken.total_amount,
        }
    }

    /// Applies an action in place.
    pub fn apply(&mut self, action: BasketAction) -> BasketOutcome {
        match action {
            BasketAction::AddItem { product, serving } => self.add_item(&product, serving),
            BasketAction::IncreaseQuantity(key) => self.increase_quantity(key),
            BasketAction::DecreaseQuantity(key) => self.decrease_quantity(key),
            BasketAction::RemoveItem(key) => self.remove_item(key),
            BasketAction::ConfirmOrder => self.confirm_order(),
        }
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total_quantity(&self) -> u32 {
        self.total_quantity
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn find(&self, key: &LineKey) -> Option<&LineItem> {
        self.items.iter().find(|i| i.key() == *key)
    }

    /// Quantity of a line, 0 when absent.
    pub fn quantity_of(&self, key: &LineKey) -> u32 {
        self.find(key).map_or(0, |i| i.quantity)
    }

    fn position(&self, key: &LineKey) -> Option<usize> {
        self.items.iter().position(|i| i.key() == *key)
    }

    fn recompute_totals(&mut self) {
        self.total_quantity = self
            .items
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.quantity));
        self.total_amount = self.items.iter().map(|i| i.total_price).sum();
    }
}

/// Pure transition: old state + action → new state.
pub fn reduce(mut state: BasketState, action: BasketAction) -> (BasketState, BasketOutcome) {
    let outcome = state.apply(action);
    (state, outcome)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId, name: &str, price_kurus: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            price_kurus,
            unit: "top".to_string(),
            image_url: format!("/img/{id}.png"),
            accent: String::new(),
        }
    }

    fn assert_totals_consistent(basket: &BasketState) {
        let quantity: u32 = basket.items().iter().map(|i| i.quantity).sum();
        let amount: Money = basket.items().iter().map(|i| i.total_price).sum();
        assert_eq!(basket.total_quantity(), quantity);
        assert_eq!(basket.total_amount(), amount);
        for item in basket.items() {
            assert!(item.quantity >= 1);
            assert_eq!(item.total_price, item.price * item.quantity);
        }
    }

    /// Two lines: product 1 in a cone (qty 2), product 2 in a cup (qty 1).
    fn two_line_basket() -> BasketState {
        let mut basket = BasketState::new();
        let vanilla = product(1, "Vanilyalı", 2000);
        let lemon = product(2, "Limonlu", 1500);
        basket.add_item(&vanilla, Serving::Cone);
        basket.add_item(&vanilla, Serving::Cone);
        basket.add_item(&lemon, Serving::Cup);
        basket
    }

    #[test]
    fn test_add_same_item_twice_increases_quantity() {
        let mut basket = BasketState::new();
        let cone = product(1, "Külah", 1000);

        basket.add_item(&cone, Serving::Cone);
        let outcome = basket.add_item(&cone, Serving::Cone);

        assert_eq!(
            outcome,
            BasketOutcome::Added {
                key: LineKey::new(1, Serving::Cone),
                quantity: 2
            }
        );
        assert_eq!(basket.line_count(), 1);
        let line = &basket.items()[0];
        assert_eq!(line.product_id, 1);
        assert_eq!(line.serving, Serving::Cone);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.total_price, Money::from_lira(20));
        assert_eq!(basket.total_quantity(), 2);
        assert_eq!(basket.total_amount(), Money::from_lira(20));
    }

    #[test]
    fn test_same_product_with_other_serving_is_new_line() {
        let mut basket = BasketState::new();
        let vanilla = product(1, "Vanilyalı", 2000);

        basket.add_item(&vanilla, Serving::Cone);
        basket.add_item(&vanilla, Serving::Cup);

        assert_eq!(basket.line_count(), 2);
        assert_eq!(basket.items()[0].serving, Serving::Cone);
        assert_eq!(basket.items()[1].serving, Serving::Cup);
        assert_eq!(basket.total_quantity(), 2);
        assert_eq!(basket.total_amount(), Money::from_kurus(4000));
    }

    #[test]
    fn test_new_line_copies_product_data() {
        let mut basket = BasketState::new();
        let vanilla = product(7, "Vanilyalı", 2250);

        basket.add_item(&vanilla, Serving::Cup);

        let line = &basket.items()[0];
        assert_eq!(line.name, "Vanilyalı");
        assert_eq!(line.price, Money::from_kurus(2250));
        assert_eq!(line.image_url, "/img/7.png");
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_increase_quantity() {
        let mut basket = two_line_basket();
        let key = LineKey::new(1, Serving::Cone);

        basket.increase_quantity(key);
        basket.increase_quantity(key);

        assert_eq!(basket.quantity_of(&key), 4);
        assert_eq!(basket.total_quantity(), 5);
        assert_totals_consistent(&basket);
    }

    #[test]
    fn test_decrease_quantity_then_remove_at_zero() {
        let mut basket = two_line_basket();
        let key = LineKey::new(1, Serving::Cone);

        let outcome = basket.decrease_quantity(key);
        assert_eq!(outcome, BasketOutcome::QuantityChanged { key, quantity: 1 });
        assert_eq!(basket.quantity_of(&key), 1);
        assert_eq!(basket.line_count(), 2);

        let outcome = basket.decrease_quantity(key);
        assert_eq!(outcome, BasketOutcome::Removed { key });
        assert_eq!(basket.line_count(), 1);
        assert!(basket.find(&key).is_none());
        assert_totals_consistent(&basket);
    }

    #[test]
    fn test_decrease_fresh_item_removes_it() {
        let mut basket = BasketState::new();
        let key = LineKey::new(3, Serving::Cup);
        basket.add_item(&product(3, "Çilekli", 1800), Serving::Cup);

        basket.decrease_quantity(key);

        assert!(basket.is_empty());
        assert_eq!(basket.total_quantity(), 0);
        assert_eq!(basket.total_amount(), Money::zero());
    }

    #[test]
    fn test_remove_item() {
        let mut basket = two_line_basket();

        basket.remove_item(LineKey::new(1, Serving::Cone));
        assert_eq!(basket.line_count(), 1);
        assert_totals_consistent(&basket);

        basket.remove_item(LineKey::new(2, Serving::Cup));
        assert!(basket.is_empty());
        assert_eq!(basket.total_quantity(), 0);
        assert_eq!(basket.total_amount(), Money::zero());
    }

    #[test]
    fn test_unknown_key_is_a_no_op() {
        let mut basket = two_line_basket();
        let before = basket.clone();
        let missing = LineKey::new(1, Serving::Cup);

        assert_eq!(basket.increase_quantity(missing), BasketOutcome::Unchanged);
        assert_eq!(basket.decrease_quantity(missing), BasketOutcome::Unchanged);
        assert_eq!(basket.remove_item(missing), BasketOutcome::Unchanged);
        assert_eq!(basket, before);
    }

    #[test]
    fn test_confirm_order_empties_basket() {
        let mut basket = two_line_basket();

        let outcome = basket.confirm_order();

        match outcome {
            BasketOutcome::Confirmed(order) => {
                assert_eq!(order.items.len(), 2);
                assert_eq!(order.total_quantity, 3);
                assert_eq!(order.total_amount, Money::from_kurus(5500));
            }
            other => panic!("expected Confirmed, got {other:?}"),
        }
        assert!(basket.is_empty());
        assert_eq!(basket.total_quantity(), 0);
        assert_eq!(basket.total_amount(), Money::zero());
    }

    #[test]
    fn test_confirm_empty_basket() {
        let mut basket = BasketState::new();
        assert!(matches!(basket.confirm_order(), BasketOutcome::Confirmed(o) if o.items.is_empty()));
        assert_eq!(basket, BasketState::new());
    }

    #[test]
    fn test_totals_hold_after_every_action() {
        let vanilla = product(1, "Vanilyalı", 1995);
        let lemon = product(2, "Limonlu", 1505);
        let actions = vec![
            BasketAction::AddItem { product: vanilla.clone(), serving: Serving::Cone },
            BasketAction::AddItem { product: lemon.clone(), serving: Serving::Cup },
            BasketAction::AddItem { product: vanilla.clone(), serving: Serving::Cup },
            BasketAction::IncreaseQuantity(LineKey::new(2, Serving::Cup)),
            BasketAction::DecreaseQuantity(LineKey::new(1, Serving::Cone)),
            BasketAction::RemoveItem(LineKey::new(9, Serving::Cone)),
            BasketAction::AddItem { product: vanilla, serving: Serving::Cup },
            BasketAction::RemoveItem(LineKey::new(2, Serving::Cup)),
            BasketAction::ConfirmOrder,
            BasketAction::AddItem { product: lemon, serving: Serving::Cone },
        ];

        let mut basket = BasketState::new();
        for action in actions {
            basket.apply(action);
            assert_totals_consistent(&basket);
        }
        assert_eq!(basket.total_quantity(), 1);
        assert_eq!(basket.total_amount(), Money::from_kurus(1505));
    }

    #[test]
    fn test_huge_price_saturates_line_and_basket_totals() {
        let gold = product(7, "Altın Varaklı", 5_000_000_000_000_000_000);
        let mut basket = BasketState::new();

        basket.add_item(&gold, Serving::Cone);
        basket.add_item(&gold, Serving::Cone);
        basket.add_item(&gold, Serving::Cup);

        assert_eq!(basket.quantity_of(&LineKey::new(7, Serving::Cone)), 2);
        assert_eq!(basket.items()[0].total_price.kurus(), i64::MAX);
        assert_eq!(basket.total_amount().kurus(), i64::MAX);
        assert_totals_consistent(&basket);
    }

    #[test]
    fn test_reduce_is_a_pure_transition() {
        let start = BasketState::new();
        let (next, outcome) = reduce(
            start.clone(),
            BasketAction::AddItem {
                product: product(1, "Külah", 1000),
                serving: Serving::Cone,
            },
        );

        assert!(start.is_empty());
        assert_eq!(next.total_quantity(), 1);
        assert!(matches!(outcome, BasketOutcome::Added { quantity: 1, .. }));
    }

    #[test]
    fn test_from_items_restores_invariants() {
        let mut line = LineItem::from_product(&product(1, "Vanilyalı", 2000), Serving::Cone);
        line.quantity = 2;
        line.total_price = Money::zero();
        let duplicate = line.clone();
        let mut empty_line = LineItem::from_product(&product(2, "Limonlu", 1500), Serving::Cup);
        empty_line.quantity = 0;

        let basket = BasketState::from_items(vec![line, empty_line, duplicate]);

        assert_eq!(basket.line_count(), 1);
        assert_eq!(basket.items()[0].quantity, 4);
        assert_eq!(basket.total_amount(), Money::from_kurus(8000));
        assert_totals_consistent(&basket);
    }

    #[test]
    fn test_line_key_label() {
        assert_eq!(LineKey::new(1, Serving::Cone).to_string(), "1-Külah");
        assert_eq!(LineKey::new(2, Serving::Cup).to_string(), "2-Bardakta");
    }

    #[test]
    fn test_basket_json_shape() {
        let json = serde_json::to_value(two_line_basket()).unwrap();
        assert_eq!(json["totalQuantity"], 3);
        assert_eq!(json["totalAmount"], 5500);
        assert_eq!(json["items"][0]["serving"], "Külah");
        assert_eq!(json["items"][0]["totalPrice"], 4000);
        assert_eq!(json["items"][1]["productId"], 2);
    }
}
