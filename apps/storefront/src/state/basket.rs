//! # Basket Store
//!
//! The shared handle commands use to reach the current basket.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Basket Store Operations                              │
//! │                                                                         │
//! │  Front-end Action         Command                 Basket Change         │
//! │  ────────────────         ───────                 ─────────────         │
//! │  Click "Sepete ekle" ────► add_to_basket() ──────► add_item()           │
//! │  Click [+] ──────────────► increase_quantity() ──► increase_quantity()  │
//! │  Click [-] ──────────────► decrease_quantity() ──► decrease_quantity()  │
//! │  Click remove ───────────► remove_from_basket() ─► remove_item()        │
//! │  Click "Siparişi onayla" ► confirm_order() ──────► confirm_order()      │
//! │                                                                         │
//! │  Every command holds the lock for exactly one transition.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A store is an explicit value, never a global: each session (and each
//! test) creates its own and passes it to the commands. Cloning the store
//! clones the handle, not the basket.

use std::sync::{Arc, Mutex, PoisonError};

use dondurma_core::BasketState;

#[derive(Debug, Clone, Default)]
pub struct BasketStore {
    basket: Arc<Mutex<BasketState>>,
}

impl BasketStore {
    /// Creates a store holding an empty basket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that starts from an existing basket.
    pub fn preloaded(basket: BasketState) -> Self {
        BasketStore {
            basket: Arc::new(Mutex::new(basket)),
        }
    }

    /// Executes a function with read access to the basket.
    ///
    /// ```rust
    /// use dondurma_storefront::state::BasketStore;
    ///
    /// let store = BasketStore::new();
    /// assert_eq!(store.with_basket(|b| b.total_quantity()), 0);
    /// ```
    pub fn with_basket<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BasketState) -> R,
    {
        // Every transition leaves the basket consistent, so a poisoned lock
        // still guards valid state.
        let basket = self.basket.lock().unwrap_or_else(PoisonError::into_inner);
        f(&basket)
    }

    /// Executes a function with write access to the basket.
    pub fn with_basket_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BasketState) -> R,
    {
        let mut basket = self.basket.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut basket)
    }

    /// A copy of the current basket.
    pub fn snapshot(&self) -> BasketState {
        self.with_basket(BasketState::clone)
    }
}
