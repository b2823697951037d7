//! # Basket Drawer
//!
//! Open/closed state of the basket drawer and the labels it shows.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Sepetim (3 ürün)                     X  │ ◄── close button
//! ├──────────────────────────────────────────┤
//! │  Vanilyalı   Külah     [-] 2 [+]  ₺40.00 │ ◄── "1-Külah miktarını artır"
//! │  Limonlu     Bardakta  [-] 1 [+]  ₺15.00 │
//! ├──────────────────────────────────────────┤
//! │  Toplam                          ₺55.00  │
//! │  [ Siparişi onayla ]                     │
//! └──────────────────────────────────────────┘
//! ```

use crate::basket::{BasketState, LineKey};

/// Shown instead of the line list when the basket is empty.
pub const EMPTY_BASKET_MESSAGE: &str = "Sepetiniz boş";

/// Accessible name of the confirm button.
pub const CONFIRM_ORDER_LABEL: &str = "Siparişi onayla";

/// Accessible name of the close button.
pub const CLOSE_DRAWER_LABEL: &str = "Sepeti kapat";

/// Whether the drawer is on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close button, backdrop click and a confirmed order all end up here.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// [`EMPTY_BASKET_MESSAGE`] while the basket has no lines.
pub fn empty_basket_message(basket: &BasketState) -> Option<&'static str> {
    basket.is_empty().then_some(EMPTY_BASKET_MESSAGE)
}

/// `(3 ürün)`
pub fn item_count_label(basket: &BasketState) -> String {
    format!("({} ürün)", basket.total_quantity())
}

/// `₺55.00` for the `₺` symbol.
pub fn total_amount_label(basket: &BasketState, symbol: &str) -> String {
    basket.total_amount().format_with(symbol)
}

pub fn increase_label(key: &LineKey) -> String {
    format!("{key} miktarını artır")
}

pub fn decrease_label(key: &LineKey) -> String {
    format!("{key} miktarını azalt")
}

pub fn remove_label(key: &LineKey) -> String {
    format!("{key} ürününü sepetten çıkar")
}
