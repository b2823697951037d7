//! # Drawer Commands
//!
//! Opening and closing the basket drawer. A confirmed order closes it too,
//! see [`super::basket::confirm_order`].

use dondurma_core::drawer::{CLOSE_DRAWER_LABEL, CONFIRM_ORDER_LABEL};
use serde::Serialize;
use tracing::debug;

use crate::state::DrawerHandle;

/// Drawer state plus the names of its fixed buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerResponse {
    pub open: bool,
    /// `Sepeti kapat`
    pub close_label: String,
    /// `Siparişi onayla`
    pub confirm_label: String,
}

impl DrawerResponse {
    fn from_handle(drawer: &DrawerHandle) -> Self {
        DrawerResponse {
            open: drawer.is_open(),
            close_label: CLOSE_DRAWER_LABEL.to_string(),
            confirm_label: CONFIRM_ORDER_LABEL.to_string(),
        }
    }
}

pub fn open_drawer(drawer: &DrawerHandle) -> DrawerResponse {
    debug!("open_drawer command");
    drawer.open();
    DrawerResponse::from_handle(drawer)
}

/// Close button and backdrop click.
pub fn close_drawer(drawer: &DrawerHandle) -> DrawerResponse {
    debug!("close_drawer command");
    drawer.close();
    DrawerResponse::from_handle(drawer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close() {
        let drawer = DrawerHandle::new();

        let response = open_drawer(&drawer);
        assert!(response.open);
        assert_eq!(response.close_label, "Sepeti kapat");
        assert_eq!(response.confirm_label, "Siparişi onayla");

        let response = close_drawer(&drawer);
        assert!(!response.open);
        assert!(!drawer.is_open());
    }

    #[test]
    fn test_response_json() {
        let json = serde_json::to_value(open_drawer(&DrawerHandle::new())).unwrap();
        assert_eq!(json["open"], true);
        assert_eq!(json["closeLabel"], "Sepeti kapat");
        assert_eq!(json["confirmLabel"], "Siparişi onayla");
    }
}
