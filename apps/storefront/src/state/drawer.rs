//! # Drawer Handle
//!
//! Shared open/closed flag of the basket drawer. A confirmed order closes
//! it through the same handle the close button uses.

use std::sync::{Arc, Mutex, PoisonError};

use dondurma_core::DrawerState;

#[derive(Debug, Clone, Default)]
pub struct DrawerHandle {
    drawer: Arc<Mutex<DrawerState>>,
}

impl DrawerHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.lock().is_open()
    }

    pub fn open(&self) {
        self.lock().open();
    }

    pub fn close(&self) {
        self.lock().close();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DrawerState> {
        self.drawer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
