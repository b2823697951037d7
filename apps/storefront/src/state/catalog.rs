//! # Catalog State
//!
//! The catalog as last delivered by the loader. Commands only read it;
//! the loader moves it through loading → loaded / failed.

use std::sync::{Arc, PoisonError, RwLock};

use dondurma_core::{CatalogView, Product, ProductId};

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    view: Arc<RwLock<CatalogView>>,
}

impl CatalogState {
    /// Starts in the loading state.
    pub fn new() -> Self {
        Self::from_view(CatalogView::loading())
    }

    pub fn from_view(view: CatalogView) -> Self {
        CatalogState {
            view: Arc::new(RwLock::new(view)),
        }
    }

    pub fn with_view<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CatalogView) -> R,
    {
        let view = self.view.read().unwrap_or_else(PoisonError::into_inner);
        f(&view)
    }

    pub fn set_loading(&self) {
        self.replace(CatalogView::loading());
    }

    pub fn set_loaded(&self, products: Vec<Product>) {
        self.replace(CatalogView::loaded(products));
    }

    pub fn set_failed(&self, message: impl Into<String>) {
        self.replace(CatalogView::failed(message));
    }

    /// Looks up a product by id, cloned out of the lock.
    pub fn product(&self, id: ProductId) -> Option<Product> {
        self.with_view(|view| view.find(id).cloned())
    }

    fn replace(&self, next: CatalogView) {
        *self.view.write().unwrap_or_else(PoisonError::into_inner) = next;
    }
}
