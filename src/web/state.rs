use std::sync::Arc;

use crate::model::CatalogStore;

#[derive(Debug, Clone)]
pub struct AppState {
    store: Arc<dyn CatalogStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn CatalogStore {
        self.store.as_ref()
    }
}
