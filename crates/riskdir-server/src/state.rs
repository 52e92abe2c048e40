use riskdir_core::RiskOwnerStore;
use std::sync::Arc;

/// Shared state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RiskOwnerStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RiskOwnerStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn RiskOwnerStore {
        self.store.as_ref()
    }
}
