use crate::config::AppConfig;
use crate::render::RevealGate;
use crate::search::SearchModal;
use crate::store::StayStore;
use std::sync::Mutex;

/// Shared application state, passed by reference into every handler.
/// Replaces the module-scoped globals of the original page: the store
/// is read-only, the search state sits behind one lock, and reveal
/// scheduling is atomic.
pub struct AppState {
    pub store: StayStore,
    pub search: Mutex<SearchModal>,
    pub reveal: RevealGate,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: StayStore, config: AppConfig) -> Self {
        Self {
            store,
            search: Mutex::new(SearchModal::new()),
            reveal: RevealGate::new(),
            config,
        }
    }
}
