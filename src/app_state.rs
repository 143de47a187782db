use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::DraftStore;
use crate::utils::Config;

// Type aliases keep the handle types readable at call sites.
pub type DraftStoreType = Arc<RwLock<dyn DraftStore>>;
pub type ConfigType = Arc<RwLock<Config>>;

/// Context object every collaborator receives instead of reaching for a
/// global: all components share the one draft store handle held here.
#[derive(Clone)]
pub struct AppState {
    pub draft_store: DraftStoreType,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(draft_store: DraftStoreType, config: ConfigType) -> Self {
        Self {
            draft_store,
            config,
        }
    }
}
