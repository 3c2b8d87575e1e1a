use std::sync::Arc;

use crate::catalog::Catalog;
use crate::chat::ChatClient;
use crate::config::Config;
use crate::profile::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Static job/tool/course datasets, loaded once at startup.
    pub catalog: Arc<Catalog>,
    /// Pluggable profile store. Default: JsonFileStore at PROFILE_STORE_PATH.
    pub profiles: Arc<dyn ProfileStore>,
    pub chat: ChatClient,
    pub config: Config,
}
