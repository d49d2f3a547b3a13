use std::sync::Arc;

use atlas_store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}
