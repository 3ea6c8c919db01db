use crate::auth::Credentials;
use crate::store::ReadingStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReadingStore>,
    pub credentials: Arc<Credentials>,
}

impl AppState {
    pub fn new(store: Arc<dyn ReadingStore>, credentials: Credentials) -> Self {
        Self {
            store,
            credentials: Arc::new(credentials),
        }
    }
}
