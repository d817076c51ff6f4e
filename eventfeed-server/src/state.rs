use eventfeed_core::StoreClient;

use crate::config::ServerConfig;

/// Shared application state.
///
/// Every page triggers a fresh fetch so the listings always reflect the
/// store; nothing is cached between requests.
#[derive(Clone)]
pub struct AppState {
    pub store: StoreClient,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        AppState {
            store: StoreClient::new(config.store_url.clone()),
        }
    }
}
