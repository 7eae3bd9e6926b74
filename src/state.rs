//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no conversation state of its own; it only holds the proxy
//! used to reach the chatbot service.

use std::sync::Arc;

use crate::proxy::BotProxy;

#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<BotProxy>,
}

impl AppState {
    #[must_use]
    pub fn new(proxy: BotProxy) -> Self {
        Self { proxy: Arc::new(proxy) }
    }
}
