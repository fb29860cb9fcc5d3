use std::sync::Arc;
use crate::identity::ServerIdentity;

/// Shared application state injected into the dispatcher via axum::extract::State.
/// Read-only for the server lifetime; Arc makes the per-request clone cheap.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<ServerIdentity>,
}

impl AppState {
    pub fn new(identity: ServerIdentity) -> Self {
        AppState {
            identity: Arc::new(identity),
        }
    }
}
