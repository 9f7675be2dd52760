//! Application state for the web layer.

use std::sync::Arc;

use crate::service::ArrivalService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ArrivalService>,
}

impl AppState {
    pub fn new(service: Arc<ArrivalService>) -> Self {
        Self { service }
    }
}
