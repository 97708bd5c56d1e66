// src/application/state.rs

use std::sync::Arc;

use crate::integrations::ViewHost;
use crate::services::ArSessionService;

/// Application state owned by the host screen.
///
/// One instance per screen, passed by `&mut` into the dispatcher. The host
/// issues one command at a time, so no locking is layered on top.
pub struct AppState {
    pub session: ArSessionService,
}

impl AppState {
    pub fn new(host: Arc<dyn ViewHost>) -> Self {
        Self {
            session: ArSessionService::new(host),
        }
    }
}
