use std::sync::Arc;

use flume::Sender;

use crate::{event::events::SessionEvent, http::ApiService};

/// Shared handles the event handler threads need: the API client and the
/// channel completions are posted back on.
pub struct AppContext {
    pub api: Arc<ApiService>,
    pub event_tx: Sender<SessionEvent>,
}
