use std::sync::Arc;

use tokio::sync::RwLock;

use monolog_core::models::profile::Profile;

/// Shared application state, injected into all route handlers via Axum state.
///
/// The profile lives in memory only; concurrent updates are last-writer-wins.
#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<RwLock<Profile>>,
}

impl AppState {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile: Arc::new(RwLock::new(profile)),
        }
    }
}
