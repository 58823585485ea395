/// Shared application state for the webserver
///
/// Holds the systems route handlers need: the progress store, the avatar
/// resolver and the gacha-log client. The client keeps its own handle to the
/// same progress store so per-page updates land where the status endpoint
/// polls them.
use std::sync::Arc;

use crate::avatars::AvatarResolver;
use crate::errors::FetchError;
use crate::fetcher::GachaLogClient;
use crate::progress::ProgressStore;

pub struct AppState {
    pub progress: Arc<ProgressStore>,
    pub avatars: Arc<AvatarResolver>,
    pub fetcher: GachaLogClient,
    pub startup_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new() -> Result<Self, FetchError> {
        let progress = Arc::new(ProgressStore::new());
        let fetcher = GachaLogClient::new(Arc::clone(&progress))?;

        Ok(Self {
            progress,
            avatars: Arc::new(AvatarResolver::new()),
            fetcher,
            startup_time: chrono::Utc::now(),
        })
    }
}
