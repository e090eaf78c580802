use std::path::PathBuf;

use crate::config::WebConfig;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Read-only: every conversion builds its own render context.
#[derive(Debug, Clone)]
pub struct AppState {
    pub logo_path: PathBuf,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(config: &WebConfig) -> Self {
        Self {
            logo_path: config.logo_path.clone(),
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}
