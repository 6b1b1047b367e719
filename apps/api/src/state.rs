use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing mutable is shared between requests; the upload directory on disk
/// is the only common resource.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
