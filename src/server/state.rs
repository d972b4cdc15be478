//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned for each request handler through
//! Axum's state extraction. It holds the storage adapter, whose backend was chosen from
//! configuration, and the settings used to store & link uploaded files.

use std::{path::PathBuf, sync::Arc};
use url::Url;

use crate::server::storage::DocumentStore;

/// Where uploaded files are written and how they are linked.
#[derive(Debug, Clone)]
pub struct UploadSettings {
    /// Directory uploaded files are written to and served from
    pub dir: PathBuf,
    /// Base URL public upload links are joined onto, ending with `/`
    pub public_url: Url,
}

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the store is reference counted and wraps a connection
/// pool shared by every clone.
#[derive(Clone)]
pub struct AppState {
    /// Storage adapter over the configured backend.
    pub store: Arc<dyn DocumentStore>,

    pub uploads: UploadSettings,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, uploads: UploadSettings) -> Self {
        Self { store, uploads }
    }
}
