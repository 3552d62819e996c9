//! Collaborators the shell talks to.

use deskboard_core::{DashboardConfig, FileStore, IdentityProvider, MemoryIdentityProvider, MemoryStore, NoteStore, TaskStore};
use std::sync::Arc;

/// Identity provider plus the task and note stores.
#[derive(Clone)]
pub struct Backend {
    pub identity: Arc<dyn IdentityProvider>,
    pub tasks: Arc<dyn TaskStore>,
    pub notes: Arc<dyn NoteStore>,
}

impl Backend {
    /// Everything in memory; nothing survives a restart.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            identity: Arc::new(MemoryIdentityProvider::new()),
            tasks: store.clone(),
            notes: store,
        }
    }

    /// File-backed stores under the configured data directory, falling back
    /// to memory when the directory cannot be used.
    pub fn from_config(config: &DashboardConfig) -> Self {
        let store = match &config.data_dir {
            Some(dir) => FileStore::new(dir.clone()),
            None => FileStore::default_location(),
        };
        match store {
            Ok(store) => {
                log::info!("Storing records in {}", store.base_path().display());
                let store = Arc::new(store);
                Self {
                    identity: Arc::new(MemoryIdentityProvider::new()),
                    tasks: store.clone(),
                    notes: store,
                }
            }
            Err(e) => {
                log::warn!("File store unavailable ({}), keeping records in memory", e);
                Self::in_memory()
            }
        }
    }
}
