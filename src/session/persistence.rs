//! Session hydration and write-back.
//!
//! The only component that touches the session key in the store. Reads happen
//! once at startup; writes follow every committed state change that touches a
//! persisted field; a reset removes the record.

use super::codec::{self, CodecError};
use super::store::{PersistenceStore, StoreError};
use crate::notify::SESSION_CORRUPTED_MESSAGE;
use crate::state::{ApplicationState, PanelWidths};
use repo_shell_config::layout_constants::SESSION_STORAGE_KEY;
use thiserror::Error;

/// Why a session write-back failed
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Reads and writes the session record through a [`PersistenceStore`]
pub struct SessionPersistence {
    store: Box<dyn PersistenceStore>,
    key: String,
}

impl SessionPersistence {
    /// Use the standard session key
    pub fn new(store: Box<dyn PersistenceStore>) -> Self {
        Self::with_key(store, SESSION_STORAGE_KEY)
    }

    pub fn with_key(store: Box<dyn PersistenceStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Build the startup state from the stored record.
    ///
    /// Absent record: defaults. Unreadable or corrupt record: defaults plus
    /// the session error; the record itself is left in place.
    pub fn hydrate(&self, default_widths: PanelWidths) -> ApplicationState {
        let defaults = ApplicationState {
            panel_widths: default_widths,
            ..ApplicationState::default()
        };

        let text = match self.store.get(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                log::info!("No saved session under '{}', starting fresh", self.key);
                return defaults;
            }
            Err(e) => {
                log::error!("Failed to read saved session: {}", e);
                return corrupted(defaults);
            }
        };

        match codec::decode(&text, default_widths) {
            Ok(snapshot) => {
                log::info!(
                    "Restored session ({} tree entries, repository {:?})",
                    snapshot.file_tree.len(),
                    snapshot
                        .repository_info
                        .as_ref()
                        .map(|repo| repo.full_name())
                );
                snapshot.into_state()
            }
            Err(CodecError::Corrupt(e)) => {
                log::warn!("Saved session under '{}' is corrupt: {}", self.key, e);
                corrupted(defaults)
            }
        }
    }

    /// Write the persisted subset of `state`
    pub fn save(&self, state: &ApplicationState) -> Result<(), SaveError> {
        let text = codec::encode(state)?;
        self.store.set(&self.key, &text)?;
        Ok(())
    }

    /// Remove the stored record
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(&self.key)
    }
}

fn corrupted(mut defaults: ApplicationState) -> ApplicationState {
    defaults.session_error = Some(SESSION_CORRUPTED_MESSAGE.to_string());
    defaults
}

/// True if a field that lives in the session record differs
pub fn persisted_fields_changed(prev: &ApplicationState, next: &ApplicationState) -> bool {
    prev.repository_locator != next.repository_locator
        || prev.repository_info != next.repository_info
        || prev.panel_widths != next.panel_widths
        || prev.file_tree != next.file_tree
}
