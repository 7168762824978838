//! JSON codec for the persisted session record.
//!
//! Record layout:
//!
//! ```json
//! { "repoUrl": "...", "repoInfo": {"owner": "...", "repo": "..."} | null,
//!   "fileTree": [...], "panelWidths": [1, 2, 1] }
//! ```
//!
//! A record that is not valid JSON or lacks a required field is corrupt.
//! `panelWidths` is optional and validated separately: anything other than
//! three finite positive numbers falls back to the default weights without
//! marking the record corrupt.

use crate::state::{ApplicationState, FileNode, PanelWidths, RepositoryRef};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The stored record could not be decoded
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Session record is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// On-disk shape of the session record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub repo_url: String,
    pub repo_info: Option<RepositoryRef>,
    pub file_tree: Vec<FileNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_widths: Option<serde_json::Value>,
}

/// Decoded session data ready to seed the application state
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub repository_locator: String,
    pub repository_info: Option<RepositoryRef>,
    pub file_tree: Vec<FileNode>,
    pub panel_widths: PanelWidths,
}

impl SessionSnapshot {
    /// Build application state from the snapshot
    pub fn into_state(self) -> ApplicationState {
        ApplicationState {
            repository_locator: self.repository_locator,
            repository_info: self.repository_info,
            file_tree: self.file_tree,
            panel_widths: self.panel_widths,
            ..ApplicationState::default()
        }
    }
}

/// Serialize the persisted subset of `state`
pub fn encode(state: &ApplicationState) -> Result<String, serde_json::Error> {
    let record = SessionRecord {
        repo_url: state.repository_locator.clone(),
        repo_info: state.repository_info.clone(),
        file_tree: state.file_tree.clone(),
        panel_widths: Some(serde_json::to_value(state.panel_widths.weights())?),
    };
    serde_json::to_string(&record)
}

/// Parse a stored record; `default_widths` replaces unusable panel widths
pub fn decode(text: &str, default_widths: PanelWidths) -> Result<SessionSnapshot, CodecError> {
    let record: SessionRecord = serde_json::from_str(text)?;

    let panel_widths = match record.panel_widths.as_ref() {
        None => default_widths,
        Some(value) => match parse_panel_widths(value) {
            Some(widths) => widths,
            None => {
                log::warn!(
                    "Ignoring invalid panelWidths in session record: {}",
                    value
                );
                default_widths
            }
        },
    };

    // Repository info and tree travel together
    let file_tree = if record.repo_info.is_some() {
        record.file_tree
    } else {
        if !record.file_tree.is_empty() {
            log::warn!(
                "Session record has {} tree entries but no repository; dropping tree",
                record.file_tree.len()
            );
        }
        Vec::new()
    };

    Ok(SessionSnapshot {
        repository_locator: record.repo_url,
        repository_info: record.repo_info,
        file_tree,
        panel_widths,
    })
}

fn parse_panel_widths(value: &serde_json::Value) -> Option<PanelWidths> {
    let weights = value
        .as_array()?
        .iter()
        .map(serde_json::Value::as_f64)
        .collect::<Option<Vec<f64>>>()?;
    PanelWidths::from_slice(&weights)
}
