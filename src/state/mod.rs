//! Application state for the repository shell.
//!
//! The shell owns exactly one [`ApplicationState`]; every change goes through
//! [`reducer::reduce`] with an [`Action`].
//!
//! Sub-modules:
//! - [`action`]  : the closed set of actions
//! - [`reducer`] : the pure transition function
//! - [`widths`]  : `PanelWidths`, the validated three-panel weight vector

mod action;
pub mod reducer;
mod widths;

pub use action::Action;
pub use reducer::reduce;
pub use widths::PanelWidths;

use serde::{Deserialize, Serialize};

/// A resolved repository: `owner/repo`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryRef {
    pub owner: String,
    pub repo: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// `owner/repo` form used in messages
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Kind of entry in a repository tree listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A file
    Blob,
    /// A directory
    Tree,
    /// A submodule pointer
    Commit,
}

/// One entry of the flattened repository tree.
///
/// The shell never looks inside these; they are stored, persisted and handed
/// to the tree view as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl FileNode {
    pub fn blob(path: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            kind: NodeKind::Blob,
            size: Some(size),
        }
    }

    pub fn tree(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: NodeKind::Tree,
            size: None,
        }
    }
}

/// Global UI state of the shell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApplicationState {
    /// Raw repository URL text as typed by the user
    pub repository_locator: String,
    /// Resolved repository, set together with `file_tree`
    pub repository_info: Option<RepositoryRef>,
    /// Flattened tree of the loaded repository
    pub file_tree: Vec<FileNode>,
    pub is_loading: bool,
    pub loading_message: String,
    /// Error from the current load attempt
    pub operation_error: Option<String>,
    /// Set only when the restored session record was corrupted
    pub session_error: Option<String>,
    /// Short-lived notification, dismissed by a timer
    pub transient_error: Option<String>,
    /// Relative weights of the [tree, content, side] panels
    pub panel_widths: PanelWidths,
    /// Bumped by every `StartLoad` and `Reset`; in-flight loads carry the
    /// generation they started under so late results can be dropped.
    pub load_generation: u64,
}

impl ApplicationState {
    /// True once a repository has been loaded successfully
    pub fn has_repository(&self) -> bool {
        self.repository_info.is_some()
    }
}
