//! The repository-fetch seam.

use crate::notify::UNKNOWN_LOAD_ERROR_MESSAGE;
use crate::state::{FileNode, RepositoryRef};
use thiserror::Error;

/// Why a tree fetch failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The API answered with an error the user can act on.
    #[error("{message}")]
    Api {
        /// HTTP status, when there was one.
        status: Option<u16>,
        /// Human-readable message, shown as-is.
        message: String,
    },

    /// Anything else (transport failure, unexpected payload).
    #[error("Repository fetch failed: {0}")]
    Unknown(String),
}

impl FetchError {
    /// Text for the operation error channel
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Api { message, .. } => message.clone(),
            FetchError::Unknown(_) => UNKNOWN_LOAD_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Source of repository trees
pub trait RepoFetcher {
    /// Fetch the flattened tree of `repository`
    fn fetch_repo_tree(&self, repository: &RepositoryRef) -> Result<Vec<FileNode>, FetchError>;
}
