//! The closed set of actions accepted by the reducer.

use super::{FileNode, PanelWidths, RepositoryRef};

/// Everything that can change [`super::ApplicationState`]
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Update the raw repository URL text
    SetRepositoryLocator(String),
    /// Begin a load: clears the previous result and bumps the load generation
    StartLoad { message: String },
    /// A load finished; ignored unless `generation` is still current
    LoadSucceeded {
        generation: u64,
        repository: RepositoryRef,
        file_tree: Vec<FileNode>,
    },
    /// A load failed; ignored unless `generation` is still current
    LoadFailed { generation: u64, message: String },
    /// Set or clear the operation error without touching a load
    SetOperationError(Option<String>),
    /// Back to defaults, keeping the panel layout
    Reset,
    ClearSessionError,
    SetTransientError(Option<String>),
    SetPanelWidths(PanelWidths),
    /// Restore the default ratio carried by the action
    ResetPanelWidths(PanelWidths),
}

impl Action {
    /// Short name for log lines
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetRepositoryLocator(_) => "SetRepositoryLocator",
            Action::StartLoad { .. } => "StartLoad",
            Action::LoadSucceeded { .. } => "LoadSucceeded",
            Action::LoadFailed { .. } => "LoadFailed",
            Action::SetOperationError(_) => "SetOperationError",
            Action::Reset => "Reset",
            Action::ClearSessionError => "ClearSessionError",
            Action::SetTransientError(_) => "SetTransientError",
            Action::SetPanelWidths(_) => "SetPanelWidths",
            Action::ResetPanelWidths(_) => "ResetPanelWidths",
        }
    }
}
