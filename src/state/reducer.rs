//! Pure state transition function.
//!
//! `reduce` never performs I/O and always yields the same next state for the
//! same `(state, action)` pair. Side effects (persistence, timers) are driven
//! by the shell after the new state is committed.

use super::{Action, ApplicationState};

/// Compute the state that follows `state` after `action`
pub fn reduce(state: &ApplicationState, action: Action) -> ApplicationState {
    let mut next = state.clone();
    match action {
        Action::SetRepositoryLocator(locator) => {
            next.repository_locator = locator;
        }
        Action::StartLoad { message } => {
            next.repository_info = None;
            next.file_tree = Vec::new();
            next.operation_error = None;
            next.is_loading = true;
            next.loading_message = message;
            next.load_generation = state.load_generation.wrapping_add(1);
        }
        Action::LoadSucceeded {
            generation,
            repository,
            file_tree,
        } => {
            if is_current_load(state, generation) {
                next.repository_info = Some(repository);
                next.file_tree = file_tree;
                next.is_loading = false;
                next.loading_message.clear();
                next.operation_error = None;
            }
        }
        Action::LoadFailed {
            generation,
            message,
        } => {
            if is_current_load(state, generation) {
                next.repository_info = None;
                next.file_tree = Vec::new();
                next.is_loading = false;
                next.loading_message.clear();
                next.operation_error = Some(message);
            }
        }
        Action::SetOperationError(error) => {
            next.operation_error = error;
        }
        Action::Reset => {
            next = ApplicationState {
                panel_widths: state.panel_widths,
                load_generation: state.load_generation.wrapping_add(1),
                ..ApplicationState::default()
            };
        }
        Action::ClearSessionError => {
            next.session_error = None;
        }
        Action::SetTransientError(error) => {
            next.transient_error = error;
        }
        Action::SetPanelWidths(widths) | Action::ResetPanelWidths(widths) => {
            next.panel_widths = widths;
        }
    }
    next
}

/// A load result is accepted only while its load is the one in flight
fn is_current_load(state: &ApplicationState, generation: u64) -> bool {
    state.is_loading && state.load_generation == generation
}
