//! Error presentation and the transient-error dismiss timer.
//!
//! Three independent channels feed one banner:
//! - session error: the restored session record was corrupted
//! - transient error: short-lived notices such as failed session writes
//! - operation error: the current repository load failed
//!
//! The banner shows the highest-priority channel (session > transient >
//! operation). Only the transient channel has a timer.

use crate::scheduler::ScheduledTask;
use crate::state::ApplicationState;
use std::time::{Duration, Instant};

/// Shown when the saved session record cannot be parsed
pub const SESSION_CORRUPTED_MESSAGE: &str =
    "Saved session data was corrupted and has been ignored.";

/// Shown when a repository URL cannot be parsed
pub const INVALID_URL_MESSAGE: &str = "Invalid GitHub URL.";

/// Shown when a load fails without a typed error message
pub const UNKNOWN_LOAD_ERROR_MESSAGE: &str =
    "An unknown error occurred while loading the repository.";

/// Error channels in banner priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorChannel {
    Session,
    Transient,
    Operation,
}

/// The error currently driving the banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub channel: ErrorChannel,
    pub message: String,
}

/// Pick the banner error by priority
pub fn visible_error(state: &ApplicationState) -> Option<ErrorBanner> {
    let banner = |channel, message: &String| ErrorBanner {
        channel,
        message: message.clone(),
    };
    if let Some(message) = &state.session_error {
        return Some(banner(ErrorChannel::Session, message));
    }
    if let Some(message) = &state.transient_error {
        return Some(banner(ErrorChannel::Transient, message));
    }
    state
        .operation_error
        .as_ref()
        .map(|message| banner(ErrorChannel::Operation, message))
}

/// Owns the dismiss timer for the transient channel.
///
/// Last write wins: every new message restarts the timer, nothing is queued.
#[derive(Debug)]
pub struct ErrorNotifier {
    timeout: Duration,
    dismiss: ScheduledTask<()>,
}

impl ErrorNotifier {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            dismiss: ScheduledTask::new(),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// A transient error was set at `now`; (re)start the timer
    pub fn transient_set(&mut self, now: Instant) {
        if self.dismiss.arm(now + self.timeout, ()) {
            log::debug!("Transient error replaced, dismiss timer restarted");
        }
    }

    pub fn dismiss_deadline(&self) -> Option<Instant> {
        self.dismiss.deadline()
    }

    /// True if the dismiss timer has expired; the caller clears the channel
    pub fn poll(&mut self, now: Instant) -> bool {
        self.dismiss.take_due(now).is_some()
    }

    /// Stop the timer; used when the channel is cleared by some other path
    pub fn cancel(&mut self) {
        self.dismiss.cancel();
    }
}
