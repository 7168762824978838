//! repo-shell: application shell for browsing a GitHub repository tree.
//!
//! The crate is organised around a pure reducer ([`state`]) and a [`shell`]
//! that owns the state and performs side effects: session persistence
//! ([`session`]), the transient error timer ([`notify`]), panel resizing and
//! layout selection ([`layout`]) and repository loading ([`repo`]).

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
pub mod http;
pub mod layout;
pub mod notify;
pub mod repo;
pub mod scheduler;
pub mod session;
pub mod shell;
pub mod state;

pub use shell::{LoadTicket, Shell, ShellOptions};
