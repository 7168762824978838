//! Shared integration test helpers for repo-shell.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{TestShell, FakeFetcher, sample_tree};
//! ```
//!
//! Rust integration tests use `mod common;` (not `use`) to bring in helpers
//! from `tests/common/mod.rs`. The `#[allow(dead_code)]` attribute suppresses
//! warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use parking_lot::Mutex;
use repo_shell::layout::PanelBounds;
use repo_shell::repo::{FetchError, RepoFetcher};
use repo_shell::scheduler::ManualClock;
use repo_shell::session::{MemoryStore, PersistenceStore};
use repo_shell::state::{FileNode, RepositoryRef};
use repo_shell::{Shell, ShellOptions};
use std::collections::VecDeque;
use std::sync::Arc;

pub const ACME_URL: &str = "https://github.com/acme/widget";

/// Workspace wide enough for 1200px of panels plus two 4px handles
pub const WORKSPACE: PanelBounds = PanelBounds {
    x: 0.0,
    y: 0.0,
    width: 1208.0,
    height: 800.0,
};

/// The three-entry tree returned for acme/widget
pub fn sample_tree() -> Vec<FileNode> {
    vec![
        FileNode::tree("src"),
        FileNode::blob("src/main.rs", 120),
        FileNode::blob("README.md", 42),
    ]
}

/// A shell over an in-memory store and a manual clock.
///
/// The store and clock are shared with the shell, so tests can inspect the
/// stored record and move time forward.
pub struct TestShell {
    pub shell: Shell,
    pub store: MemoryStore,
    pub clock: ManualClock,
}

impl TestShell {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// Hydrate from an existing store, as after a reload
    pub fn with_store(store: MemoryStore) -> Self {
        Self::with_options(store, ShellOptions::default())
    }

    pub fn with_options(store: MemoryStore, options: ShellOptions) -> Self {
        let clock = ManualClock::new();
        let mut shell = Shell::with_clock(
            Box::new(store.clone()),
            options,
            Arc::new(clock.clone()),
        );
        shell.set_container(WORKSPACE);
        Self {
            shell,
            store,
            clock,
        }
    }

    /// Raw session record, if one is stored
    pub fn record(&self) -> Option<serde_json::Value> {
        let text = self
            .store
            .get(repo_shell_config::layout_constants::SESSION_STORAGE_KEY)
            .expect("memory store reads never fail")?;
        Some(serde_json::from_str(&text).expect("stored record is JSON"))
    }
}

impl Default for TestShell {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetcher that replays scripted results and records what was asked for
#[derive(Default)]
pub struct FakeFetcher {
    results: Mutex<VecDeque<Result<Vec<FileNode>, FetchError>>>,
    pub requests: Mutex<Vec<RepositoryRef>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning(result: Result<Vec<FileNode>, FetchError>) -> Self {
        let fetcher = Self::new();
        fetcher.push(result);
        fetcher
    }

    pub fn push(&self, result: Result<Vec<FileNode>, FetchError>) {
        self.results.lock().push_back(result);
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

impl RepoFetcher for FakeFetcher {
    fn fetch_repo_tree(&self, repository: &RepositoryRef) -> Result<Vec<FileNode>, FetchError> {
        self.requests.lock().push(repository.clone());
        self.results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Unknown("no scripted result".to_string())))
    }
}
