//! Repository collaborator: URL parsing and tree fetching.
//!
//! The shell only depends on [`RepoFetcher`]; [`GitHubFetcher`] is the
//! production implementation backed by the GitHub REST API.
//!
//! Sub-modules:
//! - [`url`]     : `parse_github_url`
//! - [`fetcher`] : `RepoFetcher` trait and `FetchError`
//! - [`github`]  : `GitHubFetcher`

pub mod fetcher;
pub mod github;
pub mod url;

pub use fetcher::{FetchError, RepoFetcher};
pub use github::GitHubFetcher;
pub use url::parse_github_url;
