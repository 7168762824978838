//! GitHub REST API implementation of [`RepoFetcher`].
//!
//! Two requests per load: the repository metadata (for the default branch)
//! and the recursive tree of that branch.

use super::fetcher::{FetchError, RepoFetcher};
use crate::http;
use crate::state::{FileNode, RepositoryRef};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use ureq::Agent;

#[derive(Debug, Deserialize)]
struct RepoMetadata {
    default_branch: String,
}

#[derive(Debug, Deserialize)]
struct TreeResponse {
    tree: Vec<FileNode>,
    #[serde(default)]
    truncated: bool,
}

/// Fetches repository trees from the GitHub REST API
pub struct GitHubFetcher {
    agent: Agent,
    api_base: String,
    token: Option<String>,
}

impl GitHubFetcher {
    /// `api_base` is usually `https://api.github.com`
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            agent: http::agent(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Authenticate with a token (raises the rate limit)
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Read the token from `GITHUB_TOKEN`
    pub fn with_env_token(self) -> Self {
        self.with_token(std::env::var("GITHUB_TOKEN").ok())
    }

    pub fn repo_url(&self, repository: &RepositoryRef) -> String {
        format!(
            "{}/repos/{}/{}",
            self.api_base, repository.owner, repository.repo
        )
    }

    pub fn tree_url(&self, repository: &RepositoryRef, branch: &str) -> String {
        format!("{}/git/trees/{}?recursive=1", self.repo_url(repository), branch)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        log::debug!("GET {}", url);
        let mut request = self
            .agent
            .get(url)
            .header("User-Agent", http::USER_AGENT)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let body = match request.call() {
            Ok(response) => response
                .into_body()
                .with_config()
                .limit(http::MAX_API_RESPONSE_SIZE)
                .read_to_string()
                .map_err(|e| FetchError::Unknown(format!("Failed to read response body: {e}")))?,
            Err(ureq::Error::StatusCode(status)) => {
                log::warn!("GitHub API returned status {} for {}", status, url);
                return Err(status_error(status));
            }
            Err(e) => return Err(FetchError::Unknown(format!("Request to {url} failed: {e}"))),
        };

        serde_json::from_str(&body)
            .map_err(|e| FetchError::Unknown(format!("Failed to parse JSON from {url}: {e}")))
    }
}

/// Map an HTTP error status to a user-facing API error
pub fn status_error(status: u16) -> FetchError {
    let message = match status {
        404 => "Repository not found or is private.".to_string(),
        401 => "GitHub rejected the access token.".to_string(),
        403 | 429 => "GitHub API rate limit exceeded. Please try again later.".to_string(),
        other => format!("GitHub API error (status {other})."),
    };
    FetchError::Api {
        status: Some(status),
        message,
    }
}

impl RepoFetcher for GitHubFetcher {
    fn fetch_repo_tree(&self, repository: &RepositoryRef) -> Result<Vec<FileNode>, FetchError> {
        let metadata: RepoMetadata = self.get_json(&self.repo_url(repository))?;
        let tree: TreeResponse =
            self.get_json(&self.tree_url(repository, &metadata.default_branch))?;

        if tree.truncated {
            log::warn!(
                "Tree for {} was truncated by the API ({} entries returned)",
                repository.full_name(),
                tree.tree.len()
            );
        }
        log::info!(
            "Fetched {} tree entries for {}@{}",
            tree.tree.len(),
            repository.full_name(),
            metadata.default_branch
        );
        Ok(tree.tree)
    }
}
