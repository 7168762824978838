//! Parsing of user-entered GitHub repository URLs.

use crate::state::RepositoryRef;
use url::Url;

const GITHUB_HOSTS: &[&str] = &["github.com", "www.github.com"];

/// Resolve `https://github.com/<owner>/<repo>` (and common variants) to a
/// repository reference.
///
/// Accepted variants: `http` or `https`, optional `www.`, a missing scheme
/// (`github.com/owner/repo`), a trailing slash, a `.git` suffix, and extra
/// path segments such as `/tree/main/src`. Anything else is `None`.
pub fn parse_github_url(input: &str) -> Option<RepositoryRef> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let with_scheme = if GITHUB_HOSTS
        .iter()
        .any(|host| input.starts_with(&format!("{host}/")))
    {
        format!("https://{input}")
    } else {
        input.to_string()
    };

    let url = Url::parse(&with_scheme).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    let host = url.host_str()?;
    if !GITHUB_HOSTS.contains(&host) {
        return None;
    }

    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
    let owner = segments.next()?;
    let repo = segments.next()?;
    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    if !is_valid_owner(owner) || !is_valid_repo(repo) {
        return None;
    }
    Some(RepositoryRef::new(owner, repo))
}

fn is_valid_owner(owner: &str) -> bool {
    !owner.is_empty()
        && !owner.starts_with('-')
        && owner.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn is_valid_repo(repo: &str) -> bool {
    !repo.is_empty()
        && repo != "."
        && repo != ".."
        && repo
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(input: &str) -> Option<(String, String)> {
        parse_github_url(input).map(|r| (r.owner, r.repo))
    }

    #[test]
    fn test_plain_url() {
        assert_eq!(
            parsed("https://github.com/acme/widget"),
            Some(("acme".to_string(), "widget".to_string()))
        );
    }

    #[test]
    fn test_variants() {
        let expected = Some(("acme".to_string(), "widget".to_string()));
        assert_eq!(parsed("https://github.com/acme/widget/"), expected);
        assert_eq!(parsed("https://github.com/acme/widget.git"), expected);
        assert_eq!(parsed("http://www.github.com/acme/widget"), expected);
        assert_eq!(parsed("github.com/acme/widget"), expected);
        assert_eq!(parsed("  https://github.com/acme/widget/tree/main/src "), expected);
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(parsed("not-a-url"), None);
        assert_eq!(parsed(""), None);
        assert_eq!(parsed("https://github.com/acme"), None);
        assert_eq!(parsed("https://gitlab.com/acme/widget"), None);
        assert_eq!(parsed("ftp://github.com/acme/widget"), None);
        assert_eq!(parsed("https://github.com/ac me/widget"), None);
        assert_eq!(parsed("https://github.com/acme/.."), None);
    }
}
