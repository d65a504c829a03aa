//! `owner/name` identities of GitHub repositories.

use chainstatus_core::{Error, Result};
use std::fmt;

/// Identity of a repository on GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryId {
    /// User or organization owning the repository.
    pub owner: String,
    /// Repository name.
    pub name: String,
}

impl RepositoryId {
    /// Create an identity from its parts.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse an `owner/name` identifier.
    pub fn from_id(id: &str) -> Result<Self> {
        let trimmed = id.trim().trim_matches('/');
        let Some((owner, name)) = trimmed.split_once('/') else {
            return Err(Error::invalid_repository(id, "expected owner/name"));
        };
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(Error::invalid_repository(id, "expected owner/name"));
        }
        Ok(Self::new(owner, name))
    }

    /// Derive the identity from a clone URL.
    ///
    /// Accepts `scheme://[user@]host[:port]/owner/name[/...]` and the
    /// scp-like `[user@]host:owner/name` form. The first two path segments
    /// are the owner and the name. A `.git` suffix is not stripped here.
    pub fn from_url(url: &str) -> Result<Self> {
        let path = Self::url_path(url)
            .ok_or_else(|| Error::invalid_repository(url, "not a repository URL"))?;

        let mut segments = path.split('/').filter(|segment| !segment.is_empty());
        match (segments.next(), segments.next()) {
            (Some(owner), Some(name)) => Ok(Self::new(owner, name)),
            _ => Err(Error::invalid_repository(url, "URL path has no owner/name")),
        }
    }

    fn url_path(url: &str) -> Option<&str> {
        let url = url.trim();
        let url = url.split(['?', '#']).next().unwrap_or(url);

        if let Some((scheme, rest)) = url.split_once("://") {
            if scheme.is_empty() {
                return None;
            }
            let (authority, path) = rest.split_once('/')?;
            return (!authority.is_empty()).then_some(path);
        }

        // scp-like: [user@]host:path
        let (host, path) = url.split_once(':')?;
        let host = host.rsplit('@').next().unwrap_or(host);
        (!host.is_empty() && !host.contains('/')).then_some(path)
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        let id = RepositoryId::from_id("acme/app").unwrap();
        assert_eq!(id.owner, "acme");
        assert_eq!(id.name, "app");
        assert_eq!(id.to_string(), "acme/app");
    }

    #[test]
    fn test_from_id_invalid() {
        for raw in ["", "acme", "/app", "acme/", "a/b/c"] {
            assert!(RepositoryId::from_id(raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn test_from_https_url() {
        let id = RepositoryId::from_url("https://github.com/acme/app").unwrap();
        assert_eq!(id, RepositoryId::new("acme", "app"));
    }

    #[test]
    fn test_from_url_with_credentials_and_port() {
        let id = RepositoryId::from_url("https://bot:pw@ghe.example.com:8443/acme/app").unwrap();
        assert_eq!(id, RepositoryId::new("acme", "app"));
    }

    #[test]
    fn test_from_url_extra_segments_and_query() {
        let id = RepositoryId::from_url("https://github.com/acme/app/tree/main?tab=1").unwrap();
        assert_eq!(id, RepositoryId::new("acme", "app"));
    }

    #[test]
    fn test_from_ssh_urls() {
        assert_eq!(
            RepositoryId::from_url("git@github.com:acme/app").unwrap(),
            RepositoryId::new("acme", "app")
        );
        assert_eq!(
            RepositoryId::from_url("ssh://git@github.com/acme/app").unwrap(),
            RepositoryId::new("acme", "app")
        );
    }

    #[test]
    fn test_from_url_invalid() {
        for raw in ["", "https://github.com", "https://github.com/acme", "acme", "://x/a/b"] {
            assert!(RepositoryId::from_url(raw).is_err(), "{raw}");
        }
    }
}
