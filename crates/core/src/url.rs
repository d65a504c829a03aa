//! URL helpers for result links and clone URLs.

const GIT_SUFFIX: &str = ".git";

/// Strip a trailing `.git` (any case) from a clone URL.
///
/// Only the last four characters are removed, so applying this twice is the
/// same as applying it once unless the URL ends in `.git.git`.
#[must_use]
pub fn normalize_repository_url(url: &str) -> &str {
    let split = url.len().saturating_sub(GIT_SUFFIX.len());
    match (url.get(..split), url.get(split..)) {
        (Some(head), Some(tail)) if tail.eq_ignore_ascii_case(GIT_SUFFIX) => head,
        _ => url,
    }
}

/// Link to a plan result on the build server.
///
/// One trailing `/` is removed from the base URL before `/browse/<key>` is
/// appended.
#[must_use]
pub fn result_url(base_url: &str, plan_result_key: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{base}/browse/{plan_result_key}")
}
