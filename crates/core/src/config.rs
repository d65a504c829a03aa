//! Configuration keys read from the host, and their parsing.

/// Chain custom configuration key that turns status reporting off.
pub const DISABLED_KEY: &str = "custom.gitHubStatus.disabled";

/// Build variable holding the OAuth token. Its presence opts a chain in.
pub const ACCESS_KEY_VARIABLE: &str = "github.status_access_key";

/// Status context used when none is configured.
pub const DEFAULT_STATUS_CONTEXT: &str = "continuous-integration/bamboo";

/// Interpretation of the disable flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledFlag {
    /// No value configured.
    Unset,
    /// A recognised boolean.
    Value(bool),
    /// Something other than `true`/`false`. Treated as not disabled.
    Unrecognised,
}

impl DisabledFlag {
    /// Parse the raw configuration value, case-insensitively. Padding is not
    /// trimmed, so ` true ` is unrecognised.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Unset;
        };
        if raw.is_empty() {
            Self::Unset
        } else if raw.eq_ignore_ascii_case("true") {
            Self::Value(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Self::Value(false)
        } else {
            Self::Unrecognised
        }
    }

    /// Whether reporting is turned off. Only an explicit `true` disables.
    #[must_use]
    pub const fn is_disabled(self) -> bool {
        matches!(self, Self::Value(true))
    }
}
