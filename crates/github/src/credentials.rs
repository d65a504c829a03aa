//! Authentication for the status call.

use secrecy::SecretString;

/// How a status request authenticates against GitHub.
///
/// Secret parts are zeroed on drop and redacted in debug output.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// HTTP basic authentication with stored repository credentials.
    Basic {
        /// GitHub user name.
        username: String,
        /// Decrypted password or personal access token.
        password: SecretString,
    },
    /// OAuth2 bearer token.
    OAuth2 {
        /// The token.
        token: SecretString,
    },
}

impl Credentials {
    /// Basic credentials.
    pub fn basic(username: impl Into<String>, password: SecretString) -> Self {
        Self::Basic {
            username: username.into(),
            password,
        }
    }

    /// OAuth2 token credentials.
    pub fn oauth2(token: SecretString) -> Self {
        Self::OAuth2 { token }
    }

    /// Scheme name for log output.
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        match self {
            Self::Basic { .. } => "basic",
            Self::OAuth2 { .. } => "oauth2",
        }
    }
}
