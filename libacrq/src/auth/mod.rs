//! Authentication handling for the registry.
//!
//! Credential acquisition is delegated to a [`CredentialProvider`], an
//! injected capability that stands in for the ambient, process-wide identity
//! chain of the hosting environment. Production code uses
//! [`EnvCredentialProvider`]; tests substitute [`StaticCredentialProvider`].

use crate::error::Result;
use std::env;


/// Credentials for registry authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// No authentication (anonymous access)
    Anonymous,

    /// HTTP Basic authentication with username and password
    Basic {
        /// Username for authentication
        username: String,
        /// Password for authentication
        password: String,
    },

    /// Bearer token authentication (OAuth2-style)
    Bearer {
        /// The bearer token
        token: String,
    },
}

impl Credentials {
    /// Creates anonymous credentials.
    pub fn anonymous() -> Self {
        Self::Anonymous
    }

    /// Creates Basic authentication credentials.
    ///
    /// # Examples
    ///
    /// ```
    /// use libacrq::auth::Credentials;
    ///
    /// let creds = Credentials::basic("username", "password");
    /// ```
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates Bearer token credentials.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Returns the Authorization header value for these credentials.
    ///
    /// # Examples
    ///
    /// ```
    /// use libacrq::auth::Credentials;
    ///
    /// let creds = Credentials::basic("user", "pass");
    /// assert_eq!(creds.to_header_value().unwrap(), "Basic dXNlcjpwYXNz");
    /// ```
    pub fn to_header_value(&self) -> Option<String> {
        match self {
            Self::Anonymous => None,
            Self::Basic { username, password } => {
                use base64::{Engine as _, engine::general_purpose};
                let credentials = format!("{}:{}", username, password);
                let encoded = general_purpose::STANDARD.encode(credentials);
                Some(format!("Basic {}", encoded))
            }
            Self::Bearer { token } => Some(format!("Bearer {}", token)),
        }
    }
}

/// Source of registry credentials.
///
/// The registry never reads credentials itself; it asks the provider once per
/// construction. This keeps credential resolution out of the query core and
/// lets tests inject fixed credentials.
pub trait CredentialProvider {
    /// Resolves the credentials to use for registry requests.
    fn credentials(&self) -> Result<Credentials>;
}

/// Resolves credentials from the process environment.
///
/// Resolution order: `ACR_TOKEN` (Bearer), then `ACR_USERNAME` and
/// `ACR_PASSWORD` (Basic), then anonymous access.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Creates a provider that reads the process environment.
    pub fn new() -> Self {
        Self
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn credentials(&self) -> Result<Credentials> {
        if let Ok(token) = env::var("ACR_TOKEN")
            && !token.is_empty()
        {
            return Ok(Credentials::bearer(token));
        }

        if let (Ok(username), Ok(password)) = (env::var("ACR_USERNAME"), env::var("ACR_PASSWORD"))
            && !username.is_empty()
        {
            return Ok(Credentials::basic(username, password));
        }

        Ok(Credentials::anonymous())
    }
}

/// Provider returning fixed credentials.
///
/// # Examples
///
/// ```
/// use libacrq::auth::{CredentialProvider, Credentials, StaticCredentialProvider};
///
/// let provider = StaticCredentialProvider::new(Credentials::bearer("token123"));
/// assert_eq!(
///     provider.credentials().unwrap(),
///     Credentials::bearer("token123")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credentials: Credentials,
}

impl StaticCredentialProvider {
    /// Creates a provider that always returns the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Creates a provider for anonymous access.
    pub fn anonymous() -> Self {
        Self::new(Credentials::Anonymous)
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn credentials(&self) -> Result<Credentials> {
        Ok(self.credentials.clone())
    }
}
