//! Credential management for Buda API authentication.

use secrecy::{ExposeSecret, SecretString};

use crate::error::BudaError;

/// Default environment variable holding the API key.
pub const API_KEY_VAR: &str = "BUDA_API_KEY";
/// Default environment variable holding the API secret.
pub const API_SECRET_VAR: &str = "BUDA_API_SECRET";

/// API credentials containing the key and secret.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier)
    pub api_key: String,
    /// The API secret (private, used as the HMAC key)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret.
    ///
    /// No validation happens here; use [`Credentials::from_parts`] when the
    /// values come from user input.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Build credentials from a key and secret that may each be empty.
    ///
    /// Both empty yields `Ok(None)` (unauthenticated mode), both present
    /// yields `Ok(Some(..))`. Supplying only one of them is rejected.
    pub fn from_parts(api_key: &str, api_secret: &str) -> Result<Option<Self>, BudaError> {
        match (api_key.is_empty(), api_secret.is_empty()) {
            (true, true) => Ok(None),
            (false, false) => Ok(Some(Self::new(api_key, api_secret))),
            (false, true) => Err(BudaError::InvalidCredentials(
                "API key given without an API secret".to_string(),
            )),
            (true, false) => Err(BudaError::InvalidCredentials(
                "API secret given without an API key".to_string(),
            )),
        }
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret),
        }
    }
}

impl From<Credentials> for StaticCredentials {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `BUDA_API_KEY` and `BUDA_API_SECRET`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Try to create credentials from default environment variables.
    ///
    /// Returns `Ok(None)` if neither variable is set and
    /// [`BudaError::InvalidCredentials`] if only one of them is.
    pub fn try_from_env() -> Result<Option<Self>, BudaError> {
        Self::try_from_env_vars(API_KEY_VAR, API_SECRET_VAR)
    }

    /// Try to create credentials from custom environment variable names.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str) -> Result<Option<Self>, BudaError> {
        let api_key = std::env::var(key_var).unwrap_or_default();
        let api_secret = std::env::var(secret_var).unwrap_or_default();

        Ok(Credentials::from_parts(&api_key, &api_secret)?
            .map(|credentials| Self { credentials }))
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("my_key", "super_secret");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("key", "secret");
        let creds = provider.get_credentials();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.expose_secret(), "secret");
    }

    #[test]
    fn test_from_parts_both_absent() {
        assert!(Credentials::from_parts("", "").unwrap().is_none());
    }

    #[test]
    fn test_from_parts_both_present() {
        let creds = Credentials::from_parts("key", "secret").unwrap().unwrap();
        assert_eq!(creds.api_key, "key");
    }

    #[test]
    fn test_from_parts_partial_rejected() {
        assert!(matches!(
            Credentials::from_parts("key", ""),
            Err(BudaError::InvalidCredentials(_))
        ));
        assert!(matches!(
            Credentials::from_parts("", "secret"),
            Err(BudaError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_env_credentials_missing_vars() {
        let result = EnvCredentials::try_from_env_vars(
            "BUDA_TEST_UNSET_KEY_VAR",
            "BUDA_TEST_UNSET_SECRET_VAR",
        )
        .unwrap();
        assert!(result.is_none());
    }
}
