//! Credential resolution from configuration.
//!
//! The API key can come from the config file or from the GEMINI_API_KEY
//! environment variable. Resolution happens at startup, before the terminal
//! enters raw mode, so a missing credential can be reported on stderr.

use super::types::AiConfig;

/// Environment variable consulted when the config file carries no key.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to the API.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl AiConfig {
    /// Resolve the API key from the config file, falling back to the
    /// environment.
    pub fn resolve_credential(&self) -> CredentialStatus {
        self.resolve_credential_with(std::env::var(API_KEY_ENV_VAR).ok())
    }

    /// Resolution seam with an explicit environment value, so tests do not
    /// depend on the ambient process environment.
    pub fn resolve_credential_with(&self, env_key: Option<String>) -> CredentialStatus {
        if let Some(ref key) = self.api_key {
            if !key.is_empty() {
                return CredentialStatus::Configured(SecureString::new(key.clone()));
            }
        }
        if let Some(key) = env_key {
            if !key.is_empty() {
                return CredentialStatus::Configured(SecureString::new(key));
            }
        }
        CredentialStatus::Unconfigured {
            reason: format!("api_key is not set and {} is unset", API_KEY_ENV_VAR),
        }
    }

    /// Check whether a credential is available.
    pub fn is_configured(&self) -> bool {
        matches!(self.resolve_credential(), CredentialStatus::Configured(_))
    }
}
