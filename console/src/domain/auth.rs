//! Authentication primitives such as login credentials.
//!
//! Keep inbound form parsing outside the domain by exposing constructors
//! that validate string inputs before a payload reaches the session
//! operations on the store.

use thiserror::Error;
use zeroize::Zeroizing;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    /// Email was missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Failures reported by the session operations.
///
/// These are returned as values so the auth surface can branch without
/// exception handling; none of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No account matched the submitted email/password pair.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Registration collided with an existing account email.
    #[error("an account already exists for {email}")]
    DuplicateEmail {
        /// The email that was already taken.
        email: String,
    },
}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is trimmed and non-empty after trimming.
/// - `password` is non-empty but keeps caller-provided whitespace so
///   credential comparison is never surprising.
///
/// The password buffer is zeroised on drop.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialsError> {
        let normalized = email.trim();
        if normalized.is_empty() {
            return Err(CredentialsError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(CredentialsError::EmptyPassword);
        }

        Ok(Self {
            email: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email string used for account lookups.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
