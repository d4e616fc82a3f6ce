//! Session operations on the entity store.
//!
//! Authentication is a thin boundary: a linear credential scan over the
//! in-memory user collection. Failures are values ([`AuthError`]), never
//! panics, so the auth surface can branch on them directly.

use tracing::{info, warn};

use super::auth::{AuthError, LoginCredentials};
use super::store::EntityStore;
use super::user::{derived_avatar_url, RegistrationDraft, Role, User, UserId};

impl EntityStore {
    /// Authenticate against the stored accounts.
    ///
    /// Exact match on both email and password establishes the session; the
    /// session copy has its credential stripped.
    pub fn login(&mut self, credentials: &LoginCredentials) -> Result<&User, AuthError> {
        let matched = self.users.iter().find(|user| {
            user.email == credentials.email()
                && user.password.as_deref() == Some(credentials.password())
        });
        match matched {
            Some(user) => {
                let session = user.sanitized();
                info!(user_id = %session.id, "login succeeded");
                Ok(self.current_user.insert(session))
            }
            None => {
                warn!("login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Establish a transient guest session.
    ///
    /// The synthesized account is never appended to the user collection and
    /// disappears with the session.
    pub fn guest_login(&mut self) -> &User {
        let guest = User {
            id: UserId::random(),
            name: "Guest".to_owned(),
            email: String::new(),
            password: None,
            role: Role::Guest,
            avatar_url: derived_avatar_url("guest"),
        };
        info!(user_id = %guest.id, "guest session started");
        self.current_user.insert(guest)
    }

    /// Register a new account and sign it in immediately.
    ///
    /// The email is compared case-sensitively against existing accounts; a
    /// collision leaves both the collection and the session untouched. New
    /// accounts always get the `User` role and a derived avatar.
    pub fn register(&mut self, draft: RegistrationDraft) -> Result<&User, AuthError> {
        if self.users.iter().any(|user| user.email == draft.email) {
            warn!("registration rejected: email already taken");
            return Err(AuthError::DuplicateEmail { email: draft.email });
        }

        let account = User {
            id: UserId::random(),
            avatar_url: derived_avatar_url(&draft.name),
            name: draft.name,
            email: draft.email,
            password: Some(draft.password),
            role: Role::User,
        };
        let session = account.sanitized();
        info!(user_id = %account.id, "account registered");
        self.users.push(account);
        Ok(self.current_user.insert(session))
    }

    /// Drop the current session, if any. Idempotent.
    pub fn clear_session(&mut self) {
        if let Some(user) = self.current_user.take() {
            info!(user_id = %user.id, "session ended");
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
