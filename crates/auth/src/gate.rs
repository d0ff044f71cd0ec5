//! The access gate: user directory + single-session state machine.

use std::collections::HashMap;

use thiserror::Error;

use stockdesk_core::Username;

use crate::session::ActiveSession;
use crate::user::{Credential, User};
use crate::Role;

/// Authentication/authorization failure.
///
/// All variants are recoverable user-input errors; the caller reports them
/// and re-prompts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A user with this username already exists.
    #[error("user already exists: {0}")]
    AlreadyExists(String),

    /// Unknown username or wrong credential. Deliberately one variant for
    /// both cases so callers cannot probe which usernames exist.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// The current session (if any) does not hold the required role.
    #[error("permission denied: requires the {required} role")]
    PermissionDenied { required: Role },
}

/// Tracks the user directory and at most one logged-in identity.
///
/// State machine: `LoggedOut` ⇄ `LoggedIn(identity)`. A successful `login`
/// while already logged in silently replaces the session (logged at INFO).
/// The gate is an explicit object passed to whoever needs it — there is no
/// process-wide singleton, so growing to multiple sessions later means
/// holding more than one gate, not a redesign.
#[derive(Debug, Default)]
pub struct AccessGate {
    users: HashMap<Username, User>,
    session: Option<ActiveSession>,
}

impl AccessGate {
    /// A gate with no users and nobody logged in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user. Fails with `AlreadyExists` if the username is taken.
    pub fn create_user(
        &mut self,
        username: Username,
        credential: Credential,
        role: Role,
    ) -> Result<(), AuthError> {
        if self.users.contains_key(&username) {
            return Err(AuthError::AlreadyExists(username.as_str().to_string()));
        }
        self.users
            .insert(username.clone(), User::new(username, credential, role));
        Ok(())
    }

    /// Authenticate and install the current session.
    ///
    /// Fails with `InvalidCredentials` when the username is unknown or the
    /// credential does not match; the session is left untouched in that
    /// case.
    pub fn login(
        &mut self,
        username: &Username,
        credential: &Credential,
    ) -> Result<&ActiveSession, AuthError> {
        let user = self
            .users
            .get(username)
            .filter(|user| user.credential().matches(credential))
            .ok_or(AuthError::InvalidCredentials)?;

        let session = ActiveSession::start(user.username().clone(), user.role());
        if let Some(previous) = &self.session {
            tracing::info!(
                previous = %previous.username(),
                next = %session.username(),
                "replacing active session"
            );
        }
        tracing::info!(
            session_id = %session.session_id(),
            username = %session.username(),
            role = %session.role(),
            "login"
        );
        Ok(self.session.insert(session))
    }

    /// Clear the current session. No-op when nobody is logged in.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(
                session_id = %session.session_id(),
                username = %session.username(),
                "logout"
            );
        }
    }

    /// Guard for privileged operations: fails with `PermissionDenied`
    /// unless a session is active and holds exactly `role`.
    pub fn require_role(&self, role: Role) -> Result<(), AuthError> {
        match &self.session {
            Some(session) if session.role() == role => Ok(()),
            _ => Err(AuthError::PermissionDenied { required: role }),
        }
    }

    /// The current session, if any.
    pub fn current(&self) -> Option<&ActiveSession> {
        self.session.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn username(raw: &str) -> Username {
        Username::new(raw).unwrap()
    }

    fn seeded() -> AccessGate {
        let mut gate = AccessGate::new();
        gate.create_user(username("admin"), Credential::new("adminpass"), Role::Admin)
            .unwrap();
        gate.create_user(username("user"), Credential::new("userpass"), Role::User)
            .unwrap();
        gate
    }

    #[test]
    fn create_user_rejects_duplicate_usernames() {
        let mut gate = seeded();

        let err = gate
            .create_user(username("admin"), Credential::new("other"), Role::User)
            .unwrap_err();

        assert_eq!(err, AuthError::AlreadyExists("admin".to_string()));
        // The original record must survive the failed creation.
        gate.login(&username("admin"), &Credential::new("adminpass"))
            .unwrap();
    }

    #[test]
    fn login_with_wrong_credential_fails() {
        let mut gate = seeded();

        let err = gate
            .login(&username("admin"), &Credential::new("wrong"))
            .unwrap_err();

        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(gate.current().is_none());
    }

    #[test]
    fn login_with_unknown_username_fails_identically() {
        let mut gate = seeded();

        let err = gate
            .login(&username("nobody"), &Credential::new("whatever"))
            .unwrap_err();

        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn successful_login_installs_the_session() {
        let mut gate = seeded();

        gate.login(&username("admin"), &Credential::new("adminpass"))
            .unwrap();

        let session = gate.current().unwrap();
        assert_eq!(session.username(), &username("admin"));
        assert_eq!(session.role(), Role::Admin);
    }

    #[test]
    fn require_role_demands_an_exact_match() {
        let mut gate = seeded();
        gate.login(&username("admin"), &Credential::new("adminpass"))
            .unwrap();

        gate.require_role(Role::Admin).unwrap();
        let err = gate.require_role(Role::User).unwrap_err();
        assert_eq!(err, AuthError::PermissionDenied { required: Role::User });
    }

    #[test]
    fn require_role_fails_when_logged_out() {
        let gate = seeded();

        let err = gate.require_role(Role::Admin).unwrap_err();
        assert_eq!(
            err,
            AuthError::PermissionDenied {
                required: Role::Admin
            }
        );
    }

    #[test]
    fn logout_clears_the_session_and_is_idempotent() {
        let mut gate = seeded();
        gate.login(&username("user"), &Credential::new("userpass"))
            .unwrap();

        gate.logout();
        assert!(gate.current().is_none());

        // Logging out while logged out is a no-op.
        gate.logout();
        assert!(gate.current().is_none());
    }

    #[test]
    fn login_over_an_active_session_replaces_it() {
        let mut gate = seeded();

        let first_id = gate
            .login(&username("admin"), &Credential::new("adminpass"))
            .unwrap()
            .session_id();
        gate.login(&username("user"), &Credential::new("userpass"))
            .unwrap();

        let session = gate.current().unwrap();
        assert_eq!(session.username(), &username("user"));
        assert_ne!(session.session_id(), first_id);
    }

    #[test]
    fn failed_login_keeps_the_existing_session() {
        let mut gate = seeded();
        gate.login(&username("admin"), &Credential::new("adminpass"))
            .unwrap();

        let _ = gate.login(&username("user"), &Credential::new("wrong"));

        assert_eq!(gate.current().unwrap().username(), &username("admin"));
    }
}
