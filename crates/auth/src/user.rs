//! User account record and its opaque credential.

use serde::{Deserialize, Serialize};

use stockdesk_core::Username;

use crate::Role;

/// Opaque secret checked by plaintext equality.
///
/// This is deliberately not a security feature: no hashing, no lockout. The
/// type still redacts itself in Debug output so a secret cannot leak through
/// logs, and it is the single seam where a hashed comparison would slot in.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Plaintext equality check.
    pub fn matches(&self, other: &Credential) -> bool {
        self.0 == other.0
    }
}

impl core::fmt::Debug for Credential {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// A user account: unique username, credential, role.
///
/// Accounts are created once at startup and never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    username: Username,
    credential: Credential,
    role: Role,
}

impl User {
    pub fn new(username: Username, credential: Credential, role: Role) -> Self {
        Self {
            username,
            credential,
            role,
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub(crate) fn credential(&self) -> &Credential {
        &self.credential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_debug_is_redacted() {
        let rendered = format!("{:?}", Credential::new("hunter2"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("redacted"));
    }

    #[test]
    fn credential_matches_is_exact_equality() {
        let stored = Credential::new("adminpass");
        assert!(stored.matches(&Credential::new("adminpass")));
        assert!(!stored.matches(&Credential::new("AdminPass")));
        assert!(!stored.matches(&Credential::new("")));
    }
}
