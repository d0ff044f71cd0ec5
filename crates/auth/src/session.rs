//! Session state: the single current logged-in identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockdesk_core::Username;

use crate::Role;

/// Identifier of a login session, used only for log correlation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// UUIDv7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SessionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// The identity currently logged in through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    session_id: SessionId,
    username: Username,
    role: Role,
    logged_in_at: DateTime<Utc>,
}

impl ActiveSession {
    pub(crate) fn start(username: Username, role: Role) -> Self {
        Self {
            session_id: SessionId::new(),
            username,
            role,
            logged_in_at: Utc::now(),
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn logged_in_at(&self) -> DateTime<Utc> {
        self.logged_in_at
    }
}
