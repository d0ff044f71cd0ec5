//! Access control: authentication and coarse role checks.
//!
//! Not a security boundary — credentials are compared in plaintext (see
//! [`Credential`]) and there are no tokens, lockout, or hashing. The gate
//! exists to keep privileged catalog operations behind an explicit role
//! check, nothing more.

pub mod gate;
pub mod role;
pub mod session;
pub mod user;

pub use gate::{AccessGate, AuthError};
pub use role::Role;
pub use session::{ActiveSession, SessionId};
pub use user::{Credential, User};
