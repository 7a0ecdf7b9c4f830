//! # Core Traits (Ports)
//!
//! The forum core never owns identity, membership or report data; it asks
//! these collaborators. Any plugin must implement them to be wired in.

use crate::models::{Report, Role, Session, UserRecord};

/// Identity contract. There is no credential verification.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait AuthProvider: Send + Sync {
    /// Derives the role for a submitted name
    fn role_for(&self, username: &str) -> Role;

    /// Opens a session, or `None` when the name is blank
    fn login(&self, username: &str) -> Option<Session>;

    /// Creates an account session; always a plain user
    fn register(&self, username: &str, email: &str) -> Option<Session>;
}

/// Membership listing for the admin panel.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait UserDirectory: Send + Sync {
    fn list_users(&self) -> Vec<UserRecord>;
}

/// Report listing for the admin panel.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ReportStore: Send + Sync {
    fn list_reports(&self) -> Vec<Report>;
}
