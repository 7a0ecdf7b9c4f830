//! # tw-auth-simple
//!
//! Name-matching implementation of `AuthProvider`.
//! There are no passwords: one reserved name is the administrator, every
//! other name is a regular member.

use tw_core::{AuthProvider, Role, Session};

pub const DEFAULT_ADMIN_NAME: &str = "admin";

pub struct SimpleAuthProvider {
    /// Reserved name granting the admin role, compared case-insensitively
    admin_name: String,
}

impl SimpleAuthProvider {
    /// Accepts the reserved admin name (e.g., from configuration)
    pub fn new(admin_name: &str) -> Self {
        Self {
            admin_name: admin_name.trim().to_lowercase(),
        }
    }
}

impl Default for SimpleAuthProvider {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_NAME)
    }
}

impl AuthProvider for SimpleAuthProvider {
    /// Matches the name exactly as submitted; surrounding spaces make it a
    /// regular member name.
    fn role_for(&self, username: &str) -> Role {
        if username.to_lowercase() == self.admin_name {
            Role::Admin
        } else {
            Role::User
        }
    }

    fn login(&self, submitted: &str) -> Option<Session> {
        let username = submitted.trim();
        if username.is_empty() {
            return None;
        }
        let role = self.role_for(submitted);
        log::debug!("login accepted for {} as {}", username, role.as_str());
        Some(Session::new(username, role))
    }

    /// New accounts are never administrators, whatever the name.
    fn register(&self, username: &str, email: &str) -> Option<Session> {
        let username = username.trim();
        if username.is_empty() || email.trim().is_empty() {
            return None;
        }
        Some(Session::new(username, Role::User))
    }
}
