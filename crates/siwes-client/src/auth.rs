//! Identity resolution: turning what a user typed into a [`User`].
//!
//! [`DemoRoleSelector`] checks no credential at all.  It exists so the
//! workbook can be explored without accounts.  A deployment with real users
//! plugs its own [`IdentityResolver`] into [`AppState`](crate::AppState)
//! and keeps the same `login` contract.

use siwes_shared::Role;
use siwes_store::{Store, User};

/// What the login form submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Usually an email address.
    pub identifier: String,
    /// When set, the demo selector picks a user by role instead.
    pub role_hint: Option<Role>,
}

impl Credentials {
    pub fn email(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            role_hint: None,
        }
    }

    pub fn role(role: Role) -> Self {
        Self {
            identifier: String::new(),
            role_hint: Some(role),
        }
    }
}

/// Maps credentials to a stored user, or `None` when nobody matches.
pub trait IdentityResolver: Send + Sync {
    fn resolve<'s>(&self, store: &'s Store, credentials: &Credentials) -> Option<&'s User>;
}

/// Demo login: the first user holding the hinted role, otherwise the first
/// user whose email equals the identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoRoleSelector;

impl IdentityResolver for DemoRoleSelector {
    fn resolve<'s>(&self, store: &'s Store, credentials: &Credentials) -> Option<&'s User> {
        match credentials.role_hint {
            Some(role) => store.first_user_with_role(role),
            None => store.find_user_by_email(&credentials.identifier),
        }
    }
}
