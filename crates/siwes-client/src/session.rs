//! Who is using this client right now.

use siwes_store::{Store, User};

use crate::auth::{Credentials, IdentityResolver};

/// `LoggedOut` (initial) or `LoggedIn(user)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(User),
}

impl Session {
    pub fn new() -> Self {
        Self::LoggedOut
    }

    /// Resolve `credentials` and switch to the matching user.
    ///
    /// On no match the session keeps whatever state it had and `None` is
    /// returned.
    pub fn login(
        &mut self,
        store: &Store,
        resolver: &dyn IdentityResolver,
        credentials: &Credentials,
    ) -> Option<User> {
        let Some(user) = resolver.resolve(store, credentials) else {
            tracing::warn!(
                identifier = %credentials.identifier,
                role_hint = ?credentials.role_hint,
                "login failed: no matching user"
            );
            return None;
        };

        tracing::info!(user_id = %user.id, role = %user.role, "logged in");
        *self = Self::LoggedIn(user.clone());
        Some(user.clone())
    }

    /// Always ends up logged out, whatever the previous state.
    pub fn logout(&mut self) {
        if let Self::LoggedIn(user) = self {
            tracing::info!(user_id = %user.id, "logged out");
        }
        *self = Self::LoggedOut;
    }

    pub fn current_user(&self) -> Option<&User> {
        match self {
            Self::LoggedIn(user) => Some(user),
            Self::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }
}
