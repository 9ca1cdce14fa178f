//! Per-client application state.
//!
//! The [`Store`] is shared by every client through a [`SharedStore`]
//! handle, while each [`AppState`] owns its own [`Session`].  Two clients
//! therefore never see each other's login.

use std::sync::{Arc, Mutex, MutexGuard};

use siwes_shared::Role;
use siwes_store::{Store, User};

use crate::auth::{DemoRoleSelector, IdentityResolver};
use crate::error::{ClientError, Result};
use crate::session::Session;

/// Handle to the store shared by all clients of the process.
pub type SharedStore = Arc<Mutex<Store>>;

/// Wrap a store so it can be handed to several clients.
pub fn share(store: Store) -> SharedStore {
    Arc::new(Mutex::new(store))
}

/// Lock a shared store, turning a poisoned lock into a [`ClientError`].
///
/// Takes the handle rather than the whole [`AppState`] so callers can keep
/// a mutable borrow of the session alongside the guard.
pub fn lock(store: &SharedStore) -> Result<MutexGuard<'_, Store>> {
    store
        .lock()
        .map_err(|e| ClientError::LockPoisoned(e.to_string()))
}

/// State of one connected client.
pub struct AppState {
    /// The workbook data, shared with other clients.
    pub store: SharedStore,

    /// Who is logged in on this client.
    pub session: Session,

    /// How `login` maps credentials to a user.
    pub resolver: Arc<dyn IdentityResolver>,
}

impl AppState {
    /// A logged-out client using the demo role selector.
    pub fn new(store: SharedStore) -> Self {
        Self::with_resolver(store, Arc::new(DemoRoleSelector))
    }

    pub fn with_resolver(store: SharedStore, resolver: Arc<dyn IdentityResolver>) -> Self {
        Self {
            store,
            session: Session::new(),
            resolver,
        }
    }

    /// Lock the shared store for the duration of one command.
    pub fn store(&self) -> Result<MutexGuard<'_, Store>> {
        lock(&self.store)
    }

    pub fn current_user(&self) -> Result<&User> {
        self.session.current_user().ok_or(ClientError::NotLoggedIn)
    }

    /// The logged-in user, provided it holds `role`.
    pub fn require_role(&self, role: Role) -> Result<&User> {
        let user = self.current_user()?;
        if user.role != role {
            tracing::warn!(
                user_id = %user.id,
                role = %user.role,
                required = %role,
                "role check failed"
            );
            return Err(ClientError::Forbidden(format!(
                "this action requires the {role} role"
            )));
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::auth::Credentials;

    #[test]
    fn test_sessions_are_per_client() {
        let store = share(Store::with_demo_data(Utc::now()).unwrap());
        let mut student = AppState::new(store.clone());
        let admin = AppState::new(store);

        let guard = lock(&student.store).unwrap();
        student.session.login(
            &guard,
            student.resolver.as_ref(),
            &Credentials::role(Role::Student),
        );
        drop(guard);

        assert_eq!(student.current_user().unwrap().role, Role::Student);
        assert_eq!(admin.current_user().unwrap_err(), ClientError::NotLoggedIn);
    }

    #[test]
    fn test_require_role() {
        let store = share(Store::with_demo_data(Utc::now()).unwrap());
        let mut state = AppState::new(store);
        assert_eq!(
            state.require_role(Role::Admin).unwrap_err(),
            ClientError::NotLoggedIn
        );

        let user = state
            .store()
            .unwrap()
            .first_user_with_role(Role::Supervisor)
            .cloned()
            .unwrap();
        state.session = Session::LoggedIn(user);

        assert!(state.require_role(Role::Supervisor).is_ok());
        assert!(matches!(
            state.require_role(Role::Admin),
            Err(ClientError::Forbidden(_))
        ));
    }
}
