use siwes_shared::Role;
use siwes_store::User;

use crate::auth::Credentials;
use crate::error::Result;
use crate::state::{lock, AppState};

/// Log this client in.
///
/// `Ok(None)` means no user matched; the session is left as it was.
pub fn login(
    state: &mut AppState,
    identifier: &str,
    role_hint: Option<Role>,
) -> Result<Option<User>> {
    let credentials = Credentials {
        identifier: identifier.trim().to_string(),
        role_hint,
    };
    let store = lock(&state.store)?;
    Ok(state
        .session
        .login(&store, state.resolver.as_ref(), &credentials))
}

pub fn logout(state: &mut AppState) {
    state.session.logout();
}

pub fn current_user(state: &AppState) -> Option<&User> {
    state.session.current_user()
}
