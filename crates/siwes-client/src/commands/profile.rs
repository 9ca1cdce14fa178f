use siwes_shared::{Role, UserId};
use siwes_store::StudentProfile;

use crate::error::{ClientError, Result};
use crate::state::AppState;
use crate::workflow;

/// The logged-in student's placement profile.  `Ok(None)` when none has
/// been recorded yet.
pub fn my_profile(state: &AppState) -> Result<Option<StudentProfile>> {
    let student = state.require_role(Role::Student)?;
    let store = state.store()?;
    Ok(store.get_student_profile(&student.id).cloned())
}

/// A student's placement profile, as seen by the logged-in user.
///
/// Students may only open their own, supervisors those of their assigned
/// students.
pub fn student_profile(state: &AppState, student_id: &UserId) -> Result<Option<StudentProfile>> {
    let viewer = state.current_user()?;
    let store = state.store()?;

    if !workflow::can_view_student(&store, viewer, student_id) {
        return Err(ClientError::Forbidden(format!(
            "profile of {student_id} is not visible to {}",
            viewer.id
        )));
    }
    Ok(store.get_student_profile(student_id).cloned())
}

/// Profiles the logged-in user may read.
pub fn list_profiles(state: &AppState) -> Result<Vec<StudentProfile>> {
    let viewer = state.current_user()?;
    let store = state.store()?;
    Ok(workflow::visible_profiles(&store, viewer)
        .into_iter()
        .cloned()
        .collect())
}
