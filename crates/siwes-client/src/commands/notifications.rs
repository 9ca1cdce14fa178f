use siwes_shared::NotificationId;
use siwes_store::Notification;

use crate::error::Result;
use crate::state::AppState;

/// Notifications addressed to the logged-in user, oldest first.
pub fn list_notifications(state: &AppState) -> Result<Vec<Notification>> {
    let user = state.current_user()?;
    let store = state.store()?;
    Ok(store
        .get_notifications(&user.id)
        .into_iter()
        .cloned()
        .collect())
}

/// Mark one of the logged-in user's notifications as read.
pub fn mark_notification_read(
    state: &AppState,
    id: &NotificationId,
) -> Result<Option<Notification>> {
    let user = state.current_user()?;
    let mut store = state.store()?;

    let owned = store
        .get_notifications(&user.id)
        .iter()
        .any(|n| &n.id == id);
    if !owned {
        // someone else's notification looks the same as a missing one
        return Ok(None);
    }
    Ok(store.mark_notification_read(id))
}

/// Mark every notification of the logged-in user as read.  Returns how
/// many were unread.
pub fn mark_all_read(state: &AppState) -> Result<usize> {
    let user = state.current_user()?;
    let mut store = state.store()?;

    let unread: Vec<NotificationId> = store
        .get_notifications(&user.id)
        .into_iter()
        .filter(|n| !n.is_read)
        .map(|n| n.id.clone())
        .collect();
    for id in &unread {
        store.mark_notification_read(id);
    }

    tracing::debug!(user_id = %user.id, count = unread.len(), "notifications marked read");
    Ok(unread.len())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use siwes_shared::Role;
    use siwes_store::Store;

    use super::*;
    use crate::commands::identity::login;
    use crate::state::share;

    fn logged_in(role: Role) -> AppState {
        let mut state = AppState::new(share(Store::with_demo_data(Utc::now()).unwrap()));
        login(&mut state, "", Some(role)).unwrap().unwrap();
        state
    }

    #[test]
    fn test_student_reads_notification() {
        let state = logged_in(Role::Student);
        let notes = list_notifications(&state).unwrap();
        assert_eq!(notes.len(), 2);

        let unread = notes.iter().find(|n| !n.is_read).unwrap();
        let read = mark_notification_read(&state, &unread.id).unwrap().unwrap();
        assert!(read.is_read);
        assert!(list_notifications(&state).unwrap().iter().all(|n| n.is_read));
    }

    #[test]
    fn test_cannot_touch_other_users_notification() {
        let state = logged_in(Role::Admin);
        let id = NotificationId::from("notif-1");

        assert!(mark_notification_read(&state, &id).unwrap().is_none());
        let store = state.store().unwrap();
        let student_notes = store.get_notifications(&siwes_shared::UserId::from("user-1"));
        assert!(!student_notes[0].is_read);
    }

    #[test]
    fn test_mark_all_read() {
        let state = logged_in(Role::Student);
        assert_eq!(mark_all_read(&state).unwrap(), 1);
        assert_eq!(mark_all_read(&state).unwrap(), 0);
    }
}
