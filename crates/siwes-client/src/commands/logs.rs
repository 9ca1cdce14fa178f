use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use siwes_shared::Role;
use siwes_store::{LogEntry, NewLogEntry};

use crate::error::Result;
use crate::state::AppState;
use crate::workflow;

/// What the daily log form submits.  The author is always the logged-in
/// student.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLogForm {
    pub date: NaiveDate,
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<String>,
}

/// Record a daily log for the logged-in student.
pub fn add_daily_log(state: &AppState, form: DailyLogForm) -> Result<LogEntry> {
    let student = state.require_role(Role::Student)?;
    let mut store = state.store()?;

    let entry = store.add_log_entry(NewLogEntry {
        student_id: student.id.clone(),
        date: form.date,
        content: form.content,
        attachments: form.attachments,
    })?;

    info!(log_id = %entry.id, "Daily log has been added");
    Ok(entry)
}

/// Daily logs the logged-in user may read.
pub fn list_daily_logs(state: &AppState) -> Result<Vec<LogEntry>> {
    let viewer = state.current_user()?;
    let store = state.store()?;
    Ok(workflow::visible_log_entries(&store, viewer)
        .into_iter()
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use siwes_store::{Store, StoreError};

    use super::*;
    use crate::commands::identity::login;
    use crate::error::ClientError;
    use crate::state::share;

    fn form(content: &str) -> DailyLogForm {
        DailyLogForm {
            date: Utc::now().date_naive(),
            content: content.to_string(),
            attachments: Vec::new(),
        }
    }

    fn logged_in(role: Role) -> AppState {
        let mut state = AppState::new(share(Store::with_demo_data(Utc::now()).unwrap()));
        login(&mut state, "", Some(role)).unwrap().unwrap();
        state
    }

    #[test]
    fn test_student_adds_log() {
        let state = logged_in(Role::Student);
        let entry = add_daily_log(&state, form("Paired on the login page.")).unwrap();

        assert_eq!(entry.student_id.as_str(), "user-1");
        let logs = list_daily_logs(&state).unwrap();
        assert_eq!(logs.len(), 4);
        assert_eq!(logs.last(), Some(&entry));
    }

    #[test]
    fn test_blank_log_surfaces_reason() {
        let state = logged_in(Role::Student);
        let err = add_daily_log(&state, form(" ")).unwrap_err();
        assert!(matches!(err, ClientError::Store(StoreError::Validation(_))));
        assert_eq!(err.to_string(), "content required");
    }

    #[test]
    fn test_supervisor_cannot_add_log() {
        let state = logged_in(Role::Supervisor);
        assert!(matches!(
            add_daily_log(&state, form("not mine")),
            Err(ClientError::Forbidden(_))
        ));
    }

    #[test]
    fn test_logged_out_cannot_list() {
        let state = AppState::new(share(Store::new()));
        assert_eq!(list_daily_logs(&state).unwrap_err(), ClientError::NotLoggedIn);
    }

    #[test]
    fn test_form_deserializes_from_ui_json() {
        let form: DailyLogForm =
            serde_json::from_str(r#"{"date":"2024-06-03","content":"Set up CI"}"#).unwrap();
        assert_eq!(form.date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert!(form.attachments.is_empty());
    }
}
