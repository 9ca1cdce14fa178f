//! Role-specific overview pages.
//!
//! Each view is a plain `Serialize` snapshot built under a single store
//! lock.  The UI picks the variant from the `role` tag.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use siwes_shared::constants::{
    ACADEMIC_SESSION, RECENT_LOG_LIMIT, TRAINING_PERIOD, UNKNOWN_STUDENT_EMAIL,
    UNKNOWN_STUDENT_NAME, WEEK_WINDOW_DAYS,
};
use siwes_shared::{ReportStatus, Role};
use siwes_store::{LogEntry, Notification, Store, StudentProfile, User, WeeklyReport};

use crate::error::Result;
use crate::state::AppState;
use crate::workflow::{self, Totals};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboard {
    pub profile: Option<StudentProfile>,
    pub total_logs: usize,
    /// Logs dated within the last week, today included.
    pub logs_this_week: usize,
    /// Newest first.
    pub recent_logs: Vec<LogEntry>,
    pub reports: Vec<WeeklyReport>,
    pub submitted_reports: usize,
    pub reviewed_reports: usize,
    pub notifications: Vec<Notification>,
    pub unread_notifications: usize,
}

/// A supervised placement joined with the student's account.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupervisedStudent {
    #[serde(flatten)]
    pub profile: StudentProfile,
    pub student_name: String,
    pub student_email: String,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PendingReview {
    #[serde(flatten)]
    pub report: WeeklyReport,
    pub student_name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupervisorDashboard {
    pub students: Vec<SupervisedStudent>,
    pub pending_reviews: Vec<PendingReview>,
    pub reviewed_reports: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub totals: Totals,
    pub users: Vec<User>,
    pub academic_session: &'static str,
    pub training_period: &'static str,
}

/// The overview matching the logged-in user's role.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Dashboard {
    Student(StudentDashboard),
    Supervisor(SupervisorDashboard),
    Admin(AdminDashboard),
}

/// Build the logged-in user's overview as of `today`.
pub fn dashboard(state: &AppState, today: NaiveDate) -> Result<Dashboard> {
    let viewer = state.current_user()?;
    let store = state.store()?;

    let view = match viewer.role {
        Role::Student => Dashboard::Student(student_view(&store, viewer, today)),
        Role::Supervisor => Dashboard::Supervisor(supervisor_view(&store, viewer)),
        Role::Admin => Dashboard::Admin(admin_view(&store)),
    };
    tracing::debug!(user_id = %viewer.id, role = %viewer.role, "dashboard built");
    Ok(view)
}

fn student_view(store: &Store, student: &User, today: NaiveDate) -> StudentDashboard {
    let logs = store.get_log_entries(&student.id);
    let week_start = today - Duration::days(WEEK_WINDOW_DAYS);

    let mut recent: Vec<LogEntry> = logs.iter().map(|&l| l.clone()).collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(RECENT_LOG_LIMIT);

    let reports: Vec<WeeklyReport> = store
        .get_weekly_reports(&student.id)
        .into_iter()
        .cloned()
        .collect();
    let count = |status: ReportStatus| reports.iter().filter(|r| r.status == status).count();

    StudentDashboard {
        profile: store.get_student_profile(&student.id).cloned(),
        total_logs: logs.len(),
        logs_this_week: logs.iter().filter(|l| l.date >= week_start).count(),
        recent_logs: recent,
        submitted_reports: count(ReportStatus::Submitted),
        reviewed_reports: count(ReportStatus::Reviewed),
        reports,
        notifications: store
            .get_notifications(&student.id)
            .into_iter()
            .cloned()
            .collect(),
        unread_notifications: store.unread_notification_count(&student.id),
    }
}

fn supervisor_view(store: &Store, supervisor: &User) -> SupervisorDashboard {
    let students = store
        .profiles_supervised_by(&supervisor.id)
        .into_iter()
        .map(|profile| {
            let user = store.get_user_by_id(&profile.user_id);
            SupervisedStudent {
                profile: profile.clone(),
                student_name: user.map_or(UNKNOWN_STUDENT_NAME, |u| u.name.as_str()).to_string(),
                student_email: user
                    .map_or(UNKNOWN_STUDENT_EMAIL, |u| u.email.as_str())
                    .to_string(),
                profile_image: user.and_then(|u| u.profile_image.clone()),
            }
        })
        .collect();

    let pending_reviews = workflow::pending_reviews(store, &supervisor.id)
        .into_iter()
        .map(|report| PendingReview {
            student_name: store
                .get_user_by_id(&report.student_id)
                .map_or(UNKNOWN_STUDENT_NAME, |u| u.name.as_str())
                .to_string(),
            report: report.clone(),
        })
        .collect();

    let reviewed_reports = workflow::visible_weekly_reports(store, supervisor)
        .into_iter()
        .filter(|r| r.status == ReportStatus::Reviewed)
        .count();

    SupervisorDashboard {
        students,
        pending_reviews,
        reviewed_reports,
    }
}

fn admin_view(store: &Store) -> AdminDashboard {
    AdminDashboard {
        totals: workflow::totals(store),
        users: store.list_users().into_iter().cloned().collect(),
        academic_session: ACADEMIC_SESSION,
        training_period: TRAINING_PERIOD,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use siwes_shared::{ProfileId, ReportId, UserId};
    use siwes_store::seed::{DEMO_REPORT_ID, DEMO_STUDENT_ID};
    use siwes_store::NewLogEntry;

    use super::*;
    use crate::commands::identity::{login, logout};
    use crate::commands::reports::review_report;
    use crate::error::ClientError;
    use crate::state::{share, SharedStore};

    fn client(store: &SharedStore, role: Role) -> AppState {
        let mut state = AppState::new(store.clone());
        login(&mut state, "", Some(role)).unwrap().unwrap();
        state
    }

    fn demo() -> SharedStore {
        share(Store::with_demo_data(Utc::now()).unwrap())
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    #[test]
    fn test_logged_out_has_no_dashboard() {
        let state = AppState::new(demo());
        assert_eq!(
            dashboard(&state, today()).unwrap_err(),
            ClientError::NotLoggedIn
        );
    }

    #[test]
    fn test_student_overview() {
        let store = demo();
        let student = client(&store, Role::Student);
        store
            .lock()
            .unwrap()
            .add_log_entry(NewLogEntry {
                student_id: UserId::from(DEMO_STUDENT_ID),
                date: today() - Duration::days(20),
                content: "Old entry".into(),
                attachments: Vec::new(),
            })
            .unwrap();

        let Dashboard::Student(view) = dashboard(&student, today()).unwrap() else {
            panic!("expected the student overview");
        };
        assert_eq!(view.profile.map(|p| p.id), Some(ProfileId::from("profile-1")));
        assert_eq!(view.total_logs, 4);
        assert_eq!(view.logs_this_week, 3);
        let recent: Vec<_> = view.recent_logs.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(recent, ["log-3", "log-2", "log-1"]);
        assert_eq!(view.reports.len(), 1);
        assert_eq!(view.submitted_reports, 1);
        assert_eq!(view.reviewed_reports, 0);
        assert_eq!(view.notifications.len(), 2);
        assert_eq!(view.unread_notifications, 1);
    }

    #[test]
    fn test_supervisor_overview_tracks_review() {
        let store = demo();
        let supervisor = client(&store, Role::Supervisor);

        let Dashboard::Supervisor(before) = dashboard(&supervisor, today()).unwrap() else {
            panic!("expected the supervisor overview");
        };
        assert_eq!(before.students.len(), 1);
        assert_eq!(before.students[0].student_name, "John Doe");
        assert_eq!(before.students[0].student_email, "john.doe@example.com");
        assert_eq!(before.pending_reviews.len(), 1);
        assert_eq!(before.pending_reviews[0].student_name, "John Doe");
        assert_eq!(before.reviewed_reports, 0);

        review_report(&supervisor, &ReportId::from(DEMO_REPORT_ID), "Well done.")
            .unwrap()
            .unwrap();

        let Dashboard::Supervisor(after) = dashboard(&supervisor, today()).unwrap() else {
            panic!("expected the supervisor overview");
        };
        assert!(after.pending_reviews.is_empty());
        assert_eq!(after.reviewed_reports, 1);
    }

    #[test]
    fn test_admin_overview() {
        let store = demo();
        let admin = client(&store, Role::Admin);

        let Dashboard::Admin(view) = dashboard(&admin, today()).unwrap() else {
            panic!("expected the admin overview");
        };
        assert_eq!(view.totals.students, 1);
        assert_eq!(view.totals.supervisors, 1);
        assert_eq!(view.totals.users, 3);
        assert_eq!(view.totals.profiles, 1);
        assert_eq!(view.users.len(), 3);
        assert_eq!(view.academic_session, ACADEMIC_SESSION);
    }

    #[test]
    fn test_dashboard_follows_session() {
        let mut state = client(&demo(), Role::Student);
        assert!(matches!(dashboard(&state, today()), Ok(Dashboard::Student(_))));

        logout(&mut state);
        login(&mut state, "admin@example.com", None).unwrap().unwrap();
        assert!(matches!(dashboard(&state, today()), Ok(Dashboard::Admin(_))));
    }

    #[test]
    fn test_serialized_shape() {
        let state = client(&demo(), Role::Supervisor);
        let json = serde_json::to_value(dashboard(&state, today()).unwrap()).unwrap();

        assert_eq!(json["role"], "supervisor");
        let student = &json["students"][0];
        assert_eq!(student["studentName"], "John Doe");
        assert_eq!(student["matricNumber"], "MAT12345");
        let pending = &json["pendingReviews"][0];
        assert_eq!(pending["id"], DEMO_REPORT_ID);
        assert_eq!(pending["status"], "submitted");
    }
}
