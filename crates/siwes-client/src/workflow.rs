//! Role-scoped visibility rules.
//!
//! - A student sees only their own logs and reports.
//! - A supervisor sees the students assigned to them, those students'
//!   logs and reports, and the subset of reports waiting for review.
//! - An admin sees aggregate counts over users and profiles, not rows.
//!
//! Everything here is a pure read of the [`Store`].

use std::collections::HashSet;

use serde::Serialize;

use siwes_shared::{ReportStatus, Role, UserId};
use siwes_store::{LogEntry, Store, StudentProfile, User, WeeklyReport};

/// Aggregate figures of the admin overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub students: usize,
    pub supervisors: usize,
    pub admins: usize,
    pub users: usize,
    pub profiles: usize,
}

/// Ids of the students assigned to `supervisor_id`.
pub fn supervised_student_ids(store: &Store, supervisor_id: &UserId) -> HashSet<UserId> {
    store
        .profiles_supervised_by(supervisor_id)
        .into_iter()
        .map(|p| p.user_id.clone())
        .collect()
}

/// Whether `viewer` may see records owned by `student_id`.
pub fn can_view_student(store: &Store, viewer: &User, student_id: &UserId) -> bool {
    match viewer.role {
        Role::Student => &viewer.id == student_id,
        Role::Supervisor => store
            .get_student_profile(student_id)
            .is_some_and(|p| p.supervisor_id.as_ref() == Some(&viewer.id)),
        Role::Admin => false,
    }
}

/// Daily logs `viewer` may read, in store order.
pub fn visible_log_entries<'s>(store: &'s Store, viewer: &User) -> Vec<&'s LogEntry> {
    match viewer.role {
        Role::Student => store.get_log_entries(&viewer.id),
        Role::Supervisor => {
            let students = supervised_student_ids(store, &viewer.id);
            store
                .log_entries()
                .filter(|l| students.contains(&l.student_id))
                .collect()
        }
        Role::Admin => Vec::new(),
    }
}

/// Weekly reports `viewer` may read, in store order.
pub fn visible_weekly_reports<'s>(store: &'s Store, viewer: &User) -> Vec<&'s WeeklyReport> {
    match viewer.role {
        Role::Student => store.get_weekly_reports(&viewer.id),
        Role::Supervisor => {
            let students = supervised_student_ids(store, &viewer.id);
            store
                .weekly_reports()
                .filter(|r| students.contains(&r.student_id))
                .collect()
        }
        Role::Admin => Vec::new(),
    }
}

/// Profiles `viewer` may read: their own as a student, their assigned
/// students' as a supervisor.
pub fn visible_profiles<'s>(store: &'s Store, viewer: &User) -> Vec<&'s StudentProfile> {
    match viewer.role {
        Role::Student => store.get_student_profile(&viewer.id).into_iter().collect(),
        Role::Supervisor => store.profiles_supervised_by(&viewer.id),
        Role::Admin => Vec::new(),
    }
}

/// Submitted reports of the students assigned to `supervisor_id`, in store
/// order.
pub fn pending_reviews<'s>(store: &'s Store, supervisor_id: &UserId) -> Vec<&'s WeeklyReport> {
    let students = supervised_student_ids(store, supervisor_id);
    store
        .weekly_reports()
        .filter(|r| r.status.is_pending_review() && students.contains(&r.student_id))
        .collect()
}

/// Whether `supervisor_id` may review `report` right now.
pub fn can_review(store: &Store, supervisor_id: &UserId, report: &WeeklyReport) -> bool {
    report.status == ReportStatus::Submitted
        && store
            .get_student_profile(&report.student_id)
            .is_some_and(|p| p.supervisor_id.as_ref() == Some(supervisor_id))
}

pub fn totals(store: &Store) -> Totals {
    let stats = store.stats();
    Totals {
        students: store.count_users_with_role(Role::Student),
        supervisors: store.count_users_with_role(Role::Supervisor),
        admins: store.count_users_with_role(Role::Admin),
        users: stats.users,
        profiles: stats.profiles,
    }
}
