//! Domain model structs held by the in-memory [`Store`](crate::Store).
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to the UI layer.  Field names serialize in camelCase.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use siwes_shared::{LogEntryId, NotificationId, ProfileId, ReportId, ReportStatus, Role, UserId};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A student, supervisor or admin.  The role never changes once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Used as the login identifier.
    pub email: String,
    pub role: Role,
    /// Optional URL of an avatar image.
    pub profile_image: Option<String>,
}

// ---------------------------------------------------------------------------
// Student profile
// ---------------------------------------------------------------------------

/// Placement details of one student.  At most one per user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: ProfileId,
    /// The student this profile belongs to.
    pub user_id: UserId,
    pub matric_number: String,
    pub department: String,
    pub level: String,
    /// Company hosting the placement.
    pub company: String,
    /// Supervisor assigned to the student, if any.
    pub supervisor_id: Option<UserId>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

// ---------------------------------------------------------------------------
// Daily log
// ---------------------------------------------------------------------------

/// One dated free-text activity record written by a student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: LogEntryId,
    pub student_id: UserId,
    /// Day the activity happened, as chosen by the student.
    pub date: NaiveDate,
    pub content: String,
    /// File names of attached documents.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields of a new daily log.  Id and timestamps are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLogEntry {
    pub student_id: UserId,
    pub date: NaiveDate,
    pub content: String,
    pub attachments: Vec<String>,
}

// ---------------------------------------------------------------------------
// Weekly report
// ---------------------------------------------------------------------------

/// A week-long summary subject to supervisor review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub id: ReportId,
    pub student_id: UserId,
    /// 1-based week of the placement.
    pub week_number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub content: String,
    pub status: ReportStatus,
    /// Set by the supervisor together with the `reviewed` status.
    pub supervisor_feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields of a new weekly report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWeeklyReport {
    pub student_id: UserId,
    pub week_number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub content: String,
    /// Usually [`ReportStatus::Submitted`]; a report is never created as
    /// already reviewed.
    pub status: ReportStatus,
    pub attachments: Vec<String>,
}

/// Partial update of a weekly report.  `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyReportUpdate {
    pub week_number: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub content: Option<String>,
    pub status: Option<ReportStatus>,
    pub supervisor_feedback: Option<String>,
    pub attachments: Option<Vec<String>>,
}

impl WeeklyReportUpdate {
    /// The update a supervisor sends when signing off a submitted report.
    pub fn review(feedback: impl Into<String>) -> Self {
        Self {
            status: Some(ReportStatus::Reviewed),
            supervisor_feedback: Some(feedback.into()),
            ..Self::default()
        }
    }

    /// Move a draft on to the supervisor.
    pub fn submit() -> Self {
        Self {
            status: Some(ReportStatus::Submitted),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Notification
// ---------------------------------------------------------------------------

/// A message addressed to one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields of a new notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub user_id: UserId,
    pub title: String,
    pub message: String,
}
