//! Demo dataset.
//!
//! One student supervised by one supervisor, plus an admin, with a few days
//! of logs, one report waiting for review and two notifications.  All dates
//! are relative to the `now` passed in so the dataset always looks current.

use chrono::{DateTime, Duration, Utc};

use siwes_shared::{LogEntryId, NotificationId, ProfileId, ReportId, ReportStatus, Role, UserId};

use crate::error::Result;
use crate::models::{LogEntry, Notification, StudentProfile, User, WeeklyReport};
use crate::store::Store;

pub const DEMO_STUDENT_ID: &str = "user-1";
pub const DEMO_SUPERVISOR_ID: &str = "user-2";
pub const DEMO_ADMIN_ID: &str = "user-3";
pub const DEMO_REPORT_ID: &str = "report-1";

const WEEK_ONE_REPORT: &str = "# Week 1 Report

## Activities
- Company orientation
- Team introduction
- Project assignment

## Skills Acquired
- Understanding of company workflow
- Basic project management tools

## Challenges
- Getting familiar with the codebase

## Goals for Next Week
- Start contributing to the project
- Complete assigned tasks";

impl Store {
    /// A new store holding the demo dataset.
    pub fn with_demo_data(now: DateTime<Utc>) -> Result<Self> {
        let mut store = Self::new();
        store.seed_demo(now)?;
        Ok(store)
    }

    /// Insert the demo dataset.
    ///
    /// All or nothing: if any of its ids or emails are already taken the
    /// error is returned and the store is left as it was.
    pub fn seed_demo(&mut self, now: DateTime<Utc>) -> Result<()> {
        tracing::info!("applying demo seed");

        let mut next = self.clone();
        if let Err(e) = next.insert_demo_rows(now) {
            tracing::warn!(error = %e, "demo seed rejected");
            return Err(e);
        }
        *self = next;

        let stats = self.stats();
        tracing::info!(
            users = stats.users,
            profiles = stats.profiles,
            log_entries = stats.log_entries,
            weekly_reports = stats.weekly_reports,
            notifications = stats.notifications,
            "demo seed applied"
        );
        Ok(())
    }

    fn insert_demo_rows(&mut self, now: DateTime<Utc>) -> Result<()> {
        let days_ago = |n: i64| now - Duration::days(n);
        let student = UserId::from(DEMO_STUDENT_ID);
        let supervisor = UserId::from(DEMO_SUPERVISOR_ID);

        for (id, name, email, role, image) in [
            (
                DEMO_STUDENT_ID,
                "John Doe",
                "john.doe@example.com",
                Role::Student,
                "men/1",
            ),
            (
                DEMO_SUPERVISOR_ID,
                "Jane Smith",
                "jane.smith@example.com",
                Role::Supervisor,
                "women/1",
            ),
            (
                DEMO_ADMIN_ID,
                "Admin User",
                "admin@example.com",
                Role::Admin,
                "men/2",
            ),
        ] {
            self.add_user(User {
                id: UserId::from(id),
                name: name.to_string(),
                email: email.to_string(),
                role,
                profile_image: Some(format!("https://randomuser.me/api/portraits/{image}.jpg")),
            })?;
        }

        self.add_student_profile(StudentProfile {
            id: ProfileId::from("profile-1"),
            user_id: student.clone(),
            matric_number: "MAT12345".to_string(),
            department: "Computer Science".to_string(),
            level: "300".to_string(),
            company: "Tech Solutions Ltd".to_string(),
            supervisor_id: Some(supervisor),
            start_date: days_ago(30).date_naive(),
            end_date: (now + Duration::days(60)).date_naive(),
        })?;

        for (id, age, content, attachments) in [
            (
                "log-1",
                2,
                "Attended orientation and was introduced to the company structure.",
                vec![],
            ),
            (
                "log-2",
                1,
                "Participated in a team meeting and was assigned to a project.",
                vec!["meeting-notes.pdf".to_string()],
            ),
            (
                "log-3",
                0,
                "Started working on the frontend of the project using React.",
                vec![],
            ),
        ] {
            let at = days_ago(age);
            self.insert_log_entry(LogEntry {
                id: LogEntryId::from(id),
                student_id: student.clone(),
                date: at.date_naive(),
                content: content.to_string(),
                attachments,
                created_at: at,
                updated_at: at,
            })?;
        }

        self.insert_weekly_report(WeeklyReport {
            id: ReportId::from(DEMO_REPORT_ID),
            student_id: student.clone(),
            week_number: 1,
            start_date: days_ago(7).date_naive(),
            end_date: now.date_naive(),
            content: WEEK_ONE_REPORT.to_string(),
            status: ReportStatus::Submitted,
            supervisor_feedback: None,
            attachments: Vec::new(),
            created_at: days_ago(1),
            updated_at: days_ago(1),
        })?;

        for (id, title, message, is_read, age) in [
            (
                "notif-1",
                "Weekly Report Due",
                "Your weekly report for Week 2 is due in 2 days.",
                false,
                1,
            ),
            (
                "notif-2",
                "Supervisor Comment",
                "Your supervisor has left a comment on your Week 1 report.",
                true,
                2,
            ),
        ] {
            self.insert_notification(Notification {
                id: NotificationId::from(id),
                user_id: student.clone(),
                title: title.to_string(),
                message: message.to_string(),
                is_read,
                created_at: days_ago(age),
            })?;
        }

        Ok(())
    }
}
