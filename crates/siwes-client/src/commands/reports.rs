use chrono::{Duration, NaiveDate};
use serde::Deserialize;
use tracing::info;

use siwes_shared::constants::{REPORT_PERIOD_DAYS, REVIEW_NOTIFICATION_TITLE};
use siwes_shared::{ReportId, ReportStatus, Role};
use siwes_store::{NewNotification, NewWeeklyReport, WeeklyReport, WeeklyReportUpdate};

use crate::error::{ClientError, Result};
use crate::state::AppState;
use crate::workflow;

fn default_status() -> ReportStatus {
    ReportStatus::Submitted
}

/// What the weekly report form submits.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReportForm {
    pub week_number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub content: String,
    /// `draft` keeps the report editable; defaults to `submitted`.
    #[serde(default = "default_status")]
    pub status: ReportStatus,
    #[serde(default)]
    pub attachments: Vec<String>,
}

impl WeeklyReportForm {
    /// Pre-filled form: week 1, covering the seven days up to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            week_number: 1,
            start_date: today - Duration::days(REPORT_PERIOD_DAYS),
            end_date: today,
            content: String::new(),
            status: default_status(),
            attachments: Vec::new(),
        }
    }
}

/// Record a weekly report for the logged-in student.
pub fn submit_weekly_report(state: &AppState, form: WeeklyReportForm) -> Result<WeeklyReport> {
    let student = state.require_role(Role::Student)?;
    let mut store = state.store()?;

    let report = store.add_weekly_report(NewWeeklyReport {
        student_id: student.id.clone(),
        week_number: form.week_number,
        start_date: form.start_date,
        end_date: form.end_date,
        content: form.content,
        status: form.status,
        attachments: form.attachments,
    })?;

    info!(report_id = %report.id, status = %report.status, "Weekly report has been saved");
    Ok(report)
}

/// Edit one of the logged-in student's own reports.
///
/// Students cannot review, so updates that set feedback or the `reviewed`
/// status are refused here; the store enforces the remaining lifecycle
/// rules.
pub fn update_own_report(
    state: &AppState,
    id: &ReportId,
    update: WeeklyReportUpdate,
) -> Result<Option<WeeklyReport>> {
    let student = state.require_role(Role::Student)?;
    if update.supervisor_feedback.is_some() || update.status == Some(ReportStatus::Reviewed) {
        return Err(ClientError::Forbidden(
            "only a supervisor can review a report".to_string(),
        ));
    }

    let mut store = state.store()?;
    match store.get_weekly_report(id) {
        None => return Ok(None),
        Some(report) if report.student_id != student.id => {
            return Err(ClientError::Forbidden(format!(
                "report {id} belongs to another student"
            )));
        }
        Some(_) => {}
    }

    Ok(store.update_weekly_report(id, update)?)
}

/// Hand a draft over to the supervisor.
pub fn submit_draft(state: &AppState, id: &ReportId) -> Result<Option<WeeklyReport>> {
    update_own_report(state, id, WeeklyReportUpdate::submit())
}

/// Weekly reports the logged-in user may read.
pub fn list_weekly_reports(state: &AppState) -> Result<Vec<WeeklyReport>> {
    let viewer = state.current_user()?;
    let store = state.store()?;
    Ok(workflow::visible_weekly_reports(&store, viewer)
        .into_iter()
        .cloned()
        .collect())
}

/// Submitted reports waiting for the logged-in supervisor.
pub fn list_pending_reviews(state: &AppState) -> Result<Vec<WeeklyReport>> {
    let supervisor = state.require_role(Role::Supervisor)?;
    let store = state.store()?;
    Ok(workflow::pending_reviews(&store, &supervisor.id)
        .into_iter()
        .cloned()
        .collect())
}

/// Sign off a submitted report with feedback and tell the student.
///
/// `Ok(None)` when the report does not exist.  The logged-in supervisor
/// must be the one assigned to the report's author.
pub fn review_report(
    state: &AppState,
    id: &ReportId,
    feedback: &str,
) -> Result<Option<WeeklyReport>> {
    let supervisor = state.require_role(Role::Supervisor)?;
    let mut store = state.store()?;

    let Some(report) = store.get_weekly_report(id) else {
        return Ok(None);
    };
    if !workflow::can_view_student(&store, supervisor, &report.student_id) {
        return Err(ClientError::Forbidden(format!(
            "report {id} belongs to a student you do not supervise"
        )));
    }

    // review and notification land together or not at all
    let mut next = store.clone();
    let Some(reviewed) =
        next.update_weekly_report(id, WeeklyReportUpdate::review(feedback.trim()))?
    else {
        return Ok(None);
    };
    next.add_notification(NewNotification {
        user_id: reviewed.student_id.clone(),
        title: REVIEW_NOTIFICATION_TITLE.to_string(),
        message: format!(
            "Your supervisor has left a comment on your Week {} report.",
            reviewed.week_number
        ),
    })?;
    *store = next;

    info!(report_id = %id, supervisor_id = %supervisor.id, "Feedback has been submitted");
    Ok(Some(reviewed))
}
