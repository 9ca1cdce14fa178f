//! Repository operations for [`WeeklyReport`] records, including the
//! `draft -> submitted -> reviewed` lifecycle.

use chrono::{DateTime, Utc};

use siwes_shared::{validate, ReportId, ReportStatus, UserId, ValidationError};

use crate::error::{Result, StoreError};
use crate::models::{NewWeeklyReport, WeeklyReport, WeeklyReportUpdate};
use crate::store::Store;

impl Store {
    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Record a weekly report.
    ///
    /// Same stamping as [`Store::add_log_entry`].  The week number must be at
    /// least 1, the period must not end before it starts, and the report
    /// cannot start out reviewed.
    pub fn add_weekly_report(&mut self, input: NewWeeklyReport) -> Result<WeeklyReport> {
        if let Err(e) = validate_new_report(&input) {
            tracing::warn!(student_id = %input.student_id, error = %e, "rejecting weekly report");
            return Err(e);
        }

        let now = Utc::now();
        let report = WeeklyReport {
            id: ReportId::generate(),
            student_id: input.student_id,
            week_number: input.week_number,
            start_date: input.start_date,
            end_date: input.end_date,
            content: input.content,
            status: input.status,
            supervisor_feedback: None,
            attachments: input.attachments,
            created_at: now,
            updated_at: now,
        };

        self.insert_weekly_report(report.clone())?;
        tracing::info!(
            report_id = %report.id,
            student_id = %report.student_id,
            week = report.week_number,
            status = %report.status,
            "weekly report added"
        );
        Ok(report)
    }

    /// Insert a fully-formed report, keeping its id, status and timestamps.
    pub(crate) fn insert_weekly_report(&mut self, report: WeeklyReport) -> Result<()> {
        if self.reports.contains(&report.id) {
            return Err(StoreError::DuplicateId(report.id.to_string()));
        }
        self.reports
            .insert(report.id.clone(), report.student_id.clone(), report);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    pub fn get_weekly_report(&self, id: &ReportId) -> Option<&WeeklyReport> {
        self.reports.get(id)
    }

    /// Weekly reports of one student, in the order they were recorded.
    pub fn get_weekly_reports(&self, student_id: &UserId) -> Vec<&WeeklyReport> {
        let reports: Vec<_> = self.reports.owned_by(student_id).collect();
        if reports.is_empty() {
            tracing::debug!(student_id = %student_id, "no weekly reports");
        }
        reports
    }

    /// Every weekly report in the store, in insertion order.
    pub fn weekly_reports(&self) -> impl Iterator<Item = &WeeklyReport> {
        self.reports.iter()
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// Merge `update` into the report with `id`.
    ///
    /// Returns `Ok(None)` when no such report exists.  Otherwise the merged
    /// report is validated as a whole before anything is written:
    ///
    /// - a status change must be a single forward step;
    /// - without a status change only drafts are editable;
    /// - feedback is accepted only on the submitted -> reviewed step, where
    ///   it is required;
    /// - content, week number and period obey the creation rules.
    ///
    /// On success `updated_at` is bumped and the new state is returned.
    pub fn update_weekly_report(
        &mut self,
        id: &ReportId,
        update: WeeklyReportUpdate,
    ) -> Result<Option<WeeklyReport>> {
        let Some(current) = self.reports.get(id) else {
            tracing::debug!(report_id = %id, "update of unknown weekly report");
            return Ok(None);
        };

        let merged = match merge_update(current, update, Utc::now()) {
            Ok(merged) => merged,
            Err(e) => {
                tracing::warn!(report_id = %id, error = %e, "rejecting weekly report update");
                return Err(e);
            }
        };

        tracing::info!(
            report_id = %id,
            from = %current.status,
            to = %merged.status,
            "weekly report updated"
        );

        match self.reports.get_mut(id) {
            Some(slot) => {
                *slot = merged.clone();
                Ok(Some(merged))
            }
            None => Ok(None),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_new_report(input: &NewWeeklyReport) -> Result<()> {
    validate::require_content(&input.content)?;
    validate::week_number(input.week_number)?;
    validate::date_range(input.start_date, input.end_date)?;
    if input.status == ReportStatus::Reviewed {
        return Err(StoreError::InvalidInitialStatus(input.status));
    }
    Ok(())
}

/// Build the post-update state of `current` without touching the store.
fn merge_update(
    current: &WeeklyReport,
    update: WeeklyReportUpdate,
    now: DateTime<Utc>,
) -> Result<WeeklyReport> {
    let next_status = update.status.unwrap_or(current.status);

    if next_status == current.status {
        if current.status != ReportStatus::Draft {
            return Err(StoreError::Locked {
                id: current.id.clone(),
                status: current.status,
            });
        }
    } else if !current.status.can_transition_to(next_status) {
        return Err(StoreError::InvalidTransition {
            from: current.status,
            to: next_status,
        });
    }

    let reviewing = next_status == ReportStatus::Reviewed;
    match (&update.supervisor_feedback, reviewing) {
        (Some(_), false) => return Err(StoreError::FeedbackOutsideReview),
        (Some(feedback), true) if feedback.trim().is_empty() => {
            return Err(ValidationError::EmptyFeedback.into())
        }
        (None, true) => return Err(ValidationError::EmptyFeedback.into()),
        _ => {}
    }

    let mut next = current.clone();
    if let Some(week) = update.week_number {
        next.week_number = week;
    }
    if let Some(start) = update.start_date {
        next.start_date = start;
    }
    if let Some(end) = update.end_date {
        next.end_date = end;
    }
    if let Some(content) = update.content {
        next.content = content;
    }
    if let Some(attachments) = update.attachments {
        next.attachments = attachments;
    }
    if update.supervisor_feedback.is_some() {
        next.supervisor_feedback = update.supervisor_feedback;
    }
    next.status = next_status;

    validate::require_content(&next.content)?;
    validate::week_number(next.week_number)?;
    validate::date_range(next.start_date, next.end_date)?;

    // never move backwards, even if the wall clock does
    next.updated_at = now.max(current.updated_at);
    Ok(next)
}
