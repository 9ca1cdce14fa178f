//! Repository operations for daily [`LogEntry`] records.

use chrono::Utc;

use siwes_shared::{validate, LogEntryId, UserId};

use crate::error::{Result, StoreError};
use crate::models::{LogEntry, NewLogEntry};
use crate::store::Store;

impl Store {
    /// Record a daily log.
    ///
    /// The store assigns the id and stamps `created_at == updated_at` with
    /// the current time.  Content that is blank after trimming is rejected.
    pub fn add_log_entry(&mut self, input: NewLogEntry) -> Result<LogEntry> {
        if let Err(e) = validate::require_content(&input.content) {
            tracing::warn!(student_id = %input.student_id, error = %e, "rejecting daily log");
            return Err(e.into());
        }

        let now = Utc::now();
        let entry = LogEntry {
            id: LogEntryId::generate(),
            student_id: input.student_id,
            date: input.date,
            content: input.content,
            attachments: input.attachments,
            created_at: now,
            updated_at: now,
        };

        self.insert_log_entry(entry.clone())?;
        tracing::info!(
            log_id = %entry.id,
            student_id = %entry.student_id,
            date = %entry.date,
            "daily log added"
        );
        Ok(entry)
    }

    /// Insert a fully-formed entry, keeping its id and timestamps.
    pub(crate) fn insert_log_entry(&mut self, entry: LogEntry) -> Result<()> {
        if self.log_entries.contains(&entry.id) {
            return Err(StoreError::DuplicateId(entry.id.to_string()));
        }
        self.log_entries
            .insert(entry.id.clone(), entry.student_id.clone(), entry);
        Ok(())
    }

    pub fn get_log_entry(&self, id: &LogEntryId) -> Option<&LogEntry> {
        self.log_entries.get(id)
    }

    /// Daily logs of one student, in the order they were recorded.
    pub fn get_log_entries(&self, student_id: &UserId) -> Vec<&LogEntry> {
        let entries: Vec<_> = self.log_entries.owned_by(student_id).collect();
        if entries.is_empty() {
            tracing::debug!(student_id = %student_id, "no daily logs");
        }
        entries
    }

    /// Every daily log in the store, in insertion order.
    pub fn log_entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.log_entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;
    use siwes_shared::ValidationError;

    use super::*;

    fn new_log(student: &str, content: &str) -> NewLogEntry {
        NewLogEntry {
            student_id: UserId::from(student),
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            content: content.to_string(),
            attachments: Vec::new(),
        }
    }

    #[test]
    fn test_add_stamps_id_and_timestamps() {
        let mut store = Store::new();
        let mut ids = HashSet::new();

        for i in 0..20 {
            let entry = store
                .add_log_entry(new_log("user-1", &format!("day {i}")))
                .unwrap();
            assert_eq!(entry.created_at, entry.updated_at);
            assert!(ids.insert(entry.id.clone()), "duplicate id {}", entry.id);
        }
        assert_eq!(store.stats().log_entries, 20);
    }

    #[test]
    fn test_blank_content_rejected() {
        let mut store = Store::new();
        let err = store.add_log_entry(new_log("user-1", "   ")).unwrap_err();

        assert_eq!(err, StoreError::Validation(ValidationError::EmptyContent));
        assert_eq!(err.to_string(), "content required");
        assert_eq!(store.stats().log_entries, 0);
    }

    #[test]
    fn test_filter_by_student_keeps_order() {
        let mut store = Store::new();
        let a1 = store.add_log_entry(new_log("a", "first")).unwrap();
        store.add_log_entry(new_log("b", "other")).unwrap();
        let a2 = store.add_log_entry(new_log("a", "second")).unwrap();

        let ids: Vec<_> = store
            .get_log_entries(&UserId::from("a"))
            .iter()
            .map(|e| e.id.clone())
            .collect();
        assert_eq!(ids, vec![a1.id, a2.id]);
        assert!(store.get_log_entries(&UserId::from("nobody")).is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut store = Store::new();
        let entry = store.add_log_entry(new_log("a", "first")).unwrap();

        assert_eq!(
            store.insert_log_entry(entry.clone()),
            Err(StoreError::DuplicateId(entry.id.to_string()))
        );
        assert_eq!(store.stats().log_entries, 1);
        assert_eq!(store.log_entries().count(), 1);
    }

    #[test]
    fn test_content_kept_verbatim() {
        let mut store = Store::new();
        let entry = store
            .add_log_entry(new_log("a", "  padded text  "))
            .unwrap();
        assert_eq!(
            store.get_log_entry(&entry.id).map(|e| e.content.as_str()),
            Some("  padded text  ")
        );
    }
}
