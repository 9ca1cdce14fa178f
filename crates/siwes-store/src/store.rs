//! The in-memory entity store.
//!
//! [`Store`] is a plain owned value: callers decide how to share it (the
//! client crate wraps it in `Arc<Mutex<_>>`).  The typed repository helpers
//! live in one `impl Store` block per entity, see `users.rs`, `profiles.rs`,
//! `logs.rs`, `reports.rs` and `notifications.rs`.

use siwes_shared::{LogEntryId, NotificationId, ProfileId, ReportId, UserId};

use crate::models::{LogEntry, Notification, StudentProfile, User, WeeklyReport};
use crate::table::Table;

/// Owner of every entity of the workbook.
#[derive(Debug, Clone)]
pub struct Store {
    pub(crate) users: Table<UserId, User>,
    pub(crate) profiles: Table<ProfileId, StudentProfile>,
    pub(crate) log_entries: Table<LogEntryId, LogEntry>,
    pub(crate) reports: Table<ReportId, WeeklyReport>,
    pub(crate) notifications: Table<NotificationId, Notification>,
}

/// Row counts of every collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub users: usize,
    pub profiles: usize,
    pub log_entries: usize,
    pub weekly_reports: usize,
    pub notifications: usize,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            users: Table::new(),
            profiles: Table::new(),
            log_entries: Table::new(),
            reports: Table::new(),
            notifications: Table::new(),
        }
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            users: self.users.len(),
            profiles: self.profiles.len(),
            log_entries: self.log_entries.len(),
            weekly_reports: self.reports.len(),
            notifications: self.notifications.len(),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_has_no_rows() {
        let store = Store::new();
        assert_eq!(store.stats(), StoreStats::default());
    }
}
