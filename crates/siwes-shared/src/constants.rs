/// Application name
pub const APP_NAME: &str = "SIWES Workbook";

/// Academic session shown on the admin overview
pub const ACADEMIC_SESSION: &str = "2024/2025";

/// Training period shown on the admin overview
pub const TRAINING_PERIOD: &str = "May - August 2024";

/// Number of daily logs shown in the "recent" list of the student overview
pub const RECENT_LOG_LIMIT: usize = 3;

/// A daily log counts towards "this week" when dated within this many days
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// Length of the default weekly report period, in days
pub const REPORT_PERIOD_DAYS: i64 = 7;

/// Display fallbacks when a supervised profile points at a missing user
pub const UNKNOWN_STUDENT_NAME: &str = "Unknown Student";
pub const UNKNOWN_STUDENT_EMAIL: &str = "No email";

/// Notification pushed to a student once a supervisor reviews a report
pub const REVIEW_NOTIFICATION_TITLE: &str = "Supervisor Comment";
