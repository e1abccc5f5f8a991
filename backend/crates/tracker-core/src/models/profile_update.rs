use chrono::{DateTime, Utc};

/// Fields `update-admin` may change on an existing record.
///
/// `None` leaves the stored value untouched; `updated_at` is always written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub updated_at: DateTime<Utc>,
}

