use serde::Serialize;
use std::fmt;

/// Lifecycle status of a shift.
///
/// The normal lifecycle is `pending → on site → completed`, moved forward
/// by user action only. Imported rows may carry any other label (e.g.
/// "cancelled"); those are preserved verbatim in the `Other` arm.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum ShiftStatus {
    Pending,
    OnSite,
    Completed,
    Other(String),
}

impl ShiftStatus {
    /// Convert enum → DB string.
    pub fn to_db_str(&self) -> &str {
        match self {
            ShiftStatus::Pending => "pending",
            ShiftStatus::OnSite => "on site",
            ShiftStatus::Completed => "completed",
            ShiftStatus::Other(s) => s,
        }
    }

    /// Convert DB string → enum. Unknown labels are kept, lower-cased.
    pub fn from_db_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "pending" => ShiftStatus::Pending,
            "on site" => ShiftStatus::OnSite,
            "completed" => ShiftStatus::Completed,
            other => ShiftStatus::Other(other.to_string()),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, ShiftStatus::Completed)
    }

    pub fn is_on_site(&self) -> bool {
        matches!(self, ShiftStatus::OnSite)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ShiftStatus::Pending)
    }
}

impl fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}
