use serde::Serialize;

/// An employer record. `name` is the display identity and a
/// case-insensitive key per profile: two differently-cased inputs must
/// resolve to the same record, never create a duplicate.
#[derive(Debug, Clone, Serialize)]
pub struct Employer {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    /// Last-used hourly rate, offered as a suggestion on new shifts.
    pub default_rate: Option<f64>,
    pub created_at: String,
}
