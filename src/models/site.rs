use serde::Serialize;

/// A work site. `site_name` is a case-insensitive key per profile,
/// like `Employer::name`.
#[derive(Debug, Clone, Serialize)]
pub struct Site {
    pub id: i64,
    pub user_id: String,
    pub site_name: String,
    pub postal_code: String,
    pub created_at: String,
}
