use serde::Serialize;

/// Context rendered into the landing page: the identity fields of the
/// logged-in user, unmodified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileContext {
    pub first_name: String,
    pub last_name: String,
    pub user_id: i64,
}
