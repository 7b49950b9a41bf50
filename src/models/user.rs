use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A demo user. Ids are index-derived (`user_<n>`) so the whole dataset can
/// be regenerated byte-identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub is_online: bool,
    /// Epoch millis; equals the generation instant for online users.
    pub last_seen: i64,
    pub status_message: Option<String>,
}
