use serde::{Deserialize, Serialize};

/// Identity of an authenticated pilot, flattened from the provider shape.
///
/// Immutable once issued; replaced wholesale on re-login. Field names
/// serialize as camelCase because the session cookie payload keeps the wire
/// format the web client already understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub cid: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub country: String,
    pub rating: String,
    pub pilot_rating: String,
    pub division: String,
}

/// The session payload carried entirely inside the signed cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
    /// Absolute epoch-millisecond expiry of the payload, independent of the
    /// cookie's own Max-Age. Absent means the payload never expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}
