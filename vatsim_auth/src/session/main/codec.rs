//! Transport encoding of the session payload, independent of signing.

use crate::session::errors::SessionError;
use crate::session::types::SessionData;
use crate::utils::{base64url_decode, base64url_encode};

pub(super) fn encode_session(session: &SessionData) -> Result<String, SessionError> {
    let json = serde_json::to_string(session).map_err(|e| SessionError::Serde(e.to_string()))?;
    Ok(base64url_encode(json.into_bytes()))
}

/// Reverses [`encode_session`]. Malformed base64, non-UTF-8 bytes and invalid
/// JSON are all decode failures, never panics.
pub(super) fn decode_session(token: &str) -> Result<SessionData, SessionError> {
    let decoded_bytes =
        base64url_decode(token).map_err(|e| SessionError::Decode(e.to_string()))?;
    let decoded_string = String::from_utf8(decoded_bytes)
        .map_err(|e| SessionError::Decode(format!("Failed to decode UTF-8: {e}")))?;
    serde_json::from_str(&decoded_string).map_err(|e| SessionError::Serde(e.to_string()))
}
