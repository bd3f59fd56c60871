//! Cookie-backed session store: codec + signer composed behind an
//! issue/read/clear surface.

use chrono::Utc;
use headers::Cookie;
use http::header::HeaderMap;

use crate::session::config::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME};
use crate::session::errors::SessionError;
use crate::session::types::SessionData;
use crate::utils::{header_delete_cookie, header_set_cookie};

use super::codec::encode_session;
use super::signer::{sign, verify};

/// Write the signed session cookie onto a response. Appends exactly one
/// Set-Cookie header and mutates nothing else.
pub(crate) fn issue_session(
    headers: &mut HeaderMap,
    session: &SessionData,
) -> Result<(), SessionError> {
    let token = sign(&encode_session(session)?);
    header_set_cookie(
        headers,
        SESSION_COOKIE_NAME.as_str(),
        &token,
        *SESSION_COOKIE_MAX_AGE as i64,
    )?;
    Ok(())
}

/// Read the session from the request cookies.
///
/// This is the single source of truth for "is this requester authenticated":
/// missing cookie, bad signature, bad decode and elapsed expiry all collapse
/// to `None`. The expiry check runs only after the signature verifies, so an
/// attacker-supplied `expiresAt` is never even parsed. Side-effect-free and
/// safe to call several times per request.
pub fn read_session(cookies: &Cookie) -> Option<SessionData> {
    let signed = cookies.get(SESSION_COOKIE_NAME.as_str())?;

    let payload = verify(signed)?;

    let session = match super::codec::decode_session(&payload) {
        Ok(session) => session,
        Err(e) => {
            tracing::debug!("Discarding undecodable session cookie: {e}");
            return None;
        }
    };

    if let Some(expires_at) = session.expires_at {
        if Utc::now().timestamp_millis() > expires_at {
            tracing::debug!("Session expired at {expires_at}");
            return None;
        }
    }

    Some(session)
}

pub(crate) fn clear_session(headers: &mut HeaderMap) -> Result<(), SessionError> {
    header_delete_cookie(headers, SESSION_COOKIE_NAME.as_str())?;
    Ok(())
}
