//! One-time CSRF state tokens for the OAuth round trip.

use headers::Cookie;
use http::header::HeaderMap;

use crate::session::config::{OAUTH_STATE_COOKIE_MAX_AGE, OAUTH_STATE_COOKIE_NAME};
use crate::session::errors::SessionError;
use crate::utils::{gen_random_string, header_delete_cookie, header_set_cookie};

/// 32 bytes from the system CSPRNG, base64url encoded without padding.
pub(crate) fn generate_state() -> Result<String, SessionError> {
    Ok(gen_random_string(32)?)
}

pub(crate) fn issue_state(headers: &mut HeaderMap, state: &str) -> Result<(), SessionError> {
    header_set_cookie(
        headers,
        OAUTH_STATE_COOKIE_NAME.as_str(),
        state,
        *OAUTH_STATE_COOKIE_MAX_AGE as i64,
    )?;
    Ok(())
}

/// Read the stored state and delete its cookie in the same step.
///
/// The deletion header is appended before the value is even inspected, so the
/// token is single-use no matter how the subsequent comparison turns out.
pub(crate) fn consume_state(
    cookies: Option<&Cookie>,
    headers: &mut HeaderMap,
) -> Result<Option<String>, SessionError> {
    header_delete_cookie(headers, OAUTH_STATE_COOKIE_NAME.as_str())?;
    // A lingering deleted cookie arrives as an empty value; treat it as absent
    let state = cookies
        .and_then(|c| c.get(OAUTH_STATE_COOKIE_NAME.as_str()))
        .filter(|value| !value.is_empty())
        .map(str::to_string);
    Ok(state)
}
