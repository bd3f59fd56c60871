//! Orchestration of the login redirect and the provider callback.
//!
//! The callback handler is a strict-order state machine: each step either
//! passes or short-circuits into a redirect back to the login origin with a
//! machine-readable error tag. It never returns an error to the HTTP layer;
//! every failure path is already a redirect.

use chrono::Utc;
use headers::Cookie;
use http::header::HeaderMap;
use serde::Deserialize;

use crate::session::{
    SessionData, User, clear_session, consume_state, generate_state, issue_session, issue_state,
    read_session,
};
use crate::vatsim::{
    VatsimError, VatsimPilotStatistics, build_authorization_url, exchange_code_for_token,
    fetch_pilot_statistics, fetch_vatsim_user, transform_vatsim_user,
};

use super::errors::CoordinationError;

/// Query parameters the provider appends when redirecting back.
#[derive(Debug, Default, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Terminal outcomes of a failed callback, carried back to the browser as
/// `/?error=<tag>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallbackDenial {
    OAuthError,
    MissingCode,
    MissingState,
    InvalidState,
    CallbackFailed,
}

impl CallbackDenial {
    fn tag(self) -> &'static str {
        match self {
            Self::OAuthError => "oauth_error",
            Self::MissingCode => "missing_code",
            Self::MissingState => "missing_state",
            Self::InvalidState => "invalid_state",
            Self::CallbackFailed => "callback_failed",
        }
    }

    fn redirect_target(self) -> String {
        format!("/?error={}", self.tag())
    }
}

/// Mint a CSRF state token, store it in its short-lived cookie and build the
/// provider authorization URL carrying the same state.
pub async fn prepare_login_core() -> Result<(String, HeaderMap), CoordinationError> {
    let state = generate_state()?;

    let mut headers = HeaderMap::new();
    issue_state(&mut headers, &state)?;

    let auth_url = build_authorization_url(&state);
    tracing::debug!("Auth URL: {:#?}", auth_url);

    Ok((auth_url, headers))
}

/// Run the callback state machine.
///
/// Returns the response headers (state-cookie deletion, and the session
/// cookie on success) together with the redirect target. The stored state is
/// consumed before the comparison, so a failed validation still burns the
/// token.
pub async fn handle_callback_core(
    query: &CallbackQuery,
    cookies: Option<&Cookie>,
) -> (HeaderMap, String) {
    let mut headers = HeaderMap::new();

    if let Some(error) = &query.error {
        tracing::error!("Provider returned an OAuth error: {error}");
        return (headers, CallbackDenial::OAuthError.redirect_target());
    }

    let Some(code) = query.code.as_deref() else {
        tracing::warn!("Callback without an authorization code");
        return (headers, CallbackDenial::MissingCode.redirect_target());
    };

    let Some(state) = query.state.as_deref() else {
        tracing::warn!("Callback without a state parameter");
        return (headers, CallbackDenial::MissingState.redirect_target());
    };

    // Read-then-clear, no matter how the comparison below turns out.
    let stored_state = match consume_state(cookies, &mut headers) {
        Ok(stored_state) => stored_state,
        Err(e) => {
            tracing::error!("Failed to consume state cookie: {e}");
            return (headers, CallbackDenial::CallbackFailed.redirect_target());
        }
    };

    if stored_state.as_deref() != Some(state) {
        tracing::error!(
            received = state,
            stored = stored_state.as_deref().unwrap_or("<none>"),
            "State mismatch"
        );
        return (headers, CallbackDenial::InvalidState.redirect_target());
    }

    match establish_session(code, &mut headers).await {
        Ok(()) => (headers, "/".to_string()),
        Err(e) => {
            tracing::error!("OAuth callback failed: {e}");
            (headers, CallbackDenial::CallbackFailed.redirect_target())
        }
    }
}

/// Steps 6-8 of the callback: token exchange, identity fetch, session
/// issuance. The session cookie is appended last, so no partial session can
/// ever reach the browser.
async fn establish_session(
    code: &str,
    headers: &mut HeaderMap,
) -> Result<(), CoordinationError> {
    let token_response = exchange_code_for_token(code).await?;
    let vatsim_user = fetch_vatsim_user(&token_response.access_token).await?;
    let user = transform_vatsim_user(vatsim_user);

    let expires_at =
        Utc::now().timestamp_millis() + (token_response.expires_in as i64) * 1000;

    let session = SessionData {
        user,
        access_token: token_response.access_token,
        refresh_token: token_response.refresh_token,
        expires_at: Some(expires_at),
    };

    issue_session(headers, &session)?;
    Ok(())
}

/// The identity behind `GET /me`: `None` is a valid answer, not an error.
pub fn get_session_user_core(cookies: Option<&Cookie>) -> Option<User> {
    cookies
        .and_then(read_session)
        .map(|session| session.user)
}

pub fn prepare_logout_core() -> Result<HeaderMap, CoordinationError> {
    let mut headers = HeaderMap::new();
    clear_session(&mut headers)?;
    Ok(headers)
}

/// Ratings lookup for a pilot, with the unknown-CID case mapped to a
/// not-found resource so the HTTP layer can answer 404.
pub async fn fetch_pilot_statistics_core(
    cid: &str,
) -> Result<VatsimPilotStatistics, CoordinationError> {
    match fetch_pilot_statistics(cid).await {
        Ok(stats) => Ok(stats),
        Err(VatsimError::PilotNotFound(cid)) => Err(CoordinationError::ResourceNotFound {
            resource_type: "Pilot".to_string(),
            resource_id: cid,
        }),
        Err(e) => Err(e.into()),
    }
}
