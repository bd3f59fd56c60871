//! Shared helpers for the inline unit tests.

use std::env;
use std::sync::Once;

use headers::{Cookie, HeaderMapExt};
use http::header::{COOKIE, HeaderMap, SET_COOKIE};

use crate::session::{SessionData, User};

static INIT: Once = Once::new();

/// Point the configuration statics at deterministic test values.
///
/// The statics are `LazyLock`s, so the first dereference wins for the whole
/// process; every test therefore uses the same constants. The provider URL
/// targets a discard port so an accidental network call fails immediately
/// instead of reaching the real VATSIM endpoints.
pub(crate) fn init_test_env() {
    INIT.call_once(|| unsafe {
        env::set_var("SESSION_SECRET", "unit-test-session-secret-0123456789abcdef");
        env::set_var("VATSIM_OAUTH_URL", "http://127.0.0.1:9");
        env::set_var("VATSIM_CLIENT_ID", "airline-client");
        env::set_var("VATSIM_CLIENT_SECRET", "airline-client-secret");
        env::set_var(
            "VATSIM_REDIRECT_URI",
            "http://localhost:3000/api/auth/callback",
        );
    });
}

pub(crate) fn sample_user() -> User {
    User {
        cid: "1234567".to_string(),
        first_name: "Maria".to_string(),
        last_name: "Keller".to_string(),
        full_name: "Maria Keller".to_string(),
        email: "maria.keller@example.com".to_string(),
        country: "Germany".to_string(),
        rating: "S3".to_string(),
        pilot_rating: "PPL".to_string(),
        division: "Germany".to_string(),
    }
}

pub(crate) fn sample_session(expires_at: Option<i64>) -> SessionData {
    SessionData {
        user: sample_user(),
        access_token: "access-token-value".to_string(),
        refresh_token: "refresh-token-value".to_string(),
        expires_at,
    }
}

/// Build a request-side `Cookie` from explicit name/value pairs.
pub(crate) fn cookie_jar(pairs: &[(&str, &str)]) -> Cookie {
    let line = if pairs.is_empty() {
        "_empty_jar=1".to_string()
    } else {
        pairs
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    };
    let mut request = HeaderMap::new();
    request.insert(COOKIE, line.parse().expect("valid cookie header"));
    request.typed_get().expect("parseable cookie header")
}

/// Replay the Set-Cookie headers of a response as the next request's cookies,
/// the way a browser would (minus expiry handling).
pub(crate) fn cookies_from_response(response: &HeaderMap) -> Cookie {
    let pairs: Vec<(String, String)> = response
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            Some((name.to_string(), value.to_string()))
        })
        .collect();
    let borrowed: Vec<(&str, &str)> = pairs
        .iter()
        .map(|(n, v)| (n.as_str(), v.as_str()))
        .collect();
    cookie_jar(&borrowed)
}
