use std::env;
use std::sync::LazyLock;

pub static SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    env::var("SESSION_COOKIE_NAME")
        .ok()
        .unwrap_or("vatsim_session".to_string())
});

pub(crate) static SESSION_COOKIE_MAX_AGE: LazyLock<u64> = LazyLock::new(|| {
    env::var("SESSION_COOKIE_MAX_AGE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(60 * 60 * 24 * 7) // Default to 7 days if not set or invalid
});

pub(crate) static OAUTH_STATE_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    env::var("OAUTH_STATE_COOKIE_NAME")
        .ok()
        .unwrap_or("oauth_state".to_string())
});

pub(crate) static OAUTH_STATE_COOKIE_MAX_AGE: LazyLock<u64> = LazyLock::new(|| {
    env::var("OAUTH_STATE_COOKIE_MAX_AGE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(60 * 10) // Default to 10 minutes if not set or invalid
});

const SESSION_SECRET_MIN_LEN: usize = 32;

/// HMAC key for session cookies. Anything shorter than 32 bytes is a
/// configuration error, never a degraded signing mode.
pub(super) static SESSION_SECRET: LazyLock<Vec<u8>> = LazyLock::new(|| {
    let secret = env::var("SESSION_SECRET").unwrap_or_default();
    validate_session_secret(&secret).expect("SESSION_SECRET must be at least 32 characters");
    secret.into_bytes()
});

pub(super) fn validate_session_secret(secret: &str) -> Result<(), String> {
    if secret.len() < SESSION_SECRET_MIN_LEN {
        return Err(format!(
            "SESSION_SECRET must be at least {SESSION_SECRET_MIN_LEN} characters, got {}",
            secret.len()
        ));
    }
    Ok(())
}
