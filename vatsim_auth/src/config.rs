use std::env;
use std::sync::LazyLock;

/// Prefix under which the auth routes are mounted by the HTTP layer.
pub static AUTH_ROUTE_PREFIX: LazyLock<String> = LazyLock::new(|| {
    env::var("AUTH_ROUTE_PREFIX")
        .ok()
        .unwrap_or("/api/auth".to_string())
});

/// Whether the process runs in production mode.
///
/// Controls the `Secure` attribute on every cookie this crate sets: local
/// development happens over plain HTTP, so marking cookies `Secure` there
/// would make the browser drop them silently.
pub(crate) static IS_PRODUCTION: LazyLock<bool> = LazyLock::new(|| {
    env::var("APP_ENV")
        .map(|v| v.eq_ignore_ascii_case("production"))
        .unwrap_or(false)
});
