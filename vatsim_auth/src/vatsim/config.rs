use std::env;
use std::sync::LazyLock;

/// Base URL of the VATSIM Connect identity provider.
/// The default is the sandbox instance; production deployments point this at
/// `https://auth.vatsim.net`.
pub(crate) static VATSIM_OAUTH_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("VATSIM_OAUTH_URL")
        .ok()
        .unwrap_or("https://auth-dev.vatsim.net".to_string())
});

pub(crate) static VATSIM_CLIENT_ID: LazyLock<String> =
    LazyLock::new(|| env::var("VATSIM_CLIENT_ID").expect("VATSIM_CLIENT_ID must be set"));

pub(crate) static VATSIM_CLIENT_SECRET: LazyLock<String> =
    LazyLock::new(|| env::var("VATSIM_CLIENT_SECRET").expect("VATSIM_CLIENT_SECRET must be set"));

pub(crate) static VATSIM_REDIRECT_URI: LazyLock<String> = LazyLock::new(|| {
    env::var("VATSIM_REDIRECT_URI")
        .ok()
        .unwrap_or("http://localhost:3000/api/auth/callback".to_string())
});

/// Scopes requested from the provider. `vatsim_details` carries the rating,
/// division and region blocks the pilot profile is built from.
pub(crate) const VATSIM_SCOPES: [&str; 4] = ["full_name", "email", "vatsim_details", "country"];
