//! vatsim-auth-axum - axum routers and extractors for vatsim-auth
//!
//! Mount [`router`] into an application and the login, callback, me and
//! logout endpoints appear under `AUTH_ROUTE_PREFIX`, with the pilot
//! statistics endpoints under `/api/pilot`.

mod error;
mod oauth2;
mod pilot;
mod router;
mod session;

pub use router::router;
pub use session::AuthUser;

pub use oauth2::auth_router;
pub use pilot::pilot_router;

// Re-exported so applications can mount the auth router somewhere custom.
pub use vatsim_auth::AUTH_ROUTE_PREFIX;
