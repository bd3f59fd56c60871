use axum::Router;

use vatsim_auth::AUTH_ROUTE_PREFIX;

use super::oauth2::auth_router;
use super::pilot::pilot_router;

/// Full HTTP surface of the auth core: the auth routes under
/// `AUTH_ROUTE_PREFIX` and the pilot statistics routes under `/api/pilot`.
pub fn router() -> Router {
    Router::new()
        .nest(AUTH_ROUTE_PREFIX.as_str(), auth_router())
        .nest("/api/pilot", pilot_router())
}
