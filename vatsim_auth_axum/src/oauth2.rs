use axum::{
    Json, Router,
    extract::Query,
    http::{HeaderMap, StatusCode},
    response::Redirect,
    routing::{get, post},
};
use axum_extra::{TypedHeader, headers};
use serde::Serialize;

use vatsim_auth::{
    CallbackQuery, User, get_session_user_core, handle_callback_core, prepare_login_core,
    prepare_logout_core,
};

use super::error::IntoResponseError;

pub fn auth_router() -> Router {
    Router::new()
        .route("/login", get(login))
        .route("/callback", get(callback))
        .route("/me", get(me))
        .route("/logout", post(logout))
}

/// Start the authorization-code flow: mint the CSRF state, park it in its
/// cookie and send the browser to the provider.
async fn login() -> Result<(HeaderMap, Redirect), (StatusCode, String)> {
    let (auth_url, headers) = prepare_login_core()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((headers, Redirect::to(&auth_url)))
}

/// Provider callback. Never fails as an HTTP response: the orchestrator maps
/// every outcome to a redirect target, success and denial alike.
async fn callback(
    Query(query): Query<CallbackQuery>,
    cookies: Option<TypedHeader<headers::Cookie>>,
) -> (HeaderMap, Redirect) {
    let cookies = cookies.as_ref().map(|TypedHeader(cookies)| cookies);
    let (headers, target) = handle_callback_core(&query, cookies).await;
    (headers, Redirect::to(&target))
}

#[derive(Debug, Serialize)]
struct MeResponse {
    user: Option<User>,
}

/// Identity endpoint: always 200, an absent session is a valid "no user"
/// answer rather than an auth failure.
async fn me(cookies: Option<TypedHeader<headers::Cookie>>) -> Json<MeResponse> {
    let cookies = cookies.as_ref().map(|TypedHeader(cookies)| cookies);
    Json(MeResponse {
        user: get_session_user_core(cookies),
    })
}

async fn logout() -> Result<(HeaderMap, StatusCode), (StatusCode, String)> {
    let headers = prepare_logout_core().into_response_error()?;
    Ok((headers, StatusCode::OK))
}
