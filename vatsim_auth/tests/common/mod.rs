//! Shared setup for the flow tests: a mock VATSIM Connect provider on an
//! ephemeral port, plus cookie plumbing helpers.

use std::collections::HashMap;
use std::env;
use std::sync::OnceLock;

use axum::{
    Json, Router,
    extract::{Form, Path},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use headers::{Cookie, HeaderMapExt};
use http::header::{COOKIE, SET_COOKIE};
use serde_json::{Value, json};

pub const VALID_CODE: &str = "valid-code";
pub const SHORT_LIVED_CODE: &str = "short-lived-code";
pub const ACCESS_TOKEN: &str = "mock-access-token";
pub const REFRESH_TOKEN: &str = "mock-refresh-token";
pub const KNOWN_CID: &str = "1234567";

static MOCK_PROVIDER: OnceLock<u16> = OnceLock::new();

/// Start the mock provider once per test binary and point the configuration
/// statics at it. The statics are `LazyLock`s, so this must run before the
/// first library call in the process.
pub fn setup() {
    MOCK_PROVIDER.get_or_init(|| {
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("mock provider runtime");
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind mock provider");
                let port = listener.local_addr().expect("mock provider addr").port();
                tx.send(port).expect("report mock provider port");
                axum::serve(listener, mock_provider())
                    .await
                    .expect("mock provider serve");
            });
        });
        let port = rx.recv().expect("mock provider port");

        unsafe {
            env::set_var("VATSIM_OAUTH_URL", format!("http://127.0.0.1:{port}"));
            env::set_var("VATSIM_CLIENT_ID", "demo-airline");
            env::set_var("VATSIM_CLIENT_SECRET", "demo-airline-secret");
            env::set_var(
                "VATSIM_REDIRECT_URI",
                "http://localhost:3000/api/auth/callback",
            );
            env::set_var("SESSION_SECRET", "flow-test-session-secret-0123456789abcdef");
        }
        port
    });
}

fn mock_provider() -> Router {
    Router::new()
        .route("/oauth/token", post(token_endpoint))
        .route("/api/user", get(user_endpoint))
        .route("/api/ratings/pilot/{cid}", get(ratings_endpoint))
}

fn token_response(expires_in: u64) -> Value {
    json!({
        "access_token": ACCESS_TOKEN,
        "token_type": "Bearer",
        "expires_in": expires_in,
        "refresh_token": REFRESH_TOKEN,
        "scopes": ["full_name", "email", "vatsim_details", "country"]
    })
}

async fn token_endpoint(
    Form(form): Form<HashMap<String, String>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let grant_type = form.get("grant_type").map(String::as_str);
    match grant_type {
        Some("authorization_code") => match form.get("code").map(String::as_str) {
            Some(VALID_CODE) => Ok(Json(token_response(3600))),
            Some(SHORT_LIVED_CODE) => Ok(Json(token_response(0))),
            _ => Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "invalid_grant" })),
            )),
        },
        Some("refresh_token") if form.get("refresh_token").map(String::as_str) == Some(REFRESH_TOKEN) => {
            Ok(Json(token_response(3600)))
        }
        _ => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "unsupported_grant_type" })),
        )),
    }
}

async fn user_endpoint(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    let expected = format!("Bearer {ACCESS_TOKEN}");
    let authorized = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(expected.as_str());
    if !authorized {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(Json(json!({
        "data": {
            "cid": KNOWN_CID,
            "personal": {
                "name_first": "Maria",
                "name_last": "Keller",
                "name_full": "Maria Keller",
                "email": "maria.keller@example.com",
                "country": { "id": "DE", "name": "Germany" }
            },
            "vatsim": {
                "rating": { "id": 4, "long": "Senior Student", "short": "S3" },
                "pilotrating": { "id": 1, "long": "Private Pilot Licence", "short": "PPL" },
                "division": { "id": "GER", "name": "Germany" },
                "region": { "id": "EMEA", "name": "Europe, Middle East and Africa" },
                "subdivision": { "id": null, "name": null }
            },
            "oauth": { "token_valid": "true" }
        }
    })))
}

async fn ratings_endpoint(Path(cid): Path<String>) -> Result<Json<Value>, StatusCode> {
    if cid != KNOWN_CID {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({
        "id": KNOWN_CID,
        "rating": 4,
        "pilotrating": 1,
        "susp_date": null,
        "reg_date": "2015-03-14T09:26:53",
        "region": "EMEA",
        "division": "GER",
        "subdivision": null,
        "lastratingchange": "2020-01-01T00:00:00",
        "atc": {
            "hours": 102.5, "s1": 10.0, "s2": 20.0, "s3": 72.5,
            "c1": 0.0, "c3": 0.0, "i1": 0.0, "i3": 0.0, "sup": 0.0, "adm": 0.0
        },
        "pilot": { "hours": 512.3, "p1": 100.0, "p2": null, "p3": null, "p4": null }
    })))
}

/// Build a request-side `Cookie` from explicit pairs.
pub fn cookie_jar(pairs: &[(&str, &str)]) -> Cookie {
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

/// Replay a response's Set-Cookie headers as the next request's cookies, the
/// way a browser would. Deleted cookies (empty value) are dropped.
pub fn cookies_from_response(response: &HeaderMap) -> Cookie {
    let pairs: Vec<(String, String)> = response
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            if value.is_empty() {
                return None;
            }
            Some((name.to_string(), value.to_string()))
        })
        .collect();
    let borrowed: Vec<(&str, &str)> = pairs
        .iter()
        .map(|(n, v)| (n.as_str(), v.as_str()))
        .collect();
    cookie_jar(&borrowed)
}

/// The value of one Set-Cookie entry by cookie name, if present.
pub fn set_cookie_value(response: &HeaderMap, name: &str) -> Option<String> {
    response
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find_map(|pair| {
            let (cookie_name, value) = pair.split_once('=')?;
            (cookie_name == name).then(|| value.to_string())
        })
}

/// Extract the `state` query parameter from an authorization URL.
pub fn state_from_auth_url(auth_url: &str) -> String {
    url::Url::parse(auth_url)
        .expect("valid auth URL")
        .query_pairs()
        .find(|(k, _)| k == "state")
        .map(|(_, v)| v.to_string())
        .expect("state parameter present")
}
