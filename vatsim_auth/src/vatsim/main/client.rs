//! HTTP client for the VATSIM Connect provider: authorization URL building,
//! the two token-endpoint grants, identity fetch and the ratings lookup.

use std::time::Duration;

use url::Url;

use crate::vatsim::config::{
    VATSIM_CLIENT_ID, VATSIM_CLIENT_SECRET, VATSIM_OAUTH_URL, VATSIM_REDIRECT_URI, VATSIM_SCOPES,
};
use crate::vatsim::errors::VatsimError;
use crate::vatsim::types::{VatsimPilotStatistics, VatsimTokenResponse, VatsimUser, VatsimUserEnvelope};

/// Client for calls to the identity provider. The 10 second timeout keeps a
/// stalled provider from pinning request handlers indefinitely; there is no
/// retry, a failed exchange surfaces to the caller.
fn get_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create reqwest client")
}

pub(crate) fn build_authorization_url(state: &str) -> String {
    let mut url = Url::parse(&format!("{}/oauth/authorize", VATSIM_OAUTH_URL.as_str()))
        .expect("Invalid VATSIM_OAUTH_URL");
    url.query_pairs_mut()
        .append_pair("client_id", VATSIM_CLIENT_ID.as_str())
        .append_pair("redirect_uri", VATSIM_REDIRECT_URI.as_str())
        .append_pair("response_type", "code")
        .append_pair("scope", &VATSIM_SCOPES.join(" "))
        .append_pair("state", state);
    url.to_string()
}

pub(crate) async fn exchange_code_for_token(
    code: &str,
) -> Result<VatsimTokenResponse, VatsimError> {
    request_token(&[
        ("grant_type", "authorization_code"),
        ("client_id", VATSIM_CLIENT_ID.as_str()),
        ("client_secret", VATSIM_CLIENT_SECRET.as_str()),
        ("redirect_uri", VATSIM_REDIRECT_URI.as_str()),
        ("code", code),
    ])
    .await
}

/// Trade a refresh token for a fresh token pair.
///
/// Provided for completeness of the provider surface; nothing in the session
/// state machine invokes it.
pub async fn refresh_access_token(
    refresh_token: &str,
) -> Result<VatsimTokenResponse, VatsimError> {
    request_token(&[
        ("grant_type", "refresh_token"),
        ("client_id", VATSIM_CLIENT_ID.as_str()),
        ("client_secret", VATSIM_CLIENT_SECRET.as_str()),
        ("refresh_token", refresh_token),
    ])
    .await
}

async fn request_token(form: &[(&str, &str)]) -> Result<VatsimTokenResponse, VatsimError> {
    let client = get_client();
    let response = client
        .post(format!("{}/oauth/token", VATSIM_OAUTH_URL.as_str()))
        .form(form)
        .send()
        .await
        .map_err(|e| VatsimError::TokenExchange(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        // Keep the 4xx/5xx distinction in the logs even though callers
        // collapse both into one redirect tag for the user.
        if status.is_client_error() {
            tracing::error!("Token endpoint rejected the request: {status}");
        } else {
            tracing::error!("Token endpoint unavailable: {status}");
        }
        return Err(VatsimError::TokenExchange(status.to_string()));
    }

    let response_body = response
        .text()
        .await
        .map_err(|e| VatsimError::TokenExchange(e.to_string()))?;
    let token_response: VatsimTokenResponse = serde_json::from_str(&response_body)
        .map_err(|e| VatsimError::Serde(format!("Failed to deserialize token response: {e}")))?;

    tracing::debug!("Token response scopes: {:?}", token_response.scopes);
    Ok(token_response)
}

pub(crate) async fn fetch_vatsim_user(access_token: &str) -> Result<VatsimUser, VatsimError> {
    let client = get_client();
    let response = client
        .get(format!("{}/api/user", VATSIM_OAUTH_URL.as_str()))
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| VatsimError::FetchUserInfo(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(VatsimError::FetchUserInfo(status.to_string()));
    }

    let response_body = response
        .text()
        .await
        .map_err(|e| VatsimError::FetchUserInfo(e.to_string()))?;
    let envelope: VatsimUserEnvelope = serde_json::from_str(&response_body)
        .map_err(|e| VatsimError::Serde(format!("Failed to deserialize user response: {e}")))?;

    tracing::debug!("Fetched identity for CID {}", envelope.data.cid);
    Ok(envelope.data)
}

/// Look up a pilot on the public ratings API. A provider 404 means the CID is
/// unknown and is reported as [`VatsimError::PilotNotFound`]; every other
/// failure stays a generic statistics error.
pub(crate) async fn fetch_pilot_statistics(
    cid: &str,
) -> Result<VatsimPilotStatistics, VatsimError> {
    let client = get_client();
    let response = client
        .get(format!(
            "{}/api/ratings/pilot/{cid}",
            VATSIM_OAUTH_URL.as_str()
        ))
        .send()
        .await
        .map_err(|e| VatsimError::FetchStatistics(e.to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(VatsimError::PilotNotFound(cid.to_string()));
    }
    if !status.is_success() {
        return Err(VatsimError::FetchStatistics(status.to_string()));
    }

    let response_body = response
        .text()
        .await
        .map_err(|e| VatsimError::FetchStatistics(e.to_string()))?;
    serde_json::from_str(&response_body)
        .map_err(|e| VatsimError::Serde(format!("Failed to deserialize statistics: {e}")))
}
