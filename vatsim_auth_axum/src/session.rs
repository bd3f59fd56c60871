use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, OptionalFromRequestParts},
};
use axum_extra::{TypedHeader, headers};
use http::{StatusCode, request::Parts};

use vatsim_auth::{User, read_session};

/// Authenticated pilot, available as an axum extractor.
///
/// The extractor reads and verifies the signed session cookie; a missing,
/// tampered or expired cookie rejects with 401. Use `Option<AuthUser>` for
/// endpoints where anonymous access is a valid state rather than an error.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use vatsim_auth_axum::AuthUser;
///
/// async fn profile(user: AuthUser) -> String {
///     format!("Hello, {}!", user.full_name)
/// }
///
/// let app: Router = Router::new().route("/profile", get(profile));
/// ```
#[derive(Clone, Debug)]
pub struct AuthUser {
    /// Stable numeric identifier assigned by the provider
    pub cid: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub country: String,
    /// Primary (controller) rating short code
    pub rating: String,
    /// Pilot rating short code
    pub pilot_rating: String,
    pub division: String,
}

impl From<User> for AuthUser {
    fn from(user: User) -> Self {
        Self {
            cid: user.cid,
            first_name: user.first_name,
            last_name: user.last_name,
            full_name: user.full_name,
            email: user.email,
            country: user.country,
            rating: user.rating,
            pilot_rating: user.pilot_rating,
            division: user.division,
        }
    }
}

impl From<AuthUser> for User {
    fn from(auth_user: AuthUser) -> Self {
        Self {
            cid: auth_user.cid,
            first_name: auth_user.first_name,
            last_name: auth_user.last_name,
            full_name: auth_user.full_name,
            email: auth_user.email,
            country: auth_user.country,
            rating: auth_user.rating,
            pilot_rating: auth_user.pilot_rating,
            division: auth_user.division,
        }
    }
}

impl<B> FromRequestParts<B> for AuthUser
where
    B: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _: &B) -> Result<Self, Self::Rejection> {
        let TypedHeader(cookies) = parts
            .extract::<TypedHeader<headers::Cookie>>()
            .await
            .map_err(|_| {
                tracing::debug!("Request carries no cookies");
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            })?;

        let session = read_session(&cookies).ok_or_else(|| {
            tracing::debug!("No valid session cookie");
            (StatusCode::UNAUTHORIZED, "Unauthorized")
        })?;

        Ok(AuthUser::from(session.user))
    }
}

impl<B> OptionalFromRequestParts<B> for AuthUser
where
    B: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &B,
    ) -> Result<Option<Self>, Self::Rejection> {
        let result: Result<Self, Self::Rejection> =
            <AuthUser as FromRequestParts<B>>::from_request_parts(parts, state).await;
        Ok(result.ok())
    }
}
