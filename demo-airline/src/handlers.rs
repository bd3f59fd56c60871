use axum::response::Html;

use vatsim_auth::AUTH_ROUTE_PREFIX;
use vatsim_auth_axum::AuthUser;

/// Landing page: a login link when anonymous, the pilot's identity when a
/// session cookie is present. The error tags appended by a failed callback
/// show up in the query string of this page.
pub(crate) async fn index(user: Option<AuthUser>) -> Html<String> {
    let prefix = AUTH_ROUTE_PREFIX.as_str();
    let body = match user {
        Some(user) => format!(
            "<h1>Virtual Airline</h1>\
             <p>Signed in as {} (CID {}, {} / {})</p>\
             <form method=\"post\" action=\"{prefix}/logout\">\
             <button type=\"submit\">Log out</button></form>",
            user.full_name, user.cid, user.rating, user.pilot_rating
        ),
        None => format!(
            "<h1>Virtual Airline</h1>\
             <p><a href=\"{prefix}/login\">Sign in with VATSIM</a></p>"
        ),
    };
    Html(body)
}
