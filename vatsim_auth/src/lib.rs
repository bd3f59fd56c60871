//! vatsim-auth - VATSIM Connect authentication for virtual-airline platforms
//!
//! This crate implements the authorization-code exchange with the VATSIM
//! identity provider and a stateless, HMAC-authenticated session cookie that
//! replaces a server-side session store.

mod config;
mod coordination;
mod session;
mod utils;
mod vatsim;

// Re-export the coordination entry points used by the HTTP layer
pub use coordination::{
    CallbackQuery, CoordinationError, fetch_pilot_statistics_core, get_session_user_core,
    handle_callback_core, prepare_login_core, prepare_logout_core,
};

// Re-export the route prefix
pub use config::AUTH_ROUTE_PREFIX;

pub use session::{SESSION_COOKIE_NAME, SessionData, SessionError, User, read_session};

pub use vatsim::{
    AtcStatistics, PilotRatingStatistics, VatsimError, VatsimPilotStatistics,
    VatsimTokenResponse, refresh_access_token,
};

/// Validate the configuration surface eagerly.
///
/// Every value checked here is otherwise resolved lazily on first use; calling
/// this at startup turns a missing client id or an undersized signing secret
/// into an immediate fatal error instead of a failure on the first login.
pub fn init() {
    session::init();
    vatsim::init();
}

#[cfg(test)]
pub(crate) mod test_utils;
