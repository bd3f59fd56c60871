mod config;
mod errors;
mod main;
mod types;

pub use errors::VatsimError;
pub use main::refresh_access_token;
pub use types::{AtcStatistics, PilotRatingStatistics, VatsimPilotStatistics, VatsimTokenResponse};

pub(crate) use main::{
    build_authorization_url, exchange_code_for_token, fetch_pilot_statistics, fetch_vatsim_user,
    transform_vatsim_user,
};

pub(crate) fn init() {
    // Validate required environment variables early
    let _ = *config::VATSIM_CLIENT_ID;
    let _ = *config::VATSIM_CLIENT_SECRET;
    let _ = *config::VATSIM_OAUTH_URL;
    let _ = *config::VATSIM_REDIRECT_URI;
}
