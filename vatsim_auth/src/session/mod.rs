mod config;
mod errors;
mod main;
mod types;

pub use config::SESSION_COOKIE_NAME; // Required for cookie configuration
pub use errors::SessionError;
pub use main::read_session;
pub use types::{SessionData, User};

pub(crate) use main::{clear_session, consume_state, generate_state, issue_session, issue_state};

pub(crate) fn init() {
    // Force the signing secret so an undersized SESSION_SECRET is fatal at
    // startup rather than on the first login.
    let _ = *config::SESSION_SECRET;
}
