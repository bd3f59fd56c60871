mod errors;
mod oauth2;

pub use errors::CoordinationError;
pub use oauth2::{
    CallbackQuery, fetch_pilot_statistics_core, get_session_user_core, handle_callback_core,
    prepare_login_core, prepare_logout_core,
};
