mod client;
mod transform;

pub use client::refresh_access_token;

pub(crate) use client::{
    build_authorization_url, exchange_code_for_token, fetch_pilot_statistics, fetch_vatsim_user,
};
pub(crate) use transform::transform_vatsim_user;
