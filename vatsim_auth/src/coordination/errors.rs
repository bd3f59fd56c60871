use thiserror::Error;

use crate::session::SessionError;
use crate::vatsim::VatsimError;

#[derive(Debug, Error, Clone)]
pub enum CoordinationError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{resource_type} {resource_id} not found")]
    ResourceNotFound {
        resource_type: String,
        resource_id: String,
    },

    /// Error from provider operations
    #[error("Provider error: {0}")]
    Vatsim(#[from] VatsimError),

    /// Error from session operations
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}
