use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum VatsimError {
    #[error("Token exchange error: {0}")]
    TokenExchange(String),

    #[error("Fetch user info error: {0}")]
    FetchUserInfo(String),

    #[error("Fetch statistics error: {0}")]
    FetchStatistics(String),

    /// The provider has no pilot record for the requested CID. Kept separate
    /// from [`VatsimError::FetchStatistics`] so the HTTP layer can answer 404
    /// instead of a generic upstream failure.
    #[error("Pilot {0} not found on VATSIM")]
    PilotNotFound(String),

    #[error("Serde error: {0}")]
    Serde(String),
}
