use http::StatusCode;
use vatsim_auth::CoordinationError;

/// Helper trait for converting errors to a standard response error format
pub(super) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Implementation for CoordinationError to map variants to appropriate status codes
impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            let status = match e {
                CoordinationError::Unauthorized => StatusCode::UNAUTHORIZED,
                CoordinationError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
                CoordinationError::Vatsim(_) => StatusCode::BAD_GATEWAY,
                CoordinationError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, e.to_string())
        })
    }
}
