//! HTTP mapping for gateway errors
//!
//! Every failure leaves the service as a JSON `{"message": ...}`
//! body with the status code of its error class.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::GatewayError;
use crate::core::types::MessageResponse;

/// Convert error to appropriate HTTP status code
pub fn status_code(err: &GatewayError) -> StatusCode {
    match err {
        GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
        GatewayError::CharacterNotFound(_) => StatusCode::NOT_FOUND,
        GatewayError::Upstream(_)
        | GatewayError::Internal(_)
        | GatewayError::ConfigError(_)
        | GatewayError::IoError(_)
        | GatewayError::SerdeError(_)
        | GatewayError::TomlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// True when the response conversion should log the error
///
/// Upstream failures are logged with their payload by the upstream
/// client and again by the request middleware, so only other server
/// errors are logged here.
pub fn logs_on_response(err: &GatewayError) -> bool {
    status_code(err).is_server_error() && !matches!(err, GatewayError::Upstream(_))
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = status_code(&self);
        let message = self.message();

        if logs_on_response(&self) {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        }

        (status, Json(MessageResponse { message })).into_response()
    }
}
