use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mgmt_types::api::ErrorResponse;
use tracing::error;

use crate::set_password::SetPasswordError;

pub type ApiResult<T, E = ApiError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid user id: {0}")]
    InvalidUserId(i64),
    #[error(transparent)]
    SetPassword(#[from] SetPasswordError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidUserId(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::SetPassword(e) => {
                let client_error = e.client_error();
                if client_error.is_timeout() {
                    StatusCode::GATEWAY_TIMEOUT
                } else if matches!(client_error, mgmt_client::Error::RequestConstruction(_)) {
                    StatusCode::INTERNAL_SERVER_ERROR
                } else {
                    StatusCode::BAD_GATEWAY
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {self}");
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
