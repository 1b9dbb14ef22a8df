use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use prospector_api_types::result::JsonError;
use thiserror::Error;
use tracing::error;

use crate::upstream::UpstreamError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Company lookup is not configured on this server")]
    UpstreamNotConfigured,
    #[error("{0}")]
    Upstream(#[from] UpstreamError),
}

impl ApiError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            ApiError::UpstreamNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Upstream(UpstreamError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Upstream(UpstreamError::UrlParseError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("error {}", self);
        let e = format!("{self}");

        (self.as_status_code(), Json(JsonError { error_message: e })).into_response()
    }
}
