use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything that can go wrong between pressing submit and having a company list.
#[derive(Debug, Error, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum AppError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Server responded {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Parse(String),
    #[error("Unable to encode request: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}

impl From<serde_qs::Error> for AppError {
    fn from(value: serde_qs::Error) -> Self {
        Self::Encode(value.to_string())
    }
}

#[cfg(not(feature = "ssr"))]
impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        Self::Network(value.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
