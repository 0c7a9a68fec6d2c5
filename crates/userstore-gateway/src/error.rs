//! Gateway error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use userstore_core::StoreError;

/// Client-facing error codes (stable API). Store codes plus the ones only
/// the transport can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Malformed request (bad JSON, bad path segment, missing parameter).
    BadRequest,
    /// Candidate record failed validation.
    InvalidInput,
    /// Referenced record does not exist.
    NotFound,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::InvalidInput => "INVALID_INPUT",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

impl From<userstore_core::ClientCode> for ClientCode {
    fn from(code: userstore_core::ClientCode) -> Self {
        match code {
            userstore_core::ClientCode::InvalidInput => ClientCode::InvalidInput,
            userstore_core::ClientCode::NotFound => ClientCode::NotFound,
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("config: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    pub fn client_code(&self) -> ClientCode {
        match self {
            GatewayError::Store(e) => e.client_code().into(),
            GatewayError::BadRequest(_) => ClientCode::BadRequest,
            GatewayError::Config(_) | GatewayError::Internal(_) => ClientCode::Internal,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.client_code() {
            ClientCode::BadRequest | ClientCode::InvalidInput => StatusCode::BAD_REQUEST,
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(json!({
            "error": self.client_code().as_str(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
