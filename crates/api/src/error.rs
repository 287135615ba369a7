use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::error;

/// Error type for the HTTP layer
#[derive(Debug)]
pub enum ApiError {
    // Validation errors
    ValidationError(String),
    InvalidAddress(String),

    // Remote node errors
    BlockchainRpcError(String),
    TransactionFailed(String),

    // Server errors
    ConfigurationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
            ApiError::BlockchainRpcError(msg) => write!(f, "Blockchain RPC error: {}", msg),
            ApiError::TransactionFailed(msg) => write!(f, "Transaction failed: {}", msg),
            ApiError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Body of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Machine-readable error class
    pub code: String,
    pub timestamp: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg),
            ApiError::InvalidAddress(msg) => (StatusCode::BAD_REQUEST, "invalid_address", msg),
            ApiError::BlockchainRpcError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "blockchain_error", msg)
            }
            ApiError::TransactionFailed(msg) => {
                error!("Transaction submission failed: {}", msg);
                (StatusCode::BAD_GATEWAY, "transaction_failed", msg)
            }
            ApiError::ConfigurationError(msg) => {
                error!("Configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error", "Service misconfigured".to_string())
            }
        };

        let error_response = ErrorResponse {
            error: message,
            code: code.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<shared::Error> for ApiError {
    fn from(err: shared::Error) -> Self {
        match err {
            shared::Error::InvalidWalletAddress(msg) => ApiError::InvalidAddress(msg),
            shared::Error::Validation(msg) => ApiError::ValidationError(msg),
            shared::Error::SuiRpc(msg) => ApiError::BlockchainRpcError(msg),
            shared::Error::Configuration(msg) => ApiError::ConfigurationError(msg),
        }
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
