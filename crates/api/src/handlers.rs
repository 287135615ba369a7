use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use blockchain::TransferPlan;
use serde::Deserialize;
use shared::models::{BalanceResponse, ExecutedTransaction, WalletInfoResponse};
use std::sync::Arc;
use tracing::{error, info_span, warn, Instrument};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Message returned whenever the owned-objects aggregation fails upstream
pub const WALLET_INFO_FAILURE: &str = "Failed to fetch wallet information";
pub const ADDRESS_REQUIRED: &str = "Wallet address is required";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepareTransferRequest {
    pub recipient: String,
    pub amount: String,
    pub sender: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteTransactionRequest {
    pub tx_bytes: String,
    pub signatures: Vec<String>,
}

// Wallet info

pub async fn get_wallet_info(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> ApiResult<Json<WalletInfoResponse>> {
    if address.trim().is_empty() {
        return Err(ApiError::ValidationError(ADDRESS_REQUIRED.to_string()));
    }

    let span = info_span!("wallet_info", request_id = %Uuid::new_v4(), address = %address);
    match state
        .wallet_info_service
        .get_wallet_info(&address)
        .instrument(span)
        .await
    {
        Ok(info) => Ok(Json(info)),
        Err(e) if e.is_client_error() => Err(e.into()),
        Err(e) => {
            error!("Error fetching wallet info for {}: {}", address, e);
            Err(ApiError::BlockchainRpcError(WALLET_INFO_FAILURE.to_string()))
        }
    }
}

pub async fn wallet_info_missing_address() -> ApiError {
    ApiError::ValidationError(ADDRESS_REQUIRED.to_string())
}

pub async fn get_balance(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> ApiResult<Json<BalanceResponse>> {
    let balance = state.wallet_info_service.get_balance(&address).await?;
    Ok(Json(balance))
}

// Transfers

pub async fn prepare_transfer(
    Json(payload): Json<PrepareTransferRequest>,
) -> ApiResult<Json<TransferPlan>> {
    let plan = TransferPlan::split_and_transfer(
        payload.sender.as_deref(),
        &payload.recipient,
        &payload.amount,
    )?;
    Ok(Json(plan))
}

pub async fn execute_transaction(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ExecuteTransactionRequest>,
) -> ApiResult<Json<ExecutedTransaction>> {
    if payload.tx_bytes.trim().is_empty() {
        return Err(ApiError::ValidationError("Transaction bytes are required".to_string()));
    }
    if payload.signatures.is_empty() {
        return Err(ApiError::ValidationError("At least one signature is required".to_string()));
    }

    let digest = state
        .sui_client
        .execute_transaction_block(&payload.tx_bytes, &payload.signatures)
        .await
        .map_err(|e| {
            warn!("Transaction execution failed: {}", e);
            ApiError::TransactionFailed(match e {
                shared::Error::SuiRpc(msg) => msg,
                other => other.to_string(),
            })
        })?;

    Ok(Json(ExecutedTransaction {
        explorer_url: state.network.explorer_tx_url(&digest),
        digest,
    }))
}

// Health

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "network": state.network.name(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Readiness probe: the full node must answer
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.sui_client.get_chain_identifier().await {
        Ok(chain_id) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "ready": true,
                "chainIdentifier": chain_id,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            })),
        ),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "ready": false,
                    "error": e.to_string(),
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                })),
            )
        }
    }
}

/// Liveness probe (for Kubernetes/container orchestration)
pub async fn liveness_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({
        "alive": true,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}
