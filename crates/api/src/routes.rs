use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        .route("/health/ready", get(handlers::readiness_check))
        .route("/health/live", get(handlers::liveness_check))

        // Wallet aggregation
        .route("/api/wallet-info", get(handlers::wallet_info_missing_address))
        .route("/api/wallet-info/:address", get(handlers::get_wallet_info))
        .route("/api/balance/:address", get(handlers::get_balance))

        // Transfers
        .route("/api/transfers/prepare", post(handlers::prepare_transfer))
        .route("/api/transactions/execute", post(handlers::execute_transaction))

        .with_state(state)
}
