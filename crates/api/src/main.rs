use anyhow::Result;
use api::{AppState, WalletInfoService};
use blockchain::{SuiClient, SuiRpc};
use shared::config::Config;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<()> {
    api::logging::init_from_env();

    tracing::info!("Starting Sui wallet dashboard API");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        "Configuration loaded (network: {}, rpc: {})",
        config.sui.network.name(),
        config.sui.rpc_url
    );

    // Initialize Sui client
    let sui_client: Arc<dyn SuiRpc> = Arc::new(SuiClient::new(
        config.sui.rpc_url.clone(),
        Duration::from_secs(config.sui.request_timeout_secs),
    )?);
    tracing::info!("Sui client initialized");

    let wallet_info_service = Arc::new(WalletInfoService::new(
        sui_client.clone(),
        config.aggregator.blocklist.clone(),
        config.aggregator.metadata_fetch_concurrency,
    ));

    let app_state = Arc::new(AppState::new(
        wallet_info_service,
        sui_client,
        config.sui.network,
    ));

    // Create router with CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::routes::create_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("API server listening on {}", addr);
    tracing::info!("Health check available at http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
