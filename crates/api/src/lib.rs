pub mod coin_metadata;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod object_classifier;
pub mod routes;
pub mod wallet_info_service;

pub use coin_metadata::CoinMetadataCache;
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use object_classifier::{ClassifiedObject, CoinRecord, NftRecord, ObjectClassifier};
pub use wallet_info_service::WalletInfoService;

use blockchain::SuiRpc;
use shared::config::SuiNetwork;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub wallet_info_service: Arc<WalletInfoService>,
    pub sui_client: Arc<dyn SuiRpc>,
    pub network: SuiNetwork,
}

impl AppState {
    pub fn new(
        wallet_info_service: Arc<WalletInfoService>,
        sui_client: Arc<dyn SuiRpc>,
        network: SuiNetwork,
    ) -> Self {
        Self {
            wallet_info_service,
            sui_client,
            network,
        }
    }
}
