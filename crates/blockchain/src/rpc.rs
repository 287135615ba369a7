use async_trait::async_trait;
use shared::Result;

use crate::types::{Balance, CoinMetadata, ObjectPage};

/// Read and submit operations the dashboard needs from a Sui full node.
#[async_trait]
pub trait SuiRpc: Send + Sync {
    /// One page of objects owned by `owner`, with content inlined
    async fn get_owned_objects(&self, owner: &str, cursor: Option<&str>) -> Result<ObjectPage>;

    /// Metadata for a coin type; `None` when the node has none registered
    async fn get_coin_metadata(&self, coin_type: &str) -> Result<Option<CoinMetadata>>;

    /// Native SUI balance of `owner`
    async fn get_balance(&self, owner: &str) -> Result<Balance>;

    /// Submit a wallet-signed transaction and return its digest
    async fn execute_transaction_block(&self, tx_bytes: &str, signatures: &[String]) -> Result<String>;

    /// Chain identifier, used as a liveness probe
    async fn get_chain_identifier(&self) -> Result<String>;
}
