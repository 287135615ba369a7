use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use shared::{Error, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::rpc::SuiRpc;
use crate::types::{Balance, CoinMetadata, ObjectPage, SUI_COIN_TYPE};

/// JSON-RPC client for a Sui full node
pub struct SuiClient {
    http: reqwest::Client,
    rpc_url: String,
    next_id: AtomicU64,
}

impl SuiClient {
    /// Create a new client against `rpc_url` with the given request timeout
    pub fn new(rpc_url: String, timeout: Duration) -> Result<Self> {
        info!("Initializing Sui client with RPC: {}", rpc_url);

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            rpc_url,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Issue a JSON-RPC call and decode its `result`
    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request_body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        debug!("Calling {} (id {})", method, id);

        let response = self
            .http
            .post(&self.rpc_url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::SuiRpc(format!("Failed to send {} request: {}", method, e)))?;

        if !response.status().is_success() {
            return Err(Error::SuiRpc(format!(
                "{} failed with status: {}",
                method,
                response.status()
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| Error::SuiRpc(format!("Failed to parse {} response: {}", method, e)))?;

        decode_rpc_response(method, response_json)
    }
}

/// Split a JSON-RPC envelope into its result or error
fn decode_rpc_response<T: DeserializeOwned>(method: &str, mut response_json: Value) -> Result<T> {
    if let Some(error) = response_json.get("error") {
        let error_message = error
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown error");
        return Err(Error::SuiRpc(format!("{} returned error: {}", method, error_message)));
    }

    let result = response_json
        .get_mut("result")
        .map(Value::take)
        .ok_or_else(|| Error::SuiRpc(format!("Missing result in {} response", method)))?;

    serde_json::from_value(result)
        .map_err(|e| Error::SuiRpc(format!("Unexpected {} result shape: {}", method, e)))
}

#[async_trait]
impl SuiRpc for SuiClient {
    async fn get_owned_objects(&self, owner: &str, cursor: Option<&str>) -> Result<ObjectPage> {
        let query = json!({
            "filter": null,
            "options": { "showType": true, "showContent": true }
        });
        self.call("suix_getOwnedObjects", json!([owner, query, cursor, null]))
            .await
    }

    async fn get_coin_metadata(&self, coin_type: &str) -> Result<Option<CoinMetadata>> {
        self.call("suix_getCoinMetadata", json!([coin_type])).await
    }

    async fn get_balance(&self, owner: &str) -> Result<Balance> {
        self.call("suix_getBalance", json!([owner, SUI_COIN_TYPE])).await
    }

    async fn execute_transaction_block(&self, tx_bytes: &str, signatures: &[String]) -> Result<String> {
        info!("Submitting signed transaction ({} signatures)", signatures.len());

        let result: Value = self
            .call(
                "sui_executeTransactionBlock",
                json!([
                    tx_bytes,
                    signatures,
                    { "showEffects": true },
                    "WaitForLocalExecution"
                ]),
            )
            .await?;

        let digest = execution_digest(&result)?;
        info!("Transaction executed: {}", digest);
        Ok(digest)
    }

    async fn get_chain_identifier(&self) -> Result<String> {
        self.call("sui_getChainIdentifier", json!([])).await
    }
}

/// Extract the digest of an executed transaction, surfacing on-chain failures
fn execution_digest(result: &Value) -> Result<String> {
    let digest = result
        .get("digest")
        .and_then(|d| d.as_str())
        .ok_or_else(|| Error::SuiRpc("Missing digest in execution response".to_string()))?;

    if let Some(status) = result.pointer("/effects/status") {
        if status.get("status").and_then(|s| s.as_str()) == Some("failure") {
            let reason = status
                .get("error")
                .and_then(|e| e.as_str())
                .unwrap_or("Transaction failed");
            error!("Transaction {} failed on chain: {}", digest, reason);
            return Err(Error::SuiRpc(reason.to_string()));
        }
    }

    Ok(digest.to_string())
}
