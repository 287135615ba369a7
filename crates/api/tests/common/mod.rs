#![allow(dead_code)]

use async_trait::async_trait;
use blockchain::{Balance, CoinMetadata, ObjectData, ObjectPage, ObjectResponse, OwnedObject, SuiRpc};
use serde_json::json;
use shared::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub const OWNER: &str = "0x00000000000000000000000000000000000000000000000000000000000000a1";
pub const USDC: &str = "0x5d4b302506645c37ff133b98c4b50a5ae14841659738d6d733d59d0d217a93bf::coin::COIN";

/// In-memory stand-in for a Sui full node
#[derive(Default)]
pub struct FakeSuiRpc {
    pages: Vec<Vec<OwnedObject>>,
    metadata: HashMap<String, CoinMetadata>,
    failing_metadata: HashSet<String>,
    pub fail_objects: bool,
    /// Keep claiming another page while handing out this cursor (`""` sends none)
    pub stalled_cursor: Option<String>,
    pub total_balance: String,
    pub execution_error: Option<String>,
    pub metadata_requests: Mutex<Vec<String>>,
    pub cursors_seen: Mutex<Vec<Option<String>>>,
}

impl FakeSuiRpc {
    pub fn new() -> Self {
        Self {
            total_balance: "0".to_string(),
            ..Default::default()
        }
    }

    pub fn with_page(mut self, objects: Vec<OwnedObject>) -> Self {
        self.pages.push(objects);
        self
    }

    pub fn with_metadata(mut self, coin_type: &str, symbol: &str, decimals: u8) -> Self {
        self.metadata.insert(coin_type.to_string(), metadata(symbol, decimals));
        self
    }

    pub fn with_failing_metadata(mut self, coin_type: &str) -> Self {
        self.failing_metadata.insert(coin_type.to_string());
        self
    }

    pub fn failing() -> Self {
        Self {
            fail_objects: true,
            ..Self::new()
        }
    }
}

#[async_trait]
impl SuiRpc for FakeSuiRpc {
    async fn get_owned_objects(&self, _owner: &str, cursor: Option<&str>) -> Result<ObjectPage> {
        self.cursors_seen.lock().unwrap().push(cursor.map(str::to_string));
        if self.fail_objects {
            return Err(Error::SuiRpc("connection refused".to_string()));
        }

        let index: usize = match (&self.stalled_cursor, cursor) {
            (Some(_), _) | (None, None) => 0,
            (None, Some(c)) => c.parse().unwrap(),
        };
        let objects = self.pages.get(index).cloned().unwrap_or_default();
        let (has_next_page, next_cursor) = match &self.stalled_cursor {
            Some(stalled) => (true, (!stalled.is_empty()).then(|| stalled.clone())),
            None => {
                let has_next = index + 1 < self.pages.len();
                (has_next, has_next.then(|| (index + 1).to_string()))
            }
        };

        Ok(ObjectPage {
            data: objects
                .into_iter()
                .enumerate()
                .map(|(i, content)| ObjectResponse {
                    data: Some(ObjectData {
                        object_id: format!("0x{:x}{:x}", index, i),
                        version: None,
                        digest: None,
                        object_type: Some(content.object_type.clone()),
                        content: Some(content),
                    }),
                    error: None,
                })
                .collect(),
            next_cursor,
            has_next_page,
        })
    }

    async fn get_coin_metadata(&self, coin_type: &str) -> Result<Option<CoinMetadata>> {
        self.metadata_requests.lock().unwrap().push(coin_type.to_string());
        if self.failing_metadata.contains(coin_type) {
            return Err(Error::SuiRpc(format!("metadata lookup failed for {}", coin_type)));
        }
        Ok(self.metadata.get(coin_type).cloned())
    }

    async fn get_balance(&self, _owner: &str) -> Result<Balance> {
        Ok(Balance {
            coin_type: blockchain::SUI_COIN_TYPE.to_string(),
            coin_object_count: 1,
            total_balance: self.total_balance.clone(),
        })
    }

    async fn execute_transaction_block(&self, _tx_bytes: &str, _signatures: &[String]) -> Result<String> {
        match &self.execution_error {
            Some(msg) => Err(Error::SuiRpc(msg.clone())),
            None => Ok("9XkZgA3pQ1".to_string()),
        }
    }

    async fn get_chain_identifier(&self) -> Result<String> {
        if self.fail_objects {
            return Err(Error::SuiRpc("connection refused".to_string()));
        }
        Ok("35834a8a".to_string())
    }
}

pub fn metadata(symbol: &str, decimals: u8) -> CoinMetadata {
    CoinMetadata {
        decimals,
        name: format!("{} Coin", symbol),
        symbol: symbol.to_string(),
        description: String::new(),
        icon_url: Some(format!("https://icons.example/{}.png", symbol.to_lowercase())),
        id: None,
    }
}

pub fn coin(coin_type: &str, balance: &str) -> OwnedObject {
    OwnedObject::move_object(
        format!("0x2::coin::Coin<{}>", coin_type),
        json!({ "balance": balance, "id": { "id": "0xc0" } }),
    )
}

pub fn nft(object_type: &str, name: &str, image_url: &str, id: &str) -> OwnedObject {
    OwnedObject::move_object(
        object_type,
        json!({ "name": name, "image_url": image_url, "id": { "id": id } }),
    )
}
