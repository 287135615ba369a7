use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Canonical type of the native coin
pub const SUI_COIN_TYPE: &str = "0x2::sui::SUI";

/// One page of `suix_getOwnedObjects`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPage {
    #[serde(default)]
    pub data: Vec<ObjectResponse>,
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}

/// Entry of an owned-objects page; either `data` or `error` is set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectResponse {
    pub data: Option<ObjectData>,
    pub error: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectData {
    pub object_id: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub digest: Option<String>,
    #[serde(rename = "type", default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub content: Option<OwnedObject>,
}

/// Parsed content of an owned object (`showContent: true`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedObject {
    pub data_type: String,
    #[serde(rename = "type", default)]
    pub object_type: String,
    #[serde(default)]
    pub fields: Value,
}

impl OwnedObject {
    pub fn move_object(object_type: impl Into<String>, fields: Value) -> Self {
        Self {
            data_type: "moveObject".to_string(),
            object_type: object_type.into(),
            fields,
        }
    }

    pub fn package() -> Self {
        Self {
            data_type: "package".to_string(),
            object_type: String::new(),
            fields: Value::Null,
        }
    }

    pub fn is_package(&self) -> bool {
        self.data_type == "package"
    }

    pub fn is_move_object(&self) -> bool {
        self.data_type == "moveObject"
    }

    /// Field mapping, if the content is a struct
    pub fn fields(&self) -> Option<&Map<String, Value>> {
        self.fields.as_object()
    }
}

/// Result of `suix_getCoinMetadata`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinMetadata {
    pub decimals: u8,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub description: String,
    pub icon_url: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// Result of `suix_getBalance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub coin_type: String,
    #[serde(default)]
    pub coin_object_count: u64,
    pub total_balance: String,
}
