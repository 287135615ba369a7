use blockchain::OwnedObject;
use serde_json::{Map, Value};
use shared::Blocklist;

/// Field names that mark an object as NFT-like, in lookup order
pub const NFT_URL_FIELDS: [&str; 3] = ["image_url", "img_url", "url"];

/// A fungible coin object
#[derive(Debug, Clone, PartialEq)]
pub struct CoinRecord {
    pub object_type: String,
    /// Raw `balance` field in the coin's smallest unit
    pub balance: String,
}

/// An NFT-like object
#[derive(Debug, Clone, PartialEq)]
pub struct NftRecord {
    pub object_type: String,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub object_id: Option<String>,
}

/// Outcome of decoding one owned object
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedObject {
    Coin(CoinRecord),
    Nft(NftRecord),
    Unclassified,
}

/// Decodes owned objects into coins and NFTs.
///
/// Rules are applied first-match in this order:
/// packages are dropped, blocklisted move objects are dropped, a `balance`
/// field makes a coin, a URL-bearing field makes an NFT, anything else is dropped.
#[derive(Debug, Clone, Default)]
pub struct ObjectClassifier {
    blocklist: Blocklist,
}

impl ObjectClassifier {
    pub fn new(blocklist: Blocklist) -> Self {
        Self { blocklist }
    }

    pub fn classify(&self, object: &OwnedObject) -> ClassifiedObject {
        if object.is_package() {
            return ClassifiedObject::Unclassified;
        }

        if object.is_move_object() && self.blocklist.is_blocked(&object.object_type) {
            return ClassifiedObject::Unclassified;
        }

        let fields = match object.fields() {
            Some(fields) => fields,
            None => return ClassifiedObject::Unclassified,
        };

        if let Some(balance) = fields.get("balance") {
            return ClassifiedObject::Coin(CoinRecord {
                object_type: object.object_type.clone(),
                balance: value_text(balance).unwrap_or_default(),
            });
        }

        if NFT_URL_FIELDS.iter().any(|key| fields.contains_key(*key)) {
            return ClassifiedObject::Nft(NftRecord {
                object_type: object.object_type.clone(),
                name: fields.get("name").and_then(value_text),
                image_url: NFT_URL_FIELDS
                    .iter()
                    .find_map(|key| fields.get(*key).and_then(value_text)),
                object_id: uid_of(fields),
            });
        }

        ClassifiedObject::Unclassified
    }
}

/// Render a Move value as text. Handles plain strings, numbers and
/// wrapper structs such as `0x2::url::Url` that nest the string under `url`.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(map) => map
            .get("url")
            .or_else(|| map.get("fields").and_then(|f| f.get("url")))
            .and_then(value_text),
        _ => None,
    }
}

/// `id` is a `UID` struct: `{"id": "0x..."}`
fn uid_of(fields: &Map<String, Value>) -> Option<String> {
    fields
        .get("id")
        .and_then(|uid| uid.get("id"))
        .and_then(|id| id.as_str())
        .map(str::to_string)
}
