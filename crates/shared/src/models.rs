use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated holdings of one non-native coin type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSummary {
    pub coin_type: String,
    pub amount: Decimal,
    pub symbol: String,
    pub name: String,
    pub icon: Option<String>,
}

/// One NFT-like object owned by the wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftSummary {
    pub name: String,
    pub coin_type: String,
    pub icon: Option<String>,
    pub oid: String,
}

/// Response payload of `GET /api/wallet-info/:address`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletInfoResponse {
    pub sui_balance: Decimal,
    pub tokens: Vec<TokenSummary>,
    pub nfts: Vec<NftSummary>,
}

/// Native balance of a single address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub address: String,
    pub total_balance_mist: u64,
    pub sui_balance: Decimal,
}

/// Result of relaying a signed transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutedTransaction {
    pub digest: String,
    pub explorer_url: String,
}
