use blockchain::{mist_to_sui, validate_address, OwnedObject, SuiRpc, SUI_COIN_TYPE};
use rust_decimal::Decimal;
use shared::models::{BalanceResponse, NftSummary, TokenSummary, WalletInfoResponse};
use shared::{Blocklist, Error, Result};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::coin_metadata::{distinct_coin_types, extract_coin_type, is_spoofed_native, CoinMetadataCache};
use crate::object_classifier::{ClassifiedObject, CoinRecord, NftRecord, ObjectClassifier};

/// Placeholder name for NFTs without a `name` field
pub const UNKNOWN_NFT_NAME: &str = "Unknown";

/// Largest scale a `Decimal` can carry
const MAX_DECIMAL_SCALE: u32 = 28;

/// Aggregates the holdings of a Sui address into a wallet summary.
///
/// Stateless between calls: every request paginates the owned objects
/// afresh and resolves coin metadata into its own [`CoinMetadataCache`].
pub struct WalletInfoService {
    rpc: Arc<dyn SuiRpc>,
    classifier: ObjectClassifier,
    metadata_fetch_concurrency: usize,
}

impl WalletInfoService {
    pub fn new(rpc: Arc<dyn SuiRpc>, blocklist: Blocklist, metadata_fetch_concurrency: usize) -> Self {
        info!(
            "Initializing wallet info service ({} blocklisted types, metadata concurrency {})",
            blocklist.len(),
            metadata_fetch_concurrency
        );

        Self {
            rpc,
            classifier: ObjectClassifier::new(blocklist),
            metadata_fetch_concurrency: metadata_fetch_concurrency.max(1),
        }
    }

    /// Build the wallet summary for `address`
    pub async fn get_wallet_info(&self, address: &str) -> Result<WalletInfoResponse> {
        let address = validate_address(address)?;

        let objects = self.fetch_owned_objects(&address).await?;

        let mut coins = Vec::new();
        let mut nfts = Vec::new();
        for object in &objects {
            match self.classifier.classify(object) {
                ClassifiedObject::Coin(coin) => coins.push(coin),
                ClassifiedObject::Nft(nft) => nfts.push(nft),
                ClassifiedObject::Unclassified => {}
            }
        }
        debug!(
            "Classified {} objects into {} coins and {} NFTs",
            objects.len(),
            coins.len(),
            nfts.len()
        );

        let coin_types = distinct_coin_types(&coins);
        let metadata = CoinMetadataCache::resolve(
            self.rpc.as_ref(),
            coin_types,
            self.metadata_fetch_concurrency,
        )
        .await;

        let summary = summarize(&coins, &nfts, &metadata);
        info!(
            "Wallet {}: {} SUI, {} tokens, {} NFTs",
            address,
            summary.sui_balance,
            summary.tokens.len(),
            summary.nfts.len()
        );
        Ok(summary)
    }

    /// Every object owned by `address`, following cursors until exhausted.
    ///
    /// Any failing page aborts the whole fetch, as does a page that claims a
    /// successor without handing out a new cursor.
    pub async fn fetch_owned_objects(&self, address: &str) -> Result<Vec<OwnedObject>> {
        let mut objects = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self.rpc.get_owned_objects(address, cursor.as_deref()).await?;
            pages += 1;

            objects.extend(
                page.data
                    .into_iter()
                    .filter_map(|entry| entry.data)
                    .filter_map(|data| data.content),
            );

            if !page.has_next_page {
                break;
            }
            match page.next_cursor {
                Some(next) if cursor.as_deref() != Some(next.as_str()) => cursor = Some(next),
                _ => {
                    warn!("Node reported more pages for {} without a new cursor", address);
                    return Err(Error::SuiRpc(format!(
                        "hasNextPage without a new cursor for {}",
                        address
                    )));
                }
            }
        }

        debug!("Fetched {} objects in {} pages for {}", objects.len(), pages, address);
        Ok(objects)
    }

    /// Native SUI balance of `address`
    pub async fn get_balance(&self, address: &str) -> Result<BalanceResponse> {
        let address = validate_address(address)?;
        let balance = self.rpc.get_balance(&address).await?;

        let total_balance_mist: u64 = balance.total_balance.parse().map_err(|_| {
            Error::SuiRpc(format!("Unexpected totalBalance value: {}", balance.total_balance))
        })?;

        Ok(BalanceResponse {
            address,
            total_balance_mist,
            sui_balance: mist_to_sui(total_balance_mist),
        })
    }
}

/// `raw / 10^decimals`. Exact up to 28 decimals, rounded to 28 places
/// beyond that. `None` for balances that are not unsigned integers.
pub fn normalize_amount(raw: &str, decimals: u8) -> Option<Decimal> {
    let raw = i128::from(raw.trim().parse::<u64>().ok()?);
    let scale = u32::from(decimals);
    if scale <= MAX_DECIMAL_SCALE {
        return Decimal::try_from_i128_with_scale(raw, scale).ok();
    }

    let excess = scale - MAX_DECIMAL_SCALE;
    if excess > MAX_DECIMAL_SCALE {
        // below the smallest representable step
        return Some(Decimal::ZERO);
    }
    let base = Decimal::try_from_i128_with_scale(raw, MAX_DECIMAL_SCALE).ok()?;
    let divisor = Decimal::try_from_i128_with_scale(10i128.pow(excess), 0).ok()?;
    base.checked_div(divisor)
}

/// Fold classified coins and NFTs into the response payload.
///
/// Coins whose type is spoofed or lacks metadata are left out; the native
/// coin is summed into `sui_balance` and never listed among tokens.
pub fn summarize(coins: &[CoinRecord], nfts: &[NftRecord], metadata: &CoinMetadataCache) -> WalletInfoResponse {
    let mut sui_balance = Decimal::ZERO;
    let mut tokens: BTreeMap<String, TokenSummary> = BTreeMap::new();

    for coin in coins {
        let coin_type = extract_coin_type(&coin.object_type);
        if coin_type.is_empty() || is_spoofed_native(coin_type) {
            continue;
        }

        let Some(decimals) = metadata.decimals_for(coin_type) else {
            continue;
        };

        let Some(amount) = normalize_amount(&coin.balance, decimals) else {
            warn!("Skipping {} coin with unreadable balance {:?}", coin_type, coin.balance);
            continue;
        };

        if coin_type == SUI_COIN_TYPE {
            sui_balance = checked_sum(sui_balance, amount, coin_type);
            continue;
        }

        match tokens.get_mut(coin_type) {
            Some(token) => token.amount = checked_sum(token.amount, amount, coin_type),
            None => {
                // decimals_for only succeeds for non-native types with metadata
                let Some(meta) = metadata.get(coin_type) else {
                    continue;
                };
                tokens.insert(
                    coin_type.to_string(),
                    TokenSummary {
                        coin_type: coin_type.to_string(),
                        amount,
                        symbol: meta.symbol.clone(),
                        name: meta.name.clone(),
                        icon: meta.icon_url.clone(),
                    },
                );
            }
        }
    }

    WalletInfoResponse {
        sui_balance: sui_balance.normalize(),
        tokens: tokens
            .into_values()
            .map(|mut token| {
                token.amount = token.amount.normalize();
                token
            })
            .collect(),
        nfts: nfts.iter().map(nft_summary).collect(),
    }
}

fn checked_sum(total: Decimal, amount: Decimal, coin_type: &str) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        warn!("Balance overflow while summing {}, keeping previous total", coin_type);
        total
    })
}

fn nft_summary(nft: &NftRecord) -> NftSummary {
    NftSummary {
        name: nft
            .name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_NFT_NAME.to_string()),
        coin_type: nft.object_type.clone(),
        icon: nft.image_url.clone(),
        oid: nft.object_id.clone().unwrap_or_default(),
    }
}
