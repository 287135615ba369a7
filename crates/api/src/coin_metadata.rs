use blockchain::{CoinMetadata, SuiRpc, SUI_COIN_TYPE};
use futures::stream::{self, StreamExt};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

use crate::object_classifier::CoinRecord;

/// Decimals of the native coin (1 SUI = 10^9 MIST)
pub const NATIVE_DECIMALS: u8 = 9;

/// Substrings that only the canonical native coin type may carry
pub const NATIVE_MARKERS: [&str; 2] = ["::sui::SUI", "::asui::ASUI"];

/// Coin type carried as the first generic parameter of an object type.
///
/// `0x2::coin::Coin<0xabc::usdc::USDC>` yields `0xabc::usdc::USDC`; types
/// without a generic parameter yield an empty string.
pub fn extract_coin_type(object_type: &str) -> &str {
    let Some(open) = object_type.find('<') else {
        return "";
    };
    let rest = &object_type[open + 1..];
    // at least one character between the brackets
    match rest.char_indices().skip(1).find(|(_, c)| *c == '>') {
        Some((close, _)) => &rest[..close],
        None => "",
    }
}

/// True for coin types imitating the native coin without being it
pub fn is_spoofed_native(coin_type: &str) -> bool {
    coin_type != SUI_COIN_TYPE && NATIVE_MARKERS.iter().any(|marker| coin_type.contains(marker))
}

/// Distinct coin types worth resolving metadata for
pub fn distinct_coin_types<'a, I>(coins: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a CoinRecord>,
{
    coins
        .into_iter()
        .map(|coin| extract_coin_type(&coin.object_type))
        .filter(|coin_type| !coin_type.is_empty() && !is_spoofed_native(coin_type))
        .map(str::to_string)
        .collect()
}

/// Coin metadata resolved for a single request.
///
/// Built at the start of an aggregation and dropped with it; nothing is
/// shared between requests.
#[derive(Debug, Clone, Default)]
pub struct CoinMetadataCache {
    entries: HashMap<String, CoinMetadata>,
}

impl CoinMetadataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch metadata for every coin type, at most `concurrency` lookups in flight.
    ///
    /// Failed or empty lookups are logged and leave the coin type out of the cache.
    pub async fn resolve(
        rpc: &dyn SuiRpc,
        coin_types: BTreeSet<String>,
        concurrency: usize,
    ) -> Self {
        debug!("Resolving metadata for {} coin types", coin_types.len());

        let results: Vec<_> = stream::iter(coin_types)
            .map(move |coin_type| async move {
                let result = rpc.get_coin_metadata(&coin_type).await;
                (coin_type, result)
            })
            .buffer_unordered(concurrency.max(1))
            .collect()
            .await;

        let mut cache = Self::new();
        for (coin_type, result) in results {
            match result {
                Ok(Some(metadata)) => cache.insert(coin_type, metadata),
                Ok(None) => warn!("No metadata registered for {}", coin_type),
                Err(e) => warn!("Failed to get metadata for {}: {}", coin_type, e),
            }
        }
        cache
    }

    pub fn insert(&mut self, coin_type: String, metadata: CoinMetadata) {
        self.entries.insert(coin_type, metadata);
    }

    pub fn get(&self, coin_type: &str) -> Option<&CoinMetadata> {
        self.entries.get(coin_type)
    }

    /// Decimals to normalize a coin type by. The native coin falls back to
    /// [`NATIVE_DECIMALS`]; any other type without metadata has none.
    pub fn decimals_for(&self, coin_type: &str) -> Option<u8> {
        match self.get(coin_type) {
            Some(metadata) => Some(metadata.decimals),
            None if coin_type == SUI_COIN_TYPE => Some(NATIVE_DECIMALS),
            None => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
