use std::env;
use std::str::FromStr;

use crate::blocklist::Blocklist;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub sui: SuiConfig,
    pub aggregator: AggregatorConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct SuiConfig {
    pub network: SuiNetwork,
    pub rpc_url: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Upper bound on concurrent coin metadata lookups within one request (default: 4)
    pub metadata_fetch_concurrency: usize,
    pub blocklist: Blocklist,
}

/// Public Sui networks the service can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiNetwork {
    Mainnet,
    Testnet,
    Devnet,
}

impl SuiNetwork {
    pub fn name(&self) -> &'static str {
        match self {
            SuiNetwork::Mainnet => "mainnet",
            SuiNetwork::Testnet => "testnet",
            SuiNetwork::Devnet => "devnet",
        }
    }

    /// Public full node endpoint operated by Mysten Labs
    pub fn fullnode_url(&self) -> &'static str {
        match self {
            SuiNetwork::Mainnet => "https://fullnode.mainnet.sui.io:443",
            SuiNetwork::Testnet => "https://fullnode.testnet.sui.io:443",
            SuiNetwork::Devnet => "https://fullnode.devnet.sui.io:443",
        }
    }

    /// Block explorer link for a transaction digest
    pub fn explorer_tx_url(&self, digest: &str) -> String {
        match self {
            SuiNetwork::Mainnet => format!("https://suivision.xyz/txblock/{}", digest),
            SuiNetwork::Testnet => format!("https://testnet.suivision.xyz/txblock/{}", digest),
            SuiNetwork::Devnet => format!("https://suiscan.xyz/devnet/tx/{}", digest),
        }
    }
}

impl FromStr for SuiNetwork {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" => Ok(SuiNetwork::Mainnet),
            "testnet" => Ok(SuiNetwork::Testnet),
            "devnet" => Ok(SuiNetwork::Devnet),
            other => Err(anyhow::anyhow!("Unknown Sui network: {}", other)),
        }
    }
}

/// Split a comma-separated env value into trimmed, non-empty entries
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let network: SuiNetwork = env::var("SUI_NETWORK")
            .unwrap_or_else(|_| "mainnet".to_string())
            .parse()?;

        let mut blocklist = Blocklist::load(
            env::var("BLOCKLIST_PATH").unwrap_or_else(|_| "config/blocklist.json".to_string()),
        )?;
        blocklist.extend(
            parse_list(&env::var("BLOCKED_COIN_TYPES").unwrap_or_default()),
            parse_list(&env::var("BLOCKED_OBJECT_TYPES").unwrap_or_default()),
        );

        let metadata_fetch_concurrency: usize = env::var("METADATA_FETCH_CONCURRENCY")
            .unwrap_or_else(|_| "4".to_string())
            .parse()?;
        if metadata_fetch_concurrency == 0 {
            anyhow::bail!("METADATA_FETCH_CONCURRENCY must be at least 1");
        }

        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "21667".to_string())
                    .parse()?,
            },
            sui: SuiConfig {
                network,
                rpc_url: env::var("SUI_RPC_URL")
                    .unwrap_or_else(|_| network.fullnode_url().to_string()),
                request_timeout_secs: env::var("SUI_RPC_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()?,
            },
            aggregator: AggregatorConfig {
                metadata_fetch_concurrency,
                blocklist,
            },
        })
    }
}
