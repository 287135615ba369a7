use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

use crate::{Error, Result};

/// On-disk blocklist format
#[derive(Debug, Default, Deserialize)]
struct BlocklistFile {
    #[serde(default)]
    coins: Vec<String>,
    #[serde(default)]
    objects: Vec<String>,
}

/// Object types that are never reported, split into coin types and generic object types.
///
/// Entries are compared against the full object `type` string.
#[derive(Debug, Clone, Default)]
pub struct Blocklist {
    coins: HashSet<String>,
    objects: HashSet<String>,
}

impl Blocklist {
    pub fn new<C, O>(coins: C, objects: O) -> Self
    where
        C: IntoIterator<Item = String>,
        O: IntoIterator<Item = String>,
    {
        Self {
            coins: coins.into_iter().collect(),
            objects: objects.into_iter().collect(),
        }
    }

    /// Parse a blocklist from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        let file: BlocklistFile = serde_json::from_str(json)
            .map_err(|e| Error::Configuration(format!("Invalid blocklist JSON: {}", e)))?;
        Ok(Self::new(file.coins, file.objects))
    }

    /// Load the blocklist from a JSON file. A missing file yields an empty blocklist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Blocklist file {} not found, no object types will be blocked", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("Failed to read blocklist {}: {}", path.display(), e))
        })?;
        let blocklist = Self::from_json(&contents)?;
        info!(
            "Loaded blocklist from {} ({} coin types, {} object types)",
            path.display(),
            blocklist.coins.len(),
            blocklist.objects.len()
        );
        Ok(blocklist)
    }

    /// Append extra entries, e.g. from environment overrides
    pub fn extend(&mut self, coins: Vec<String>, objects: Vec<String>) {
        self.coins.extend(coins);
        self.objects.extend(objects);
    }

    pub fn is_blocked(&self, object_type: &str) -> bool {
        self.coins.contains(object_type) || self.objects.contains(object_type)
    }

    pub fn len(&self) -> usize {
        self.coins.len() + self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
