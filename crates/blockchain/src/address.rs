use shared::{Error, Result};
use tracing::warn;

/// Length of a Sui address in bytes
pub const SUI_ADDRESS_LENGTH: usize = 32;

/// Validate a Sui address (optional 0x prefix + 64 hex chars).
///
/// Returns the address normalized to lowercase with a `0x` prefix.
pub fn validate_address(address: &str) -> Result<String> {
    let trimmed = address.trim();
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex.is_empty() {
        return Err(Error::InvalidWalletAddress(
            "Address must not be empty".to_string(),
        ));
    }

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        warn!("Rejected non-hex Sui address: {}", address);
        return Err(Error::InvalidWalletAddress(
            "Address must contain only hexadecimal characters".to_string(),
        ));
    }

    if hex.len() != SUI_ADDRESS_LENGTH * 2 {
        return Err(Error::InvalidWalletAddress(format!(
            "Address must be {} bytes (0x + {} hex)",
            SUI_ADDRESS_LENGTH,
            SUI_ADDRESS_LENGTH * 2
        )));
    }

    Ok(format!("0x{}", hex.to_lowercase()))
}
