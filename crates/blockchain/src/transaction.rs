use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{Error, Result};
use std::str::FromStr;
use tracing::debug;

use crate::address::validate_address;

/// 1 SUI = 10^9 MIST
pub const MIST_PER_SUI: u64 = 1_000_000_000;

/// Convert a user-entered SUI amount into MIST, flooring sub-MIST precision.
pub fn sui_to_mist(amount: &str) -> Result<u64> {
    let parsed = Decimal::from_str(amount.trim())
        .map_err(|_| Error::Validation("Invalid amount.".to_string()))?;

    if parsed <= Decimal::ZERO {
        return Err(Error::Validation("Invalid amount.".to_string()));
    }

    let mist = parsed
        .checked_mul(Decimal::from(MIST_PER_SUI))
        .map(|m| m.floor())
        .and_then(|m| m.to_u64())
        .ok_or_else(|| Error::Validation("Amount is too large.".to_string()))?;

    if mist == 0 {
        return Err(Error::Validation("Amount is smaller than 1 MIST.".to_string()));
    }

    Ok(mist)
}

/// Convert MIST into whole SUI
pub fn mist_to_sui(mist: u64) -> Decimal {
    Decimal::from(mist) / Decimal::from(MIST_PER_SUI)
}

/// Reference to a value inside a programmable transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Argument {
    GasCoin,
    Input(u16),
    Result(u16),
    NestedResult(u16, u16),
}

/// Pure transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallArg {
    Pure {
        #[serde(rename = "type")]
        value_type: String,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    SplitCoins {
        coin: Argument,
        amounts: Vec<Argument>,
    },
    TransferObjects {
        objects: Vec<Argument>,
        address: Argument,
    },
}

/// Unsigned split-and-transfer transaction for a browser wallet to sign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferPlan {
    pub sender: Option<String>,
    pub recipient: String,
    pub amount_mist: u64,
    pub inputs: Vec<CallArg>,
    pub commands: Vec<Command>,
}

impl TransferPlan {
    /// Split `amount` SUI off the gas coin and transfer it to `recipient`.
    pub fn split_and_transfer(sender: Option<&str>, recipient: &str, amount: &str) -> Result<Self> {
        let amount_mist = sui_to_mist(amount)?;

        let recipient = validate_address(recipient).map_err(|_| {
            Error::Validation(
                "Invalid recipient address. Please enter a valid Sui address starting with 0x."
                    .to_string(),
            )
        })?;

        let sender = sender
            .map(|s| {
                validate_address(s)
                    .map_err(|_| Error::Validation("Invalid sender address.".to_string()))
            })
            .transpose()?;

        debug!("Planning transfer of {} MIST to {}", amount_mist, recipient);

        Ok(Self {
            sender,
            inputs: vec![
                CallArg::Pure {
                    value_type: "u64".to_string(),
                    value: amount_mist.to_string(),
                },
                CallArg::Pure {
                    value_type: "address".to_string(),
                    value: recipient.clone(),
                },
            ],
            commands: vec![
                Command::SplitCoins {
                    coin: Argument::GasCoin,
                    amounts: vec![Argument::Input(0)],
                },
                Command::TransferObjects {
                    objects: vec![Argument::NestedResult(0, 0)],
                    address: Argument::Input(1),
                },
            ],
            recipient,
            amount_mist,
        })
    }
}
