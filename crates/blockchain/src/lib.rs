pub mod address;
pub mod client;
pub mod rpc;
pub mod transaction;
pub mod types;

pub use address::{validate_address, SUI_ADDRESS_LENGTH};
pub use client::SuiClient;
pub use rpc::SuiRpc;
pub use transaction::{mist_to_sui, sui_to_mist, TransferPlan, MIST_PER_SUI};
pub use types::*;
