use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Sui RPC error: {0}")]
    SuiRpc(String),

    #[error("Invalid wallet address: {0}")]
    InvalidWalletAddress(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// True for errors caused by the caller's input rather than the node or the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidWalletAddress(_) | Error::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
