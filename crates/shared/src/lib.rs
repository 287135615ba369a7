pub mod models;
pub mod error;
pub mod config;
pub mod blocklist;

pub use blocklist::Blocklist;
pub use error::{Error, Result};
