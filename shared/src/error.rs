use thiserror::Error;
use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("Hostname is empty")]
    EmptyHostname,

    #[error("Hostname is {len} bytes long, the limit is {}", crate::endpoint::MAX_HOSTNAME_LEN)]
    HostnameTooLong { len: usize },

    #[error("Invalid hostname: {0:?}")]
    InvalidHostname(String),

    #[error("Hostname unavailable: {0}")]
    Unavailable(String),

    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl From<JsonError> for ConfigError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
