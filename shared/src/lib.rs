pub mod endpoint;
pub mod error;

// Re-export commonly used items
pub use endpoint::{
    validate_hostname, ResolvedEndpoint, DEFAULT_PORT, DEFAULT_SCHEME, MAX_HOSTNAME_LEN,
};
pub use error::{ConfigError, Result};
