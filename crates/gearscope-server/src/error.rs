//! Server startup errors

use std::path::PathBuf;

/// Failures while configuring or starting the server
///
/// Request-level failures never surface here; they are turned into notices.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {name} = {value:?}: {reason}")]
    Config {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to load reference dataset {}: {source}", path.display())]
    Reference {
        path: PathBuf,
        #[source]
        source: gearscope_core::Error,
    },

    #[error(transparent)]
    Core(#[from] gearscope_core::Error),
}

/// Result type for server setup
pub type Result<T> = std::result::Result<T, Error>;
