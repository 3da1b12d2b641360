//! Error taxonomy of the SDK.

use std::path::{Path, PathBuf};

use susteam_protocol::ProtocolError;

use crate::config::ConfigError;

/// Boxed transport-level cause carried by [`SdkError::Network`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias used by every SDK operation.
pub type Result<T, E = SdkError> = std::result::Result<T, E>;

/// Errors surfaced by SDK operations.
///
/// No operation retries or recovers locally: the first failing phase
/// aborts the remaining phases and its error is returned as-is.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// The service could not be reached or the response could not be read.
    #[error("network error: {0}")]
    Network(#[source] BoxError),

    /// The response did not match the envelope contract.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The token endpoint reported the bearer token as invalid.
    #[error("{0}")]
    Auth(String),

    /// The envelope reported `success: false`; holds its `error` verbatim.
    #[error("{0}")]
    Server(String),

    #[error("local I/O error on {}: {source}", path.display())]
    LocalIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SdkError {
    pub(crate) fn network(cause: impl Into<BoxError>) -> Self {
        SdkError::Network(cause.into())
    }

    pub(crate) fn local_io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        SdkError::LocalIo {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        SdkError::network(e)
    }
}
