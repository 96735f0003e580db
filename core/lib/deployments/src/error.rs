use std::{io, path::PathBuf};

use thiserror::Error;

use mgv_types::HistoryError;

/// Failure to answer a record query.
///
/// A missing record is not an error: readers report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum RecordReaderError {
    #[error("Cannot read deployment record {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed deployment record {path:?}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Deployment record of {contract} is unavailable: {reason}")]
    Unavailable { contract: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("Record reader failure: {0}")]
    Reader(#[from] RecordReaderError),
    #[error("Found more than {0} historical versions, refusing to continue the scan")]
    VersionLimitExceeded(u32),
    #[error("Inconsistent deployment history: {0}")]
    History(#[from] HistoryError),
}
