use thiserror::Error;

use crate::DocId;

/// Errors that abort a recommendation request.
///
/// None of these are transient; the caller reports them and no partial result is produced.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// There are no documents to rank against.
    #[error("corpus is empty")]
    EmptyCorpus,

    #[error("invalid result count {num}: must be between 1 and {max}", max = crate::MAX_RESULTS)]
    InvalidResultCount { num: usize },

    /// A ranked id has no document in the corpus at assembly time.
    #[error("ranked document {id} is not present in the corpus")]
    DanglingReference { id: DocId },

    #[error("malformed document at position {position}: {reason}")]
    MalformedDocument { position: usize, reason: String },

    #[error("unsupported document source: {0}")]
    UnsupportedSource(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
