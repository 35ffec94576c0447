use std::path::PathBuf;

use thiserror::Error;

/// Failure kinds of an extraction run.
///
/// Every fallible operation in the pipeline returns this enum, so callers
/// can tell the failure causes apart without inspecting message text.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not open input file '{}': {}", path.display(), source)]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("record {record} has {fields} fields, column index {index} is out of range")]
    IndexOutOfRange {
        /// 1-based position of the record in the input file.
        record: u64,
        index: usize,
        fields: usize,
    },
    #[error("unexpected error: {0}")]
    Unexpected(#[from] csv::Error),
}
