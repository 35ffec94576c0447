use std::path::PathBuf;

use crate::models::selection::ColumnSelection;

/// Everything one extraction run needs: where to read, where to write and
/// which columns to keep. Built by the caller and passed in explicitly.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub columns: ColumnSelection,
}

impl ExtractConfig {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        columns: ColumnSelection,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            columns,
        }
    }
}
