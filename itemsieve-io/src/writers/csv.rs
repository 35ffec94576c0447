use std::{fs::File, path::Path};

use csv::StringRecord;
use itemsieve_core::errors::ExtractError;

/// Writes records back out as comma separated text, one record per line.
pub struct Writer {
    inner: csv::Writer<File>,
}

impl Writer {
    /// Creates the file at `path`, truncating any existing content.
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let inner = csv::Writer::from_path(path)?;
        Ok(Self { inner })
    }

    pub fn write_all(&mut self, records: &[StringRecord]) -> Result<(), ExtractError> {
        for record in records {
            self.inner.write_record(record)?;
        }
        self.inner.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}
