use std::{fs::File, path::Path};

use csv::{ReaderBuilder, StringRecord};
use itemsieve_core::errors::ExtractError;

/// Reads comma separated records from a file, one `StringRecord` per line.
///
/// The first line is not treated as a header and ragged records are
/// accepted by the parser. Which indices a record must satisfy is decided
/// by the column selection, not here.
#[derive(Debug)]
pub struct Reader {
    inner: csv::Reader<File>,
}

impl Reader {
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let file = File::open(path).map_err(|source| ExtractError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let inner = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        Ok(Self { inner })
    }

    /// Reads every record into memory, in input order.
    pub fn read_all(&mut self) -> Result<Vec<StringRecord>, ExtractError> {
        let mut records = Vec::new();
        for result in self.inner.records() {
            records.push(result?);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn reads_all_records_including_the_first_line() {
        let mut input = NamedTempFile::new().unwrap();
        write!(input, "key,name,foo\n1,a,x\n2,b,y\n").unwrap();
        input.flush().unwrap();

        let mut reader = Reader::from_path(input.path()).unwrap();
        let records = reader.read_all().unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], StringRecord::from(vec!["key", "name", "foo"]));
        assert_eq!(records[2], StringRecord::from(vec!["2", "b", "y"]));
    }

    #[test]
    fn ragged_records_parse() {
        let mut input = NamedTempFile::new().unwrap();
        write!(input, "a,b,c\nd,e\nf\n").unwrap();
        input.flush().unwrap();

        let mut reader = Reader::from_path(input.path()).unwrap();
        let records = reader.read_all().unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[1].len(), 2);
        assert_eq!(records[2].len(), 1);
    }

    #[test]
    fn missing_file_is_a_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does_not_exist.csv");

        let err = Reader::from_path(&missing).expect_err("open should fail");

        match err {
            ExtractError::FileAccess { path, .. } => assert_eq!(path, missing),
            other => panic!("Expected FileAccess, got {:?}", other),
        }
    }
}
