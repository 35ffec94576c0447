use log::info;

use itemsieve_core::{errors::ExtractError, models::config::ExtractConfig};

use crate::{readers, writers};

/// Outcome of a completed extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    pub records_written: usize,
}

/// Copies the selected columns of every record in `config.input` to
/// `config.output`, in input order, header line included.
///
/// The whole input is read and projected before the output file is
/// touched. Any failure aborts the run and leaves a pre-existing output
/// file as it was.
pub fn extract_columns(config: &ExtractConfig) -> Result<ExtractSummary, ExtractError> {
    info!("Reading records from '{}'", config.input.display());
    let records = {
        let mut reader = readers::csv::Reader::from_path(&config.input)?;
        reader.read_all()?
    };

    let mut selected = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        selected.push(config.columns.project(record, i as u64 + 1)?);
    }

    let mut writer = writers::csv::Writer::from_path(&config.output)?;
    writer.write_all(&selected)?;

    info!(
        "Wrote {} records to '{}'",
        selected.len(),
        config.output.display()
    );

    Ok(ExtractSummary {
        records_written: selected.len(),
    })
}
