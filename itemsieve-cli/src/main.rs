use std::{process::ExitCode, time::Instant};

use humantime::format_duration;
use log::{error, info};

use itemsieve_core::{
    errors::ExtractError,
    models::{config::ExtractConfig, selection::ColumnSelection},
};
use itemsieve_io::services::extraction_service::extract_columns;

const INPUT_FILE: &str = "item.csv";
const OUTPUT_FILE: &str = "filtered_item_category_data.csv";

// key, ItemSearchCategory, CanBeHq
const TARGET_COLUMNS: [usize; 3] = [0, 17, 28];

fn main() -> ExitCode {
    let total_duration = Instant::now();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let config = ExtractConfig::new(
        INPUT_FILE,
        OUTPUT_FILE,
        ColumnSelection::new(TARGET_COLUMNS.to_vec()),
    );

    let code = match extract_columns(&config) {
        Ok(summary) => {
            info!(
                "Extraction finished. {} records written to '{}'",
                summary.records_written, OUTPUT_FILE
            );
            ExitCode::SUCCESS
        }
        Err(ExtractError::FileAccess { path, source }) => {
            error!(
                "Input file '{}' could not be read: {}. Check the file name.",
                path.display(),
                source
            );
            ExitCode::FAILURE
        }
        Err(err @ ExtractError::IndexOutOfRange { .. }) => {
            error!("{err}. Check the configured column indices against the input file.");
            ExitCode::FAILURE
        }
        Err(ExtractError::Unexpected(err)) => {
            error!("Unexpected error: {err}");
            ExitCode::FAILURE
        }
    };

    info!("Total time: {}", format_duration(total_duration.elapsed()));

    code
}
