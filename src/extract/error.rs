use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Document does not have the expected Meteoserver shape")]
    Document(#[source] serde_json::Error),

    #[error("Location list 'plaatsnaam' is empty")]
    MissingLocation,

    #[error("Record {row} of '{table}' is missing required field '{field}'")]
    MissingField {
        table: String,
        row: usize,
        field: String,
    },

    #[error("Value {value} in column '{column}' of '{table}' (row {row}) is not a valid number")]
    InvalidNumber {
        table: String,
        row: usize,
        column: String,
        value: String,
    },

    #[error("Value {value} in column '{column}' of '{table}' (row {row}) is not a valid timestamp")]
    InvalidTimestamp {
        table: String,
        row: usize,
        column: String,
        value: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("Failed to build DataFrame for '{table}'")]
    DataFrame {
        table: String,
        #[source]
        source: PolarsError,
    },
}
