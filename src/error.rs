use crate::extract::error::ExtractError;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeteoserverError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    ResponseBody(String, #[source] reqwest::Error),

    #[error("Failed to parse JSON data")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to read file '{0}'")]
    FileRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to write file '{0}'")]
    FileWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to encode JSON for file '{0}'")]
    FileEncode(PathBuf, #[source] serde_json::Error),

    #[error("Failed processing DataFrame: {0}")]
    DataFrame(#[from] PolarsError),
}
