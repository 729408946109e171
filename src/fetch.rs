//! One-call entry points: download with a default [`Meteoserver`] client, or read a
//! previously saved response from disk.

use crate::error::MeteoserverError;
use crate::extract::hourly::extract_hourly_forecast;
use crate::extract::sun::extract_sun_data;
use crate::meteoserver::Meteoserver;
use crate::types::sun_data::SunData;
use log::info;
use polars::prelude::DataFrame;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Downloads the "Zon Actueel" data for `location` from the public Meteoserver API.
///
/// # Examples
///
/// ```no_run
/// # use meteoserver::{fetch_sun_data, MeteoserverError};
/// # fn main() -> Result<(), MeteoserverError> {
/// let data = fetch_sun_data("my-api-key", "De Bilt")?;
/// println!("{}", data.current);
/// # Ok(())
/// # }
/// ```
pub fn fetch_sun_data(key: &str, location: &str) -> Result<SunData, MeteoserverError> {
    Meteoserver::new()?
        .sun_data()
        .key(key)
        .location(location)
        .call()
}

/// Downloads the hourly weather forecast for `location` from the public Meteoserver API.
pub fn fetch_hourly_forecast(key: &str, location: &str) -> Result<DataFrame, MeteoserverError> {
    Meteoserver::new()?
        .hourly_forecast()
        .key(key)
        .location(location)
        .call()
}

/// Reads a saved "Zon Actueel" JSON file, as downloaded from the API or written by
/// [`crate::write_sun_data_file`].
pub fn read_sun_data_file(path: impl AsRef<Path>) -> Result<SunData, MeteoserverError> {
    let document = read_document(path.as_ref())?;
    Ok(extract_sun_data(document)?)
}

/// Reads a saved hourly-forecast JSON file.
pub fn read_hourly_forecast_file(path: impl AsRef<Path>) -> Result<DataFrame, MeteoserverError> {
    let document = read_document(path.as_ref())?;
    Ok(extract_hourly_forecast(document)?)
}

fn read_document(path: &Path) -> Result<Value, MeteoserverError> {
    info!("Reading Meteoserver data from {}", path.display());
    let file = File::open(path).map_err(|e| MeteoserverError::FileRead(path.to_path_buf(), e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
