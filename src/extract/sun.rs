use crate::extract::document::SunDocument;
use crate::extract::error::ExtractError;
use crate::extract::location_from_places;
use crate::extract::schema::{CURRENT_SCHEMA, FORECAST_SCHEMA};
use crate::extract::table::build_table;
use crate::types::sun_data::SunData;
use log::debug;
use serde_json::Value;

pub(crate) const CURRENT_TABLE: &str = "current";
pub(crate) const FORECAST_TABLE: &str = "forecast";

/// Extracts the location name and the `current` and `forecast` tables from a decoded
/// "Zon Actueel" document.
///
/// Numeric columns are coerced to `f64` (`time` to `i64`), `cet` is parsed as a
/// `DD-MM-YYYY HH:MM` timestamp, and the sunrise (`sr`) and sunset (`ss`) times of day
/// in `current` are turned into full timestamps using the date of the row's own `cet`.
///
/// # Errors
///
/// Fails on the first record that misses a typed field or holds a value that cannot be
/// coerced. No partial tables are returned.
pub fn extract_sun_data(document: Value) -> Result<SunData, ExtractError> {
    let document: SunDocument = serde_json::from_value(document).map_err(ExtractError::Document)?;
    sun_data_from_document(&document)
}

pub(crate) fn sun_data_from_document(document: &SunDocument) -> Result<SunData, ExtractError> {
    let location = location_from_places(&document.plaatsnaam)?;
    let current = build_table(CURRENT_TABLE, &document.current, CURRENT_SCHEMA)?;
    let forecast = build_table(FORECAST_TABLE, &document.forecast, FORECAST_SCHEMA)?;
    debug!(
        "Extracted {} current and {} forecast rows for {}",
        current.height(),
        forecast.height(),
        location
    );
    Ok(SunData {
        location,
        current,
        forecast,
    })
}
