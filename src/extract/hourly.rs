use crate::extract::document::HourlyDocument;
use crate::extract::error::ExtractError;
use crate::extract::table::build_table;
use log::debug;
use polars::prelude::DataFrame;
use serde_json::Value;

pub(crate) const HOURLY_TABLE: &str = "data";

/// Extracts the `data` table from a decoded hourly-forecast ("uurverwachting") document.
///
/// Unlike [`crate::extract_sun_data`], no column is coerced: each column takes the type
/// of its JSON values, so values the API sends as strings stay strings.
pub fn extract_hourly_forecast(document: Value) -> Result<DataFrame, ExtractError> {
    let document: HourlyDocument =
        serde_json::from_value(document).map_err(ExtractError::Document)?;
    hourly_from_document(&document)
}

pub(crate) fn hourly_from_document(document: &HourlyDocument) -> Result<DataFrame, ExtractError> {
    let data = build_table(HOURLY_TABLE, &document.data, &[])?;
    debug!("Extracted {} hourly forecast rows", data.height());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_location;
    use polars::prelude::*;
    use serde_json::json;

    fn document() -> Value {
        json!({
            "plaatsnaam": [{"plaats": "Utrecht"}],
            "data": [
                {"tijd": "1609491600", "tijd_nl": "01-01-2021 10:00", "offset": "1", "temp": "5", "winds": 3, "gr": 12.5},
                {"tijd": "1609495200", "tijd_nl": "01-01-2021 11:00", "offset": "2", "temp": "6", "winds": 4, "gr": 20}
            ]
        })
    }

    #[test]
    fn test_hourly_rows_keep_native_types() -> Result<(), Box<dyn std::error::Error>> {
        let data = extract_hourly_forecast(document())?;

        assert_eq!(data.height(), 2);
        assert_eq!(data.width(), 6);
        assert_eq!(data.column("temp")?.dtype(), &DataType::String);
        assert_eq!(data.column("temp")?.str()?.get(1), Some("6"));
        assert_eq!(data.column("winds")?.dtype(), &DataType::Int64);
        assert_eq!(data.column("gr")?.dtype(), &DataType::Float64);
        assert_eq!(data.column("gr")?.f64()?.get(1), Some(20.0));
        Ok(())
    }

    #[test]
    fn test_location_is_optional_for_hourly() -> Result<(), Box<dyn std::error::Error>> {
        let data = extract_hourly_forecast(json!({"data": []}))?;
        assert_eq!(data.height(), 0);
        Ok(())
    }

    #[test]
    fn test_hourly_location() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(extract_location(&document())?, "Utrecht");
        Ok(())
    }

    #[test]
    fn test_data_must_be_a_list_of_records() {
        let err = extract_hourly_forecast(json!({"data": [1, 2]})).unwrap_err();
        assert!(matches!(err, ExtractError::Document(_)));
    }
}
