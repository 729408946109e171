//! Writes tables back to disk in the JSON shape of the Meteoserver API.

use crate::error::MeteoserverError;
use crate::extract::document::{HourlyDocument, Place, Record, SunDocument};
use crate::extract::schema::{
    kind_of, ColumnKind, ColumnSpec, CURRENT_SCHEMA, DATETIME_FORMAT, DATE_FORMAT,
    FORECAST_SCHEMA, TIME_OF_DAY_FORMAT,
};
use crate::types::sun_data::SunData;
use crate::utils::naive_from_epoch;
use log::info;
use polars::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes a location and its `current` and `forecast` tables as a compact "Zon Actueel"
/// JSON file.
///
/// Timestamps are written in the API's own text format (`cet` as `DD-MM-YYYY HH:MM`,
/// `sr`/`ss` as `HH:MM`), so [`crate::read_sun_data_file`] reads the same tables back.
/// Numbers are written as JSON numbers rather than the quoted strings the API sends.
pub fn write_sun_data_file(
    path: impl AsRef<Path>,
    location: &str,
    current: &DataFrame,
    forecast: &DataFrame,
) -> Result<(), MeteoserverError> {
    let document = SunDocument {
        plaatsnaam: vec![Place {
            plaats: location.to_string(),
        }],
        current: frame_to_records(current, CURRENT_SCHEMA)?,
        forecast: frame_to_records(forecast, FORECAST_SCHEMA)?,
    };
    write_json(path.as_ref(), &document)
}

/// Writes a location and its hourly forecast table as a compact JSON file.
pub fn write_hourly_forecast_file(
    path: impl AsRef<Path>,
    location: &str,
    data: &DataFrame,
) -> Result<(), MeteoserverError> {
    let document = HourlyDocument {
        plaatsnaam: vec![Place {
            plaats: location.to_string(),
        }],
        data: frame_to_records(data, &[])?,
    };
    write_json(path.as_ref(), &document)
}

impl SunData {
    /// Writes this data to `path`, see [`write_sun_data_file`].
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<(), MeteoserverError> {
        write_sun_data_file(path, &self.location, &self.current, &self.forecast)
    }
}

fn write_json<T: Serialize>(path: &Path, document: &T) -> Result<(), MeteoserverError> {
    let file =
        File::create(path).map_err(|e| MeteoserverError::FileWrite(path.to_path_buf(), e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, document)
        .map_err(|e| MeteoserverError::FileEncode(path.to_path_buf(), e))?;
    writer
        .flush()
        .map_err(|e| MeteoserverError::FileWrite(path.to_path_buf(), e))?;
    info!("Wrote Meteoserver data to {}", path.display());
    Ok(())
}

/// One JSON object per row, keys in column order.
fn frame_to_records(df: &DataFrame, schema: &[ColumnSpec]) -> PolarsResult<Vec<Record>> {
    let columns = df.get_columns();
    (0..df.height())
        .map(|row| {
            columns
                .iter()
                .map(|column| {
                    let name = column.name().as_str();
                    let value = cell_to_json(column.get(row)?, kind_of(schema, name));
                    Ok((name.to_string(), value))
                })
                .collect::<PolarsResult<Record>>()
        })
        .collect()
}

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Only the dtypes the extractors produce read back unchanged. Other integer widths are
/// written as numbers and `Date` as `DD-MM-YYYY`; anything else as its display text.
fn cell_to_json(value: AnyValue, kind: Option<ColumnKind>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => Value::Bool(b),
        AnyValue::String(s) => Value::String(s.to_string()),
        AnyValue::StringOwned(s) => Value::String(s.to_string()),
        AnyValue::Int8(v) => Value::from(v),
        AnyValue::Int16(v) => Value::from(v),
        AnyValue::Int32(v) => Value::from(v),
        AnyValue::Int64(v) => Value::from(v),
        AnyValue::UInt8(v) => Value::from(v),
        AnyValue::UInt16(v) => Value::from(v),
        AnyValue::UInt32(v) => Value::from(v),
        AnyValue::UInt64(v) => Value::from(v),
        // Non-finite floats become null. The extractor never produces them.
        AnyValue::Float32(v) => Value::from(v),
        AnyValue::Float64(v) => Value::from(v),
        AnyValue::Date(days) => {
            naive_from_epoch(i64::from(days) * MILLIS_PER_DAY, TimeUnit::Milliseconds)
                .map(|dt| Value::String(dt.format(DATE_FORMAT).to_string()))
                .unwrap_or(Value::Null)
        }
        AnyValue::Datetime(v, unit, _) => {
            let format = match kind {
                Some(ColumnKind::SplicedTime { .. }) => TIME_OF_DAY_FORMAT,
                _ => DATETIME_FORMAT,
            };
            naive_from_epoch(v, unit)
                .map(|dt| Value::String(dt.format(format).to_string()))
                .unwrap_or(Value::Null)
        }
        other => Value::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{read_hourly_forecast_file, read_sun_data_file};
    use crate::extract_sun_data;
    use serde_json::json;

    fn sample() -> SunData {
        extract_sun_data(json!({
            "plaatsnaam": [{"plaats": "De Bilt"}],
            "current": [{
                "cet": "31-12-2020 23:50", "sr": "08:48", "ss": "16:36", "time": "1609455000",
                "elev": "-60.5", "az": "340", "temp": "1.2", "gr": "0", "sd": "0", "tc": "90",
                "vis": "8000", "prec": "0"
            }],
            "forecast": [
                {"time": "1609459200", "cet": "01-01-2021 01:00", "elev": "-58", "az": "20",
                 "temp": "0.5", "gr": "0", "sd": "0", "tc": "100", "lc": "80", "mc": "40",
                 "hc": "0", "vis": "6000", "prec": "0.1"},
                {"time": "1609462800", "cet": "01-01-2021 02:00", "elev": "-52", "az": "45",
                 "temp": "0.3", "gr": "0", "sd": "0", "tc": "100", "lc": "85", "mc": "35",
                 "hc": "5", "vis": "5000", "prec": "0.0"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_sun_data_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sun.json");
        let original = sample();

        write_sun_data_file(&path, &original.location, &original.current, &original.forecast)?;
        let restored = read_sun_data_file(&path)?;

        assert_eq!(restored.location, original.location);
        assert!(restored.current.equals_missing(&original.current));
        assert!(restored.forecast.equals_missing(&original.forecast));
        Ok(())
    }

    #[test]
    fn test_written_file_shape() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sun.json");
        sample().write_file(&path)?;

        let text = std::fs::read_to_string(&path)?;
        assert!(!text.contains('\n'), "expected compact JSON");
        assert!(text.starts_with(r#"{"plaatsnaam":[{"plaats":"De Bilt"}],"current":[{"cet":"#));

        let document: Value = serde_json::from_str(&text)?;
        let current = &document["current"][0];
        assert_eq!(current["cet"], json!("31-12-2020 23:50"));
        assert_eq!(current["sr"], json!("08:48"));
        assert_eq!(current["ss"], json!("16:36"));
        assert_eq!(current["time"], json!(1609455000));
        assert_eq!(current["elev"], json!(-60.5));
        assert_eq!(document["forecast"].as_array().map(Vec::len), Some(2));
        Ok(())
    }

    #[test]
    fn test_hourly_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("hourly.json");
        let data = crate::extract_hourly_forecast(json!({
            "plaatsnaam": [{"plaats": "Utrecht"}],
            "data": [
                {"tijd": "1609491600", "temp": "5", "winds": 3, "gr": 12.5, "icoon": null},
                {"tijd": "1609495200", "temp": "6", "winds": 4, "gr": 20.0, "icoon": "zon"}
            ]
        }))?;

        write_hourly_forecast_file(&path, "Utrecht", &data)?;
        let restored = read_hourly_forecast_file(&path)?;

        assert!(restored.equals_missing(&data));
        Ok(())
    }

    #[test]
    fn test_non_finite_source_values_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sun.json");
        let mut document = serde_json::to_value(SunDocument {
            plaatsnaam: vec![Place {
                plaats: "De Bilt".to_string(),
            }],
            current: frame_to_records(&sample().current, CURRENT_SCHEMA)?,
            forecast: vec![],
        })?;
        document["current"][0]["temp"] = json!("NaN");
        document["current"][0]["vis"] = json!("inf");
        std::fs::write(&path, serde_json::to_string(&document)?)?;

        // A NaN cell would be written as null and read back as a missing value.
        assert!(matches!(
            read_sun_data_file(&path),
            Err(MeteoserverError::Extract(crate::ExtractError::InvalidNumber { ref column, .. }))
                if column == "temp"
        ));
        Ok(())
    }

    #[test]
    fn test_other_dtypes_are_written_by_value() -> Result<(), Box<dyn std::error::Error>> {
        let df = DataFrame::new(vec![
            Column::new("i8".into(), [-3i8]),
            Column::new("u16".into(), [7u16]),
            Column::new("day".into(), [18628i32]).cast(&DataType::Date)?,
        ])?;
        let records = frame_to_records(&df, &[])?;

        assert_eq!(records[0]["i8"], json!(-3));
        assert_eq!(records[0]["u16"], json!(7));
        assert_eq!(records[0]["day"], json!("01-01-2021"));
        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, ["i8", "u16", "day"]);
        Ok(())
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("sun.json");
        assert!(matches!(
            sample().write_file(&path),
            Err(MeteoserverError::FileWrite(..))
        ));
    }
}
