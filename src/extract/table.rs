//! Turns a list of JSON records into a Polars `DataFrame`.
//!
//! Columns named in the schema are coerced to their [`ColumnKind`]; every other
//! column keeps the native JSON type of its values.

use crate::extract::document::Record;
use crate::extract::error::ExtractError;
use crate::extract::schema::{kind_of, ColumnKind, ColumnSpec, DATETIME_FORMAT, DATE_PREFIX_LEN};
use crate::utils::datetime_to_millis;
use chrono::NaiveDateTime;
use polars::prelude::*;
use serde_json::Value;

static NULL: Value = Value::Null;

/// Builds a table with one row per record. Column order is the order in which keys
/// are first seen across the records; an empty record list yields the schema columns
/// without rows.
pub(crate) fn build_table(
    table: &str,
    records: &[Record],
    schema: &[ColumnSpec],
) -> Result<DataFrame, ExtractError> {
    check_required_fields(table, records, schema)?;

    let columns = column_names(records, schema)
        .into_iter()
        .map(|name| match kind_of(schema, name) {
            Some(kind) => typed_column(table, records, name, kind),
            None => Ok(native_column(records, name)),
        })
        .collect::<Result<Vec<Column>, ExtractError>>()?;

    DataFrame::new(columns).map_err(|source| ExtractError::DataFrame {
        table: table.to_string(),
        source,
    })
}

fn check_required_fields(
    table: &str,
    records: &[Record],
    schema: &[ColumnSpec],
) -> Result<(), ExtractError> {
    for (row, record) in records.iter().enumerate() {
        if let Some(missing) = schema.iter().find(|c| !record.contains_key(c.name)) {
            return Err(ExtractError::MissingField {
                table: table.to_string(),
                row,
                field: missing.name.to_string(),
            });
        }
    }
    Ok(())
}

fn column_names<'a>(records: &'a [Record], schema: &'a [ColumnSpec]) -> Vec<&'a str> {
    if records.is_empty() {
        return schema.iter().map(|c| c.name).collect();
    }
    let mut names: Vec<&str> = Vec::new();
    for key in records.iter().flat_map(|record| record.keys()) {
        if !names.contains(&key.as_str()) {
            names.push(key);
        }
    }
    names
}

fn field<'a>(record: &'a Record, name: &str) -> &'a Value {
    record.get(name).unwrap_or(&NULL)
}

/// A single value being coerced, with enough context to report a failure.
struct Cell<'a> {
    table: &'a str,
    row: usize,
    column: &'a str,
    value: &'a Value,
}

impl Cell<'_> {
    fn invalid_number(&self) -> ExtractError {
        ExtractError::InvalidNumber {
            table: self.table.to_string(),
            row: self.row,
            column: self.column.to_string(),
            value: self.value.to_string(),
        }
    }

    fn invalid_timestamp(&self, value: String, source: Option<chrono::ParseError>) -> ExtractError {
        ExtractError::InvalidTimestamp {
            table: self.table.to_string(),
            row: self.row,
            column: self.column.to_string(),
            value,
            source,
        }
    }

    fn float(&self) -> Result<Option<f64>, ExtractError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n.as_f64().map(Some).ok_or_else(|| self.invalid_number()),
            // `f64::from_str` also takes "NaN" and "inf", which have no JSON form.
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Some)
                .ok_or_else(|| self.invalid_number()),
            _ => Err(self.invalid_number()),
        }
    }

    fn integer(&self) -> Result<Option<i64>, ExtractError> {
        let parsed = match self.value {
            Value::Null => return Ok(None),
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(integral))
            }
            _ => None,
        };
        parsed.map(Some).ok_or_else(|| self.invalid_number())
    }

    fn timestamp(&self) -> Result<Option<NaiveDateTime>, ExtractError> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => parse_datetime(s)
                .map(Some)
                .map_err(|e| self.invalid_timestamp(self.value.to_string(), Some(e))),
            other => Err(self.invalid_timestamp(other.to_string(), None)),
        }
    }

    /// Completes a time of day with the date prefix of `date`, which must still be the
    /// raw string from the record.
    fn spliced_time(&self, date: &Value) -> Result<Option<NaiveDateTime>, ExtractError> {
        match (date, self.value) {
            (Value::Null, _) | (_, Value::Null) => Ok(None),
            (Value::String(date), Value::String(time)) => {
                let day: String = date.chars().take(DATE_PREFIX_LEN).collect();
                let joined = format!("{day} {time}");
                parse_datetime(&joined)
                    .map(Some)
                    .map_err(|e| self.invalid_timestamp(Value::String(joined).to_string(), Some(e)))
            }
            _ => Err(self.invalid_timestamp(self.value.to_string(), None)),
        }
    }
}

fn parse_datetime(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
}

/// `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64)
        .then_some(f as i64)
}

fn typed_column(
    table: &str,
    records: &[Record],
    name: &str,
    kind: ColumnKind,
) -> Result<Column, ExtractError> {
    let cells = records.iter().enumerate().map(|(row, record)| {
        (
            record,
            Cell {
                table,
                row,
                column: name,
                value: field(record, name),
            },
        )
    });

    let series = match kind {
        ColumnKind::Integer => {
            let values = cells
                .map(|(_, cell)| cell.integer())
                .collect::<Result<Vec<_>, _>>()?;
            Series::new(name.into(), values)
        }
        ColumnKind::Float => {
            let values = cells
                .map(|(_, cell)| cell.float())
                .collect::<Result<Vec<_>, _>>()?;
            Series::new(name.into(), values)
        }
        ColumnKind::Timestamp => {
            let values = cells
                .map(|(_, cell)| cell.timestamp())
                .collect::<Result<Vec<_>, _>>()?;
            datetime_series(name, &values)
        }
        ColumnKind::SplicedTime { date_column } => {
            let values = cells
                .map(|(record, cell)| cell.spliced_time(field(record, date_column)))
                .collect::<Result<Vec<_>, _>>()?;
            datetime_series(name, &values)
        }
    };
    Ok(Column::from(series))
}

fn datetime_series(name: &str, values: &[Option<NaiveDateTime>]) -> Series {
    let millis: Vec<Option<i64>> = values
        .iter()
        .map(|v| v.as_ref().map(datetime_to_millis))
        .collect();
    Int64Chunked::new(name.into(), millis)
        .into_datetime(TimeUnit::Milliseconds, None)
        .into_series()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NativeKind {
    Boolean,
    Integer,
    Float,
    Text,
}

fn native_kind(values: &[&Value]) -> NativeKind {
    let mut present = values.iter().filter(|v| !v.is_null()).peekable();
    if present.peek().is_none() {
        return NativeKind::Text;
    }
    let present: Vec<&&Value> = present.collect();
    if present.iter().all(|v| v.is_boolean()) {
        NativeKind::Boolean
    } else if present.iter().all(|v| v.is_i64()) {
        NativeKind::Integer
    } else if present.iter().all(|v| v.is_number()) {
        NativeKind::Float
    } else {
        NativeKind::Text
    }
}

fn native_column(records: &[Record], name: &str) -> Column {
    let values: Vec<&Value> = records.iter().map(|r| field(r, name)).collect();

    let series = match native_kind(&values) {
        NativeKind::Boolean => Series::new(
            name.into(),
            values.iter().map(|v| v.as_bool()).collect::<Vec<_>>(),
        ),
        NativeKind::Integer => Series::new(
            name.into(),
            values.iter().map(|v| v.as_i64()).collect::<Vec<_>>(),
        ),
        NativeKind::Float => Series::new(
            name.into(),
            values.iter().map(|v| v.as_f64()).collect::<Vec<_>>(),
        ),
        NativeKind::Text => Series::new(
            name.into(),
            values
                .iter()
                .map(|v| match v {
                    Value::Null => None,
                    Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                })
                .collect::<Vec<_>>(),
        ),
    };
    Column::from(series)
}
