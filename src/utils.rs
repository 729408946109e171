use chrono::{DateTime, NaiveDateTime};
use polars::prelude::TimeUnit;

pub(crate) fn datetime_to_millis(datetime: &NaiveDateTime) -> i64 {
    datetime.and_utc().timestamp_millis()
}

/// Converts the physical value of a Polars datetime cell back to a `NaiveDateTime`.
pub(crate) fn naive_from_epoch(value: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    let datetime = match unit {
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(value),
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(value),
        TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(value)),
    };
    datetime.map(|dt| dt.naive_utc())
}

#[cfg(test)]
pub(crate) fn datetime_at(
    df: &polars::prelude::DataFrame,
    column: &str,
    row: usize,
) -> Option<NaiveDateTime> {
    use polars::prelude::AnyValue;

    match df.column(column).unwrap().get(row).unwrap() {
        AnyValue::Datetime(value, unit, _) => naive_from_epoch(value, unit),
        AnyValue::Null => None,
        other => panic!("Expected a datetime in column '{}', got {:?}", column, other),
    }
}
