//! Column schemas of the Meteoserver "Zon Actueel" (sun data) tables.
//!
//! Meteoserver sends almost every value as a JSON string. The schemas below name the
//! semantic type each column is coerced to. Columns that are not listed keep the
//! native JSON type of their values.

/// Format of the `cet` column, e.g. `"01-01-2021 10:00"`.
pub(crate) const DATETIME_FORMAT: &str = "%d-%m-%Y %H:%M";
/// Format of the `sr` and `ss` columns as sent by the API, e.g. `"08:30"`.
pub(crate) const TIME_OF_DAY_FORMAT: &str = "%H:%M";
pub(crate) const DATE_FORMAT: &str = "%d-%m-%Y";
/// Length of the `DD-MM-YYYY` date prefix of a `cet` value.
pub(crate) const DATE_PREFIX_LEN: usize = 10;

// Shared
pub const COL_TIME: &str = "time"; // Unix epoch
pub const COL_CET: &str = "cet"; // Local (CET/CEST) date and time
pub const COL_ELEV: &str = "elev"; // Solar elevation (degrees)
pub const COL_AZ: &str = "az"; // Solar azimuth (degrees)
pub const COL_TEMP: &str = "temp"; // Temperature (°C)
pub const COL_GR: &str = "gr"; // Global radiation (J/cm²/h)
pub const COL_SD: &str = "sd"; // Sunshine duration (minutes)
pub const COL_TC: &str = "tc"; // Total cloud cover (%)
pub const COL_VIS: &str = "vis"; // Visibility (m)
pub const COL_PREC: &str = "prec"; // Precipitation (mm)

// Current specific
pub const COL_SR: &str = "sr"; // Sunrise
pub const COL_SS: &str = "ss"; // Sunset

// Forecast specific
pub const COL_LC: &str = "lc"; // Low cloud cover (%)
pub const COL_MC: &str = "mc"; // Mid cloud cover (%)
pub const COL_HC: &str = "hc"; // High cloud cover (%)

/// Semantic type a column is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnKind {
    Integer,
    Float,
    /// A full `DD-MM-YYYY HH:MM` timestamp.
    Timestamp,
    /// A `HH:MM` time of day, completed with the first 10 characters of the
    /// row's raw `date_column` value.
    SplicedTime { date_column: &'static str },
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn spec(name: &'static str, kind: ColumnKind) -> ColumnSpec {
    ColumnSpec { name, kind }
}

const SUN_TIME: ColumnKind = ColumnKind::SplicedTime {
    date_column: COL_CET,
};

pub(crate) const CURRENT_SCHEMA: &[ColumnSpec] = &[
    spec(COL_TIME, ColumnKind::Integer),
    spec(COL_CET, ColumnKind::Timestamp),
    spec(COL_ELEV, ColumnKind::Float),
    spec(COL_AZ, ColumnKind::Float),
    spec(COL_TEMP, ColumnKind::Float),
    spec(COL_GR, ColumnKind::Float),
    spec(COL_SD, ColumnKind::Float),
    spec(COL_TC, ColumnKind::Float),
    spec(COL_VIS, ColumnKind::Float),
    spec(COL_PREC, ColumnKind::Float),
    spec(COL_SR, SUN_TIME),
    spec(COL_SS, SUN_TIME),
];

pub(crate) const FORECAST_SCHEMA: &[ColumnSpec] = &[
    spec(COL_TIME, ColumnKind::Integer),
    spec(COL_CET, ColumnKind::Timestamp),
    spec(COL_ELEV, ColumnKind::Float),
    spec(COL_AZ, ColumnKind::Float),
    spec(COL_TEMP, ColumnKind::Float),
    spec(COL_GR, ColumnKind::Float),
    spec(COL_SD, ColumnKind::Float),
    spec(COL_TC, ColumnKind::Float),
    spec(COL_LC, ColumnKind::Float),
    spec(COL_MC, ColumnKind::Float),
    spec(COL_HC, ColumnKind::Float),
    spec(COL_VIS, ColumnKind::Float),
    spec(COL_PREC, ColumnKind::Float),
];

/// Looks up the kind of `name` in `schema`.
pub(crate) fn kind_of(schema: &[ColumnSpec], name: &str) -> Option<ColumnKind> {
    schema.iter().find(|c| c.name == name).map(|c| c.kind)
}
