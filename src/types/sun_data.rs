//! Contains `SunData`, the parsed "Zon Actueel" response.

use crate::extract::schema::COL_CET;
use chrono::NaiveDateTime;
use polars::prelude::{col, lit, DataFrame, IntoLazy, LazyFrame};

/// Recent observations and the sun forecast for one location.
///
/// Both tables have one row per record of the API response, in response order.
///
/// | column | `current` | `forecast` | type |
/// |---|---|---|---|
/// | `time` | ✓ | ✓ | `Int64` (Unix epoch) |
/// | `cet` | ✓ | ✓ | `Datetime(ms)` |
/// | `elev`, `az`, `temp`, `gr`, `sd`, `tc`, `vis`, `prec` | ✓ | ✓ | `Float64` |
/// | `lc`, `mc`, `hc` | | ✓ | `Float64` |
/// | `sr`, `ss` | ✓ | | `Datetime(ms)`, on the date of the row's `cet` |
///
/// Fields the API adds beyond these are kept with their JSON type.
#[derive(Debug, Clone)]
pub struct SunData {
    /// Name of the location the data are for, e.g. `"De Bilt"`.
    pub location: String,
    /// Current and recent measurements from a nearby station.
    pub current: DataFrame,
    /// Sun forecast for the location.
    pub forecast: DataFrame,
}

impl SunData {
    /// Filters the forecast to rows whose `cet` lies within `start..=end`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use meteoserver::read_sun_data_file;
    /// use chrono::NaiveDate;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let data = read_sun_data_file("data/solar_de_bilt.json")?;
    /// let day = NaiveDate::from_ymd_opt(2021, 1, 2).unwrap();
    /// let tomorrow = data
    ///     .forecast_range(day.and_hms_opt(0, 0, 0).unwrap(), day.and_hms_opt(23, 59, 0).unwrap())
    ///     .collect()?;
    /// println!("{}", tomorrow);
    /// # Ok(())
    /// # }
    /// ```
    pub fn forecast_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> LazyFrame {
        self.forecast.clone().lazy().filter(
            col(COL_CET)
                .gt_eq(lit(start))
                .and(col(COL_CET).lt_eq(lit(end))),
        )
    }
}
