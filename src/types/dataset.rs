//! Defines the Meteoserver datasets this crate can download.

use std::fmt;

/// A Meteoserver dataset, each served by its own API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// "Zon Actueel": recent observations and a four-day sun forecast (`solar.php`).
    Sun,
    /// Four to ten day hourly weather forecast from the GFS model (`uurverwachting_gfs.php`).
    HourlyForecast,
}

impl Dataset {
    pub(crate) fn endpoint(&self) -> &'static str {
        match self {
            Dataset::Sun => "solar.php",
            Dataset::HourlyForecast => "uurverwachting_gfs.php",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Dataset::Sun => "sun",
            Dataset::HourlyForecast => "hourly forecast",
        }
    }
}

/// Formats a `Dataset` by its human-readable name.
///
/// # Examples
///
/// ```
/// use meteoserver::Dataset;
///
/// assert_eq!(Dataset::Sun.to_string(), "sun");
/// assert_eq!(format!("{}", Dataset::HourlyForecast), "hourly forecast");
/// ```
impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
