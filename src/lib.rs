//! Download and parse Dutch sun and weather forecasts from [Meteoserver.nl](https://meteoserver.nl)
//! into Polars `DataFrame`s.
//!
//! Every dataset can be fetched live (with your API key), read from a saved JSON file,
//! or written back to disk:
//!
//! ```no_run
//! # fn main() -> Result<(), meteoserver::MeteoserverError> {
//! let data = meteoserver::fetch_sun_data("my-api-key", "De Bilt")?;
//! println!("Sun forecast for {}:\n{}", data.location, data.forecast);
//! data.write_file("solar_de_bilt.json")?;
//! # Ok(())
//! # }
//! ```

mod error;
mod extract;
mod fetch;
mod meteoserver;
mod serialize;
mod types;
mod utils;

pub use error::MeteoserverError;
pub use extract::error::ExtractError;
pub use meteoserver::*;

pub use extract::extract_location;
pub use extract::hourly::extract_hourly_forecast;
pub use extract::schema as columns;
pub use extract::sun::extract_sun_data;

pub use fetch::*;
pub use serialize::{write_hourly_forecast_file, write_sun_data_file};

pub use types::dataset::Dataset;
pub use types::sun_data::SunData;
