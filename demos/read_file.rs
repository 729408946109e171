use meteoserver::{columns, read_sun_data_file, MeteoserverError};
use polars::prelude::*;
use std::env;

fn main() -> Result<(), MeteoserverError> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "data/solar_de_bilt.json".to_string());
    let data = read_sun_data_file(&path)?;

    println!("{} ({} current, {} forecast rows)", data.location, data.current.height(), data.forecast.height());
    println!("{}", data.current);

    let sunny = data
        .forecast
        .clone()
        .lazy()
        .filter(col(columns::COL_SD).gt(lit(0.0)))
        .select([col(columns::COL_CET), col(columns::COL_GR), col(columns::COL_SD)])
        .collect()?;
    println!("Forecast hours with sunshine:\n{}", sunny);
    Ok(())
}
