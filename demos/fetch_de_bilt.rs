use meteoserver::{Meteoserver, MeteoserverError};
use std::env;

fn main() -> Result<(), MeteoserverError> {
    configure_polars_display();
    let key = env::var("METEOSERVER_API_KEY").expect("Set METEOSERVER_API_KEY to your API key");

    let client = Meteoserver::new()?;
    let data = client.sun_data().key(&key).location("De Bilt").call()?;

    println!("Location: {}", data.location);
    println!("Current:\n{}", data.current);
    println!("Forecast:\n{}", data.forecast);

    data.write_file("solar_de_bilt.json")?;
    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show 20 rows
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}
