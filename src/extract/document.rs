//! Top-level shape of the Meteoserver JSON responses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub(crate) type Record = Map<String, Value>;

/// One element of the `plaatsnaam` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Place {
    pub plaats: String,
}

/// Response of the `solar.php` ("Zon Actueel") endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SunDocument {
    pub plaatsnaam: Vec<Place>,
    pub current: Vec<Record>,
    pub forecast: Vec<Record>,
}

/// Response of the `uurverwachting_gfs.php` (hourly forecast) endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct HourlyDocument {
    #[serde(default)]
    pub plaatsnaam: Vec<Place>,
    pub data: Vec<Record>,
}

/// Only the location part of either response.
#[derive(Debug, Deserialize)]
pub(crate) struct LocationDocument {
    pub plaatsnaam: Vec<Place>,
}
