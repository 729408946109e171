pub(crate) mod document;
pub mod error;
pub mod hourly;
pub mod schema;
pub mod sun;
pub(crate) mod table;

use crate::extract::document::{LocationDocument, Place};
use crate::extract::error::ExtractError;
use serde::Deserialize;
use serde_json::Value;

/// Returns the location name (`plaatsnaam[0].plaats`) of a sun-data or hourly-forecast
/// document.
pub fn extract_location(document: &Value) -> Result<String, ExtractError> {
    let document = LocationDocument::deserialize(document).map_err(ExtractError::Document)?;
    location_from_places(&document.plaatsnaam)
}

pub(crate) fn location_from_places(places: &[Place]) -> Result<String, ExtractError> {
    places
        .first()
        .map(|place| place.plaats.clone())
        .ok_or(ExtractError::MissingLocation)
}
