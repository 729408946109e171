//! This module provides the main entry point for downloading data from Meteoserver.nl.
//! The API key and location are passed on every call; the client itself only holds the
//! HTTP connection settings.

use crate::error::MeteoserverError;
use crate::extract::hourly::extract_hourly_forecast;
use crate::extract::sun::extract_sun_data;
use crate::types::dataset::Dataset;
use crate::types::sun_data::SunData;
use bon::bon;
use log::{debug, info, warn};
use polars::prelude::DataFrame;
use reqwest::blocking::Client;
use serde_json::Value;

/// Base URL of the Meteoserver API.
pub const DEFAULT_BASE_URL: &str = "https://data.meteoserver.nl/api";
const USER_AGENT: &str = concat!("meteoserver-rs/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the Meteoserver.nl JSON API.
///
/// Create an instance with [`Meteoserver::new()`] for the public API, or with
/// [`Meteoserver::with_settings()`] to point at another base URL.
///
/// # Examples
///
/// ```no_run
/// # use meteoserver::{Meteoserver, MeteoserverError};
/// # fn main() -> Result<(), MeteoserverError> {
/// let client = Meteoserver::new()?;
/// let data = client
///     .sun_data()
///     .key("my-api-key")
///     .location("De Bilt")
///     .call()?;
/// println!("{}:\n{}", data.location, data.forecast);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Meteoserver {
    http: Client,
    base_url: String,
}

#[bon]
impl Meteoserver {
    /// Creates a client for the public Meteoserver API.
    ///
    /// # Errors
    ///
    /// Returns [`MeteoserverError::HttpClient`] if the HTTP client cannot be initialised.
    pub fn new() -> Result<Self, MeteoserverError> {
        Self::with_settings().call()
    }

    /// Creates a client with custom connection settings.
    ///
    /// # Arguments
    ///
    /// * `.base_url(&str)`: Optional. URL the endpoint paths are appended to. Defaults to
    ///   [`DEFAULT_BASE_URL`].
    /// * `.user_agent(&str)`: Optional. Value of the `User-Agent` header.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use meteoserver::{Meteoserver, MeteoserverError};
    /// # fn main() -> Result<(), MeteoserverError> {
    /// let client = Meteoserver::with_settings()
    ///     .base_url("http://localhost:8080/api")
    ///     .call()?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn with_settings(
        base_url: Option<&str>,
        user_agent: Option<&str>,
    ) -> Result<Self, MeteoserverError> {
        let http = Client::builder()
            .user_agent(user_agent.unwrap_or(USER_AGENT).to_string())
            .gzip(true)
            .build()
            .map_err(MeteoserverError::HttpClient)?;
        Ok(Self {
            http,
            base_url: base_url
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
        })
    }

    /// Downloads the "Zon Actueel" data for a location.
    ///
    /// # Arguments
    ///
    /// * `.key(&str)`: **Required.** Your Meteoserver API key.
    /// * `.location(&str)`: **Required.** Name of a place in the Netherlands, e.g. `"De Bilt"`.
    ///
    /// # Errors
    ///
    /// Returns [`MeteoserverError::NetworkRequest`] or [`MeteoserverError::HttpStatus`] if the
    /// download fails, [`MeteoserverError::JsonParse`] if the body is not JSON, and
    /// [`MeteoserverError::Extract`] if the document cannot be turned into tables.
    #[builder]
    pub fn sun_data(&self, key: &str, location: &str) -> Result<SunData, MeteoserverError> {
        let document = self.get_document(Dataset::Sun, key, location)?;
        Ok(extract_sun_data(document)?)
    }

    /// Downloads the hourly weather forecast for a location.
    ///
    /// The columns of the returned table keep the JSON types of the response, see
    /// [`crate::extract_hourly_forecast`].
    ///
    /// # Arguments
    ///
    /// * `.key(&str)`: **Required.** Your Meteoserver API key.
    /// * `.location(&str)`: **Required.** Name of a place in the Netherlands.
    #[builder]
    pub fn hourly_forecast(
        &self,
        key: &str,
        location: &str,
    ) -> Result<DataFrame, MeteoserverError> {
        let document = self.get_document(Dataset::HourlyForecast, key, location)?;
        Ok(extract_hourly_forecast(document)?)
    }

    /// GETs the endpoint of `dataset` and decodes the body as JSON.
    fn get_document(
        &self,
        dataset: Dataset,
        key: &str,
        location: &str,
    ) -> Result<Value, MeteoserverError> {
        let url = format!("{}/{}", self.base_url, dataset.endpoint());
        // Never put the key in logs or errors.
        let shown_url = format!("{}?locatie={}&key=***", url, location);
        info!("Downloading {} data for '{}' from {}", dataset, location, url);

        let response = self
            .http
            .get(&url)
            .query(&[("locatie", location), ("key", key)])
            .send()
            .map_err(|e| MeteoserverError::NetworkRequest(shown_url.clone(), e.without_url()))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", shown_url, e.status());
                let e = e.without_url();
                return Err(if let Some(status) = e.status() {
                    MeteoserverError::HttpStatus {
                        url: shown_url,
                        status,
                        source: e,
                    }
                } else {
                    MeteoserverError::NetworkRequest(shown_url, e)
                });
            }
        };

        let body = response
            .text()
            .map_err(|e| MeteoserverError::ResponseBody(shown_url.clone(), e.without_url()))?;
        debug!("Received {} bytes of {} data", body.len(), dataset);
        Ok(serde_json::from_str(&body)?)
    }
}
