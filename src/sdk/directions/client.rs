use reqwest::blocking::Client;

use super::error::DirectionsError;
use super::model::{decode_directions, DirectionsResult};
use super::url::build_directions_url;
use crate::sdk::config::DirectionsConfig;

/// Blocking client for the directions service.
pub struct DirectionsClient {
    client: Client,
    base_url: String,
}

impl DirectionsClient {
    pub fn new(config: DirectionsConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url,
        }
    }

    /// Fetches directions between two free-form addresses.
    ///
    /// One GET, one decode, no retries. The body is decoded regardless of
    /// the HTTP status code: the service reports logical failure through the
    /// `status` field of the JSON document, not the status line. Dropping
    /// the response after the decode releases the connection either way.
    pub fn get_directions(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DirectionsResult, DirectionsError> {
        let url = build_directions_url(&self.base_url, origin, destination)?;
        log::debug!("[CLIENT] Requesting directions: {}", url);

        let response = self.client.get(url.clone()).send()?;

        let directions = decode_directions(response).map_err(|e| {
            log::error!("Failed to parse DirectionsResult. URL: {}\nError: {}", url, e);
            e
        })?;
        Ok(directions)
    }
}
