//! N2YO satellite-tracking payload shapes and client.
//!
//! N2YO requires an API key; the aggregation service only routes here when
//! one is configured.

use serde::Deserialize;

use crate::config::SpaceApiConfig;
use crate::error::{Error, Result};
use crate::sources::{http_client, SatelliteTrackerApi};

const SOURCE: &str = "n2yo";

/// Response from the `positions` endpoint (subset).
#[derive(Debug, Clone, Deserialize)]
pub struct N2yoPositions {
    #[serde(default)]
    pub info: Option<N2yoInfo>,
    #[serde(default)]
    pub positions: Vec<N2yoPosition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct N2yoInfo {
    #[serde(default)]
    pub satname: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct N2yoPosition {
    pub satlatitude: f64,
    pub satlongitude: f64,
    pub sataltitude: f64,
    #[serde(default)]
    pub elevation: Option<f64>,
}

/// Live client for the N2YO REST API.
pub struct N2yoClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl N2yoClient {
    pub fn new(config: &SpaceApiConfig) -> Result<Self> {
        Ok(Self {
            http: http_client(config.http_timeout)?,
            base_url: config.n2yo_api_url.clone(),
            api_key: config.n2yo_api_key.clone(),
        })
    }
}

impl SatelliteTrackerApi for N2yoClient {
    async fn positions(&self, satellite_id: &str) -> Result<N2yoPositions> {
        // One position record relative to a ground observer at the origin.
        let url = format!("{}/positions/{}/0/0/0/1/", self.base_url, satellite_id);
        let mut req = self.http.get(&url);
        if let Some(key) = &self.api_key {
            req = req.query(&[("apiKey", key)]);
        }
        let resp = req.send().await?;
        if !resp.status().is_success() {
            return Err(Error::UpstreamStatus {
                source_name: SOURCE,
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.json().await?)
    }
}
