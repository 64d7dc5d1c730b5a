//! Open Notify ISS snapshot payload shape and client.
//!
//! The snapshot endpoint only supplies a timestamp and string-encoded
//! coordinates; orbital constants are filled in by the adapter.

use serde::Deserialize;

use crate::config::SpaceApiConfig;
use crate::error::{Error, Result};
use crate::sources::{http_client, IssApi};

const SOURCE: &str = "open-notify";

/// The `iss-now` response document.
#[derive(Debug, Clone, Deserialize)]
pub struct IssSnapshot {
    /// Unix timestamp (seconds).
    pub timestamp: i64,
    pub iss_position: IssCoordinates,
}

/// Coordinates arrive as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct IssCoordinates {
    pub latitude: String,
    pub longitude: String,
}

/// Live client for the Open Notify API.
pub struct OpenNotifyClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenNotifyClient {
    pub fn new(config: &SpaceApiConfig) -> Result<Self> {
        Ok(Self {
            http: http_client(config.http_timeout)?,
            base_url: config.iss_api_url.clone(),
        })
    }
}

impl IssApi for OpenNotifyClient {
    async fn current_position(&self) -> Result<IssSnapshot> {
        let url = format!("{}/iss-now.json", self.base_url);
        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(Error::UpstreamStatus {
                source_name: SOURCE,
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.json().await?)
    }
}
