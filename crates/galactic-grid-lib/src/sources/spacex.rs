//! SpaceX v4 API payload shapes and client.
//!
//! The payload model follows the subset of the v4 launch document the
//! aggregation layer consumes. Only `id` and `name` are guaranteed by the
//! contract; everything else is optional and must be treated as absent-safe.

use serde::Deserialize;

use crate::config::SpaceApiConfig;
use crate::error::{Error, Result};
use crate::sources::{http_client, SpacexApi};

const SOURCE: &str = "spacex";

/// A SpaceX v4 launch document (subset).
#[derive(Debug, Clone, Deserialize)]
pub struct SpacexLaunch {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub date_utc: Option<String>,
    /// `None` means the launch has not happened yet.
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub payloads: Vec<SpacexPayload>,
    #[serde(default)]
    pub rocket: Option<SpacexRocket>,
    #[serde(default)]
    pub links: Option<SpacexLinks>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpacexPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub payload_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpacexRocket {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpacexLinks {
    #[serde(default)]
    pub webcast: Option<String>,
}

/// Live client for the SpaceX v4 REST API.
pub struct SpacexClient {
    http: reqwest::Client,
    base_url: String,
}

impl SpacexClient {
    pub fn new(config: &SpaceApiConfig) -> Result<Self> {
        Ok(Self {
            http: http_client(config.http_timeout)?,
            base_url: config.spacex_api_url.clone(),
        })
    }
}

impl SpacexApi for SpacexClient {
    async fn launch(&self, id: &str) -> Result<SpacexLaunch> {
        let url = format!("{}/launches/{}", self.base_url, id);
        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(Error::UpstreamStatus {
                source_name: SOURCE,
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.json().await?)
    }

    async fn launches(&self, limit: u32) -> Result<Vec<SpacexLaunch>> {
        let url = format!("{}/launches", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("limit", limit.to_string())])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Error::UpstreamStatus {
                source_name: SOURCE,
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.json().await?)
    }
}
