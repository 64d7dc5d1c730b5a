//! Launch Library 2 API payload shapes and client.
//!
//! Launch Library mixes numeric and string identifiers across endpoints,
//! so ids are modeled as an untagged union and stringified before they
//! enter the domain layer.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

use crate::config::SpaceApiConfig;
use crate::error::{Error, Result};
use crate::model::{LaunchSearch, MissionSearch};
use crate::sources::{http_client, LaunchLibraryApi};

const SOURCE: &str = "launch-library";

/// An id that may arrive as a number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LaunchLibraryId {
    Number(i64),
    Text(String),
}

impl fmt::Display for LaunchLibraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchLibraryId::Number(n) => write!(f, "{}", n),
            LaunchLibraryId::Text(s) => f.write_str(s),
        }
    }
}

/// A Launch Library launch document (subset). `id`, `name`, and `net` are
/// guaranteed by the contract.
#[derive(Debug, Clone, Deserialize)]
pub struct LaunchLibraryLaunch {
    pub id: LaunchLibraryId,
    pub name: String,
    /// ISO launch timestamp ("no earlier than").
    pub net: String,
    #[serde(default)]
    pub status: Option<LaunchLibraryStatus>,
    #[serde(default)]
    pub mission: Option<LaunchLibraryMission>,
    #[serde(default)]
    pub rocket: Option<LaunchLibraryRocket>,
    #[serde(default)]
    pub pad: Option<LaunchLibraryPad>,
    #[serde(default)]
    pub launch_service_provider: Option<LaunchLibraryProvider>,
    #[serde(default, rename = "vidURLs")]
    pub vid_urls: Vec<LaunchLibraryVidUrl>,
    #[serde(default)]
    pub weather_summary: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LaunchLibraryStatus {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LaunchLibraryMission {
    #[serde(default)]
    pub id: Option<LaunchLibraryId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub mission_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LaunchLibraryRocket {
    #[serde(default)]
    pub configuration: Option<LaunchLibraryRocketConfiguration>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LaunchLibraryRocketConfiguration {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LaunchLibraryPad {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<LaunchLibraryPadLocation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LaunchLibraryPadLocation {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LaunchLibraryProvider {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LaunchLibraryVidUrl {
    #[serde(default)]
    pub url: Option<String>,
}

/// The list envelope wrapping search results.
#[derive(Debug, Clone, Deserialize)]
pub struct LaunchLibraryList {
    #[serde(default)]
    pub results: Vec<LaunchLibraryLaunch>,
}

/// Live client for the Launch Library 2 REST API.
pub struct LaunchLibraryClient {
    http: reqwest::Client,
    base_url: String,
}

impl LaunchLibraryClient {
    pub fn new(config: &SpaceApiConfig) -> Result<Self> {
        Ok(Self {
            http: http_client(config.http_timeout)?,
            base_url: config.launch_library_api_url.clone(),
        })
    }

    async fn fetch_list(&self, url: String, query: Vec<(&'static str, String)>) -> Result<Vec<LaunchLibraryLaunch>> {
        let resp = self.http.get(&url).query(&query).send().await?;
        if !resp.status().is_success() {
            return Err(Error::UpstreamStatus {
                source_name: SOURCE,
                status: resp.status().as_u16(),
            });
        }
        let list: LaunchLibraryList = resp.json().await?;
        Ok(list.results)
    }
}

impl LaunchLibraryApi for LaunchLibraryClient {
    async fn launch(&self, id: &str) -> Result<LaunchLibraryLaunch> {
        let url = format!("{}/launch/{}/", self.base_url, id);
        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(Error::UpstreamStatus {
                source_name: SOURCE,
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.json().await?)
    }

    async fn search(&self, params: &MissionSearch) -> Result<Vec<LaunchLibraryLaunch>> {
        let mut query = vec![
            ("limit", params.limit().to_string()),
            ("offset", params.offset().to_string()),
        ];
        if let Some(start) = &params.start_date {
            query.push(("net__gte", start.clone()));
        }
        if let Some(end) = &params.end_date {
            query.push(("net__lte", end.clone()));
        }
        if let Some(agency) = params.agency {
            query.push(("launch_service_provider__name", agency.as_str().to_string()));
        }
        if let Some(text) = &params.query {
            query.push(("search", text.clone()));
        }
        self.fetch_list(format!("{}/launch/", self.base_url), query).await
    }

    async fn upcoming(
        &self,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
        params: &LaunchSearch,
    ) -> Result<Vec<LaunchLibraryLaunch>> {
        let mut query = vec![
            ("limit", params.limit().to_string()),
            (
                "net__gte",
                window_start.to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
            (
                "net__lte",
                window_end.to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
        ];
        if let Some(agency) = params.agency {
            query.push(("launch_service_provider__name", agency.as_str().to_string()));
        }
        if let Some(rocket) = &params.rocket {
            query.push(("rocket__configuration__name", rocket.clone()));
        }
        self.fetch_list(format!("{}/launch/upcoming/", self.base_url), query)
            .await
    }
}
