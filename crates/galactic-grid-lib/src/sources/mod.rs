//! Upstream API clients and payload shapes.
//!
//! Each upstream gets a partial payload model (every field optional unless
//! the API contract guarantees it) and a thin `reqwest` client. The clients
//! are the only place that performs I/O; the adapters in
//! [`crate::adapters`] consume already-fetched, already-parsed payloads.
//!
//! The trait seams exist so the aggregation service can be exercised with
//! in-process fakes; the live implementations are the `*Client` structs.

pub mod launch_library;
pub mod n2yo;
pub mod open_notify;
pub mod spacex;

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::model::{LaunchSearch, MissionSearch};

const USER_AGENT: &str = concat!("galactic-grid/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client used by every upstream client.
pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Commercial-launch-provider source (SpaceX v4 API).
pub trait SpacexApi {
    /// Fetch a single launch by id.
    fn launch(&self, id: &str) -> impl Future<Output = Result<spacex::SpacexLaunch>> + Send;

    /// Fetch the launch list, bounded by `limit`.
    fn launches(&self, limit: u32) -> impl Future<Output = Result<Vec<spacex::SpacexLaunch>>> + Send;
}

/// Multi-agency launch-database source (Launch Library 2 API).
pub trait LaunchLibraryApi {
    /// Fetch a single launch by id.
    fn launch(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<launch_library::LaunchLibraryLaunch>> + Send;

    /// Search launches with server-side filters.
    fn search(
        &self,
        params: &MissionSearch,
    ) -> impl Future<Output = Result<Vec<launch_library::LaunchLibraryLaunch>>> + Send;

    /// Fetch upcoming launches within `[window_start, window_end]`.
    fn upcoming(
        &self,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
        params: &LaunchSearch,
    ) -> impl Future<Output = Result<Vec<launch_library::LaunchLibraryLaunch>>> + Send;
}

/// Public ISS-position snapshot source (Open Notify).
pub trait IssApi {
    /// Fetch the current ISS position snapshot.
    fn current_position(&self) -> impl Future<Output = Result<open_notify::IssSnapshot>> + Send;
}

/// Satellite-tracking source (N2YO), gated by an API key.
pub trait SatelliteTrackerApi {
    /// Fetch the latest position records for a satellite by NORAD id.
    fn positions(
        &self,
        satellite_id: &str,
    ) -> impl Future<Output = Result<n2yo::N2yoPositions>> + Send;
}
