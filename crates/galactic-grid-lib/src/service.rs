//! Aggregation service: fan-out, fallback, and merge across upstreams.
//!
//! Every read operation degrades rather than fails: when a primary source
//! errors the service tries the secondary, and when every source has failed
//! it serves static fallback data. The one exception is the ISS position,
//! where stale or invented coordinates would be worse than an error.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use crate::adapters::{
    iss_position_from_snapshot, iss_satellite_from_position, launch_from_launch_library,
    mission_from_launch_library, mission_from_spacex,
};
use crate::config::SpaceApiConfig;
use crate::error::{Error, Result};
use crate::fallback::{
    example_iss_pass, fallback_mission, fallback_search_results, fallback_upcoming_launches,
    well_known_satellites,
};
use crate::model::{
    IssPosition, Launch, LaunchSearch, Mission, MissionSearch, Satellite, SatelliteQuery,
    SpaceAgency,
};
use crate::sources::launch_library::LaunchLibraryClient;
use crate::sources::n2yo::N2yoClient;
use crate::sources::open_notify::OpenNotifyClient;
use crate::sources::spacex::SpacexClient;
use crate::sources::{IssApi, LaunchLibraryApi, SatelliteTrackerApi, SpacexApi};

/// Aggregates the upstream sources behind a single read surface.
///
/// Generic over the source traits so tests can substitute in-process fakes.
pub struct SpaceDataService<S, L, I, N> {
    config: SpaceApiConfig,
    spacex: S,
    launch_library: L,
    iss: I,
    tracker: N,
}

/// The service wired to the live upstream clients.
pub type GridService = SpaceDataService<SpacexClient, LaunchLibraryClient, OpenNotifyClient, N2yoClient>;

impl GridService {
    /// Build the live service from configuration.
    pub fn from_config(config: &SpaceApiConfig) -> Result<Self> {
        Ok(SpaceDataService::new(
            config.clone(),
            SpacexClient::new(config)?,
            LaunchLibraryClient::new(config)?,
            OpenNotifyClient::new(config)?,
            N2yoClient::new(config)?,
        ))
    }
}

impl<S, L, I, N> SpaceDataService<S, L, I, N>
where
    S: SpacexApi,
    L: LaunchLibraryApi,
    I: IssApi,
    N: SatelliteTrackerApi,
{
    pub fn new(config: SpaceApiConfig, spacex: S, launch_library: L, iss: I, tracker: N) -> Self {
        Self {
            config,
            spacex,
            launch_library,
            iss,
            tracker,
        }
    }

    /// Look up a single mission by id.
    ///
    /// Tries SpaceX first, then Launch Library, then serves the static
    /// fallback mission carrying the requested id. Never fails.
    pub async fn mission_details(&self, id: &str) -> Mission {
        match self.spacex.launch(id).await {
            Ok(launch) => return mission_from_spacex(&launch),
            Err(err) => {
                debug!(id, error = %err, "primary mission source failed, trying secondary");
            }
        }
        match self.launch_library.launch(id).await {
            Ok(launch) => mission_from_launch_library(&launch),
            Err(err) => {
                warn!(id, error = %err, "all mission sources failed, serving fallback");
                fallback_mission(id)
            }
        }
    }

    /// Search missions across sources.
    ///
    /// Launch Library is always queried; SpaceX only when the agency filter
    /// permits it. Results merge Launch Library first, deduplicate by id,
    /// and truncate to the effective limit. When every attempted source
    /// fails the static search fallback is served. Never fails.
    pub async fn search_missions(&self, params: &MissionSearch) -> Vec<Mission> {
        let query_spacex =
            params.agency.is_none() || params.agency == Some(SpaceAgency::SpaceX);
        let limit = params.limit() as usize;

        let (library, spacex) = if query_spacex {
            let fetch_count = params.limit().saturating_add(params.offset());
            let (library, spacex) =
                tokio::join!(self.launch_library.search(params), self.spacex.launches(fetch_count));
            (library, Some(spacex))
        } else {
            (self.launch_library.search(params).await, None)
        };

        let mut missions: Vec<Mission> = Vec::new();
        let mut any_succeeded = false;

        match library {
            Ok(launches) => {
                any_succeeded = true;
                missions.extend(launches.iter().map(mission_from_launch_library));
            }
            Err(err) => warn!(error = %err, "launch database search failed"),
        }

        if let Some(result) = spacex {
            match result {
                Ok(launches) => {
                    any_succeeded = true;
                    missions.extend(self.filter_spacex_missions(launches, params));
                }
                Err(err) => warn!(error = %err, "commercial provider search failed"),
            }
        }

        if !any_succeeded {
            warn!("all search sources failed, serving fallback results");
            return fallback_search_results();
        }

        let mut seen = HashSet::new();
        missions.retain(|m| seen.insert(m.id.clone()));
        missions.truncate(limit);
        missions
    }

    /// Apply the search filters Launch Library handles server-side to the
    /// SpaceX list, which supports none of them, then page.
    fn filter_spacex_missions(
        &self,
        launches: Vec<crate::sources::spacex::SpacexLaunch>,
        params: &MissionSearch,
    ) -> Vec<Mission> {
        let query = params.query.as_ref().map(|q| q.to_lowercase());
        launches
            .iter()
            .map(mission_from_spacex)
            .filter(|m| params.status.is_none_or(|wanted| m.status == wanted))
            .filter(|m| {
                query.as_ref().is_none_or(|q| {
                    m.name.to_lowercase().contains(q)
                        || m.description
                            .as_ref()
                            .is_some_and(|d| d.to_lowercase().contains(q))
                })
            })
            .filter(|m| date_within(m.launch_date.as_deref(), &params.start_date, &params.end_date))
            .skip(params.offset() as usize)
            .take(params.limit() as usize)
            .collect()
    }

    /// List launches scheduled within the next `days()` days.
    ///
    /// Serves the static schedule fallback when the launch database is
    /// unreachable. Never fails.
    pub async fn upcoming_launches(&self, params: &LaunchSearch) -> Vec<Launch> {
        let window_start = Utc::now();
        let window_end = window_start + Duration::days(i64::from(params.days()));

        match self
            .launch_library
            .upcoming(window_start, window_end, params)
            .await
        {
            Ok(launches) => {
                let mut events: Vec<Launch> =
                    launches.iter().map(launch_from_launch_library).collect();
                events.truncate(params.limit() as usize);
                events
            }
            Err(err) => {
                warn!(error = %err, "upcoming launch source failed, serving fallback schedule");
                fallback_upcoming_launches()
            }
        }
    }

    /// Current ISS position.
    ///
    /// Unlike every other operation this surfaces failure: a canned
    /// position would be actively misleading for a moving target.
    pub async fn iss_position(&self, include_passes: bool) -> Result<IssPosition> {
        let snapshot = self.iss.current_position().await.map_err(|err| Error::IssUnavailable {
            reason: err.to_string(),
        })?;
        let mut position =
            iss_position_from_snapshot(&snapshot).map_err(|err| Error::IssUnavailable {
                reason: err.to_string(),
            })?;
        if include_passes {
            position.next_passes = Some(vec![example_iss_pass()]);
        }
        Ok(position)
    }

    /// Satellite position lookup.
    ///
    /// The ISS routes through the dedicated position source; other ids go
    /// to the tracker when an API key is configured. Anything that cannot
    /// be resolved live degrades to the well-known catalog. Never fails.
    pub async fn satellite_data(&self, query: &SatelliteQuery) -> Vec<Satellite> {
        let limit = query.limit() as usize;

        if let Some(id) = query.satellite_id.as_deref() {
            if id.eq_ignore_ascii_case("iss") || id == "25544" {
                match self.iss_position(false).await {
                    Ok(position) => return vec![iss_satellite_from_position(&position)],
                    Err(err) => {
                        warn!(error = %err, "live position unavailable for the station, serving catalog");
                        return truncated_catalog(limit);
                    }
                }
            }

            if self.config.n2yo_api_key.is_some() {
                match self.tracker.positions(id).await {
                    Ok(data) => {
                        if let Some(satellite) = crate::adapters::satellite_from_n2yo(id, &data) {
                            return vec![satellite];
                        }
                        debug!(id, "tracker returned no position records");
                    }
                    Err(err) => warn!(id, error = %err, "tracker lookup failed"),
                }
            } else {
                debug!(id, "no tracker API key configured, serving catalog");
            }
        }

        truncated_catalog(limit)
    }
}

fn truncated_catalog(limit: usize) -> Vec<Satellite> {
    let mut catalog = well_known_satellites();
    catalog.truncate(limit);
    catalog
}

/// Date-range check over ISO-8601 strings. Missions with missing or
/// unparsable dates are retained rather than silently dropped.
fn date_within(date: Option<&str>, start: &Option<String>, end: &Option<String>) -> bool {
    let Some(date) = date.and_then(parse_iso) else {
        return true;
    };
    if let Some(start) = start.as_deref().and_then(parse_iso) {
        if date < start {
            return false;
        }
    }
    if let Some(end) = end.as_deref().and_then(parse_iso) {
        if date > end {
            return false;
        }
    }
    true
}

fn parse_iso(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}
