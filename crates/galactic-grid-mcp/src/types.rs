//! Tool input types with JSON Schema generation.
//!
//! Field names match the published tool contract (`missionId`,
//! `satelliteId`, snake_case elsewhere), so renames are applied here at the
//! boundary rather than leaking into the domain types.

use schemars::JsonSchema;
use serde::Deserialize;

use galactic_grid_lib::{
    LaunchSearch, MissionSearch, MissionStatus, SatelliteCategory, SatelliteQuery, SpaceAgency,
};

/// Input for the getMissionDetails tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetMissionDetailsParams {
    /// The unique identifier of the mission
    #[serde(rename = "missionId")]
    pub mission_id: String,
}

/// Input for the searchMissions tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SearchMissionsParams {
    /// Free-text query matched against mission name and description
    pub query: Option<String>,
    pub agency: Option<SpaceAgency>,
    pub status: Option<MissionStatus>,
    pub mission_type: Option<String>,
    /// ISO-8601 lower bound on launch date
    pub start_date: Option<String>,
    /// ISO-8601 upper bound on launch date
    pub end_date: Option<String>,
    /// Maximum results (default 20, clamped to 1-100)
    pub limit: Option<u32>,
    /// Results to skip for paging (default 0)
    pub offset: Option<u32>,
}

impl From<SearchMissionsParams> for MissionSearch {
    fn from(params: SearchMissionsParams) -> Self {
        MissionSearch {
            query: params.query,
            agency: params.agency,
            status: params.status,
            mission_type: params.mission_type,
            start_date: params.start_date,
            end_date: params.end_date,
            limit: params.limit,
            offset: params.offset,
        }
    }
}

/// Input for the getUpcomingLaunches tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetUpcomingLaunchesParams {
    /// Window length in days from now (default 30, clamped to 1-365)
    pub days: Option<u32>,
    pub agency: Option<SpaceAgency>,
    /// Rocket configuration name filter
    pub rocket: Option<String>,
    /// Maximum results (default 20, clamped to 1-100)
    pub limit: Option<u32>,
}

impl From<GetUpcomingLaunchesParams> for LaunchSearch {
    fn from(params: GetUpcomingLaunchesParams) -> Self {
        LaunchSearch {
            days: params.days,
            agency: params.agency,
            rocket: params.rocket,
            limit: params.limit,
        }
    }
}

/// Input for the getISSPosition tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetIssPositionParams {
    /// Include next ISS passes over Earth
    #[serde(default)]
    pub include_passes: bool,
}

/// Input for the getSatelliteData tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetSatelliteDataParams {
    /// Specific satellite ID, if not provided returns multiple satellites
    #[serde(rename = "satelliteId")]
    pub satellite_id: Option<String>,
    /// Satellite category to filter by
    #[serde(default)]
    pub category: SatelliteCategory,
    /// Maximum number of satellites to return (default 10, clamped to 1-50)
    pub limit: Option<u32>,
}

impl From<GetSatelliteDataParams> for SatelliteQuery {
    fn from(params: GetSatelliteDataParams) -> Self {
        SatelliteQuery {
            satellite_id: params.satellite_id,
            category: params.category,
            limit: params.limit,
        }
    }
}
