//! Domain model for the space-data aggregation layer.
//!
//! These are the value objects every upstream source normalizes into. They
//! are created fresh per request from upstream responses and never mutated
//! in place. The `agency` and `status` enums are closed sets: adapters map
//! unrecognized upstream values to the `Other`/`Upcoming` sentinels instead
//! of failing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical operating agencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
pub enum SpaceAgency {
    SpaceX,
    #[serde(rename = "NASA")]
    Nasa,
    #[serde(rename = "ESA")]
    Esa,
    #[serde(rename = "ISRO")]
    Isro,
    #[serde(rename = "CNSA")]
    Cnsa,
    Roscosmos,
    #[serde(rename = "JAXA")]
    Jaxa,
    #[serde(rename = "Blue Origin")]
    BlueOrigin,
    #[serde(rename = "Virgin Galactic")]
    VirginGalactic,
    Other,
}

impl SpaceAgency {
    /// Wire spelling of the agency, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpaceAgency::SpaceX => "SpaceX",
            SpaceAgency::Nasa => "NASA",
            SpaceAgency::Esa => "ESA",
            SpaceAgency::Isro => "ISRO",
            SpaceAgency::Cnsa => "CNSA",
            SpaceAgency::Roscosmos => "Roscosmos",
            SpaceAgency::Jaxa => "JAXA",
            SpaceAgency::BlueOrigin => "Blue Origin",
            SpaceAgency::VirginGalactic => "Virgin Galactic",
            SpaceAgency::Other => "Other",
        }
    }
}

impl fmt::Display for SpaceAgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum MissionStatus {
    Upcoming,
    InFlight,
    Success,
    Failure,
    PartialFailure,
    Cancelled,
}

impl MissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionStatus::Upcoming => "upcoming",
            MissionStatus::InFlight => "in_flight",
            MissionStatus::Success => "success",
            MissionStatus::Failure => "failure",
            MissionStatus::PartialFailure => "partial_failure",
            MissionStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a single launch event, distinct from the mission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum LaunchStatus {
    Scheduled,
    Go,
    Hold,
    Scrubbed,
    Launched,
    Failed,
}

impl fmt::Display for LaunchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LaunchStatus::Scheduled => "scheduled",
            LaunchStatus::Go => "go",
            LaunchStatus::Hold => "hold",
            LaunchStatus::Scrubbed => "scrubbed",
            LaunchStatus::Launched => "launched",
            LaunchStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Satellite visibility classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Eclipsed,
    Daylight,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::Eclipsed => "eclipsed",
            Visibility::Daylight => "daylight",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A space endeavor (payload + agency + rocket) independent of a specific
/// launch attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    /// Source-unique identifier.
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub agency: SpaceAgency,
    pub status: MissionStatus,
    /// ISO-8601 launch timestamp when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rocket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew_size: Option<u32>,
    /// Historical success rate in percent (0-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_stream_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_url: Option<String>,
}

/// A scheduled or completed rocket-launch event tied to one mission.
///
/// `mission_id` is a back-reference, not an ownership relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub id: String,
    pub mission_id: String,
    pub name: String,
    pub agency: SpaceAgency,
    pub rocket: String,
    pub launch_date: String,
    pub launch_time_utc: String,
    pub launch_site: String,
    pub status: LaunchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_stream_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_conditions: Option<WeatherConditions>,
}

/// Launch-site weather snapshot attached to a launch when the upstream
/// provides a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherConditions {
    pub condition: String,
    pub temperature: f64,
    pub wind_speed: f64,
    pub precipitation: f64,
}

/// Current ISS position snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssPosition {
    /// Unix timestamp (seconds) of the snapshot.
    pub timestamp: i64,
    /// Degrees, -90 to 90.
    pub latitude: f64,
    /// Degrees, -180 to 180.
    pub longitude: f64,
    pub altitude_km: f64,
    pub velocity_kmh: f64,
    pub orbital_period_minutes: f64,
    /// Ordered upcoming passes, populated only on request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_passes: Option<Vec<IssPass>>,
}

/// A single predicted ISS pass over an observer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssPass {
    pub rise_time: String,
    pub set_time: String,
    pub duration_seconds: u32,
}

/// Live position of a tracked satellite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Satellite {
    pub id: String,
    pub name: String,
    /// NORAD catalog number.
    pub norad_id: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_km: f64,
    pub velocity_kmh: f64,
    pub visibility: Visibility,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_date: Option<String>,
}

/// Filters for mission search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MissionSearch {
    /// Free-text query matched against name and description.
    pub query: Option<String>,
    pub agency: Option<SpaceAgency>,
    pub status: Option<MissionStatus>,
    /// Accepted for callers that set it, but no source applies it as a
    /// filter today.
    pub mission_type: Option<String>,
    /// ISO-8601 lower bound on launch date.
    pub start_date: Option<String>,
    /// ISO-8601 upper bound on launch date.
    pub end_date: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl MissionSearch {
    pub const DEFAULT_LIMIT: u32 = 20;
    pub const MAX_LIMIT: u32 = 100;

    /// Effective limit: defaulted and clamped to 1..=100. Out-of-range
    /// values clamp rather than reject.
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT).clamp(1, Self::MAX_LIMIT)
    }

    /// Effective offset, defaulting to 0.
    pub fn offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }
}

/// Filters for the upcoming-launch window.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LaunchSearch {
    /// Window length in days from now.
    pub days: Option<u32>,
    pub agency: Option<SpaceAgency>,
    pub rocket: Option<String>,
    pub limit: Option<u32>,
}

impl LaunchSearch {
    pub const DEFAULT_DAYS: u32 = 30;
    pub const MAX_DAYS: u32 = 365;
    pub const DEFAULT_LIMIT: u32 = 20;
    pub const MAX_LIMIT: u32 = 100;

    /// Effective window length: defaulted and clamped to 1..=365 days.
    pub fn days(&self) -> u32 {
        self.days.unwrap_or(Self::DEFAULT_DAYS).clamp(1, Self::MAX_DAYS)
    }

    /// Effective limit: defaulted and clamped to 1..=100.
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT).clamp(1, Self::MAX_LIMIT)
    }
}

/// Satellite lookup category. Accepted for schema compatibility; the
/// current sources do not filter on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum SatelliteCategory {
    #[default]
    Active,
    Inactive,
    Debris,
}

/// Parameters for satellite lookup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SatelliteQuery {
    /// Specific satellite id ("iss" or a NORAD number as string); when
    /// absent the well-known catalog is returned.
    pub satellite_id: Option<String>,
    pub category: SatelliteCategory,
    pub limit: Option<u32>,
}

impl SatelliteQuery {
    pub const DEFAULT_LIMIT: u32 = 10;
    pub const MAX_LIMIT: u32 = 50;

    /// Effective limit: defaulted and clamped to 1..=50.
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT).clamp(1, Self::MAX_LIMIT)
    }
}
