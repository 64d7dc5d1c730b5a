//! Source adapters: pure mappings from upstream payloads to domain values.
//!
//! Adapters never perform I/O. Every optional upstream field is absent-safe
//! and falls back through the documented chain, terminating in a literal
//! `"Unknown"` where the domain requires a value; null/absent never leaks
//! into the domain layer. Unrecognized agency and status strings normalize
//! to the `Other`/`Upcoming`/`Scheduled` sentinels instead of failing.

use crate::error::{Error, Result};
use crate::model::{
    IssPosition, Launch, LaunchStatus, Mission, MissionStatus, Satellite, SpaceAgency, Visibility,
    WeatherConditions,
};
use crate::sources::launch_library::LaunchLibraryLaunch;
use crate::sources::n2yo::N2yoPositions;
use crate::sources::open_notify::IssSnapshot;
use crate::sources::spacex::SpacexLaunch;

/// Mean ISS orbital altitude; the snapshot endpoint does not supply it.
pub const ISS_ALTITUDE_KM: f64 = 408.0;
/// Mean ISS orbital velocity.
pub const ISS_VELOCITY_KMH: f64 = 27_600.0;
/// Mean ISS orbital period.
pub const ISS_ORBITAL_PERIOD_MINUTES: f64 = 93.0;
/// NORAD catalog number of the ISS.
pub const ISS_NORAD_ID: u32 = 25_544;

/// Ordered (pattern, agency) pairs for agency canonicization. First match
/// wins; matching is case-insensitive substring.
const AGENCY_PATTERNS: &[(&str, SpaceAgency)] = &[
    ("spacex", SpaceAgency::SpaceX),
    ("space exploration technologies", SpaceAgency::SpaceX),
    ("nasa", SpaceAgency::Nasa),
    ("national aeronautics", SpaceAgency::Nasa),
    ("esa", SpaceAgency::Esa),
    ("european space agency", SpaceAgency::Esa),
    ("isro", SpaceAgency::Isro),
    ("indian space research", SpaceAgency::Isro),
    ("cnsa", SpaceAgency::Cnsa),
    ("china national space", SpaceAgency::Cnsa),
    ("roscosmos", SpaceAgency::Roscosmos),
    ("jaxa", SpaceAgency::Jaxa),
    ("japan aerospace", SpaceAgency::Jaxa),
    ("blue origin", SpaceAgency::BlueOrigin),
    ("virgin galactic", SpaceAgency::VirginGalactic),
];

/// Canonicalize a free-text agency name. Unmatched input is `Other`.
pub fn normalize_agency(raw: Option<&str>) -> SpaceAgency {
    let Some(raw) = raw else {
        return SpaceAgency::Other;
    };
    let lowered = raw.to_lowercase();
    AGENCY_PATTERNS
        .iter()
        .find(|(pattern, _)| lowered.contains(pattern))
        .map(|(_, agency)| *agency)
        .unwrap_or(SpaceAgency::Other)
}

/// Map a Launch Library status name onto the mission lifecycle. Unmapped
/// values default to `Upcoming`; that is the contract, not an error.
pub fn mission_status_from_name(status: &str) -> MissionStatus {
    match status {
        "Go for Launch" => MissionStatus::Upcoming,
        "TBD" => MissionStatus::Upcoming,
        "Success" => MissionStatus::Success,
        "Failure" => MissionStatus::Failure,
        "Partial Failure" => MissionStatus::PartialFailure,
        "In Flight" => MissionStatus::InFlight,
        _ => MissionStatus::Upcoming,
    }
}

/// Map the same status names onto the launch-event state machine.
/// Unmapped values default to `Scheduled`.
pub fn launch_status_from_name(status: &str) -> LaunchStatus {
    match status {
        "Go for Launch" => LaunchStatus::Go,
        "TBD" => LaunchStatus::Scheduled,
        "To Be Determined" => LaunchStatus::Scheduled,
        "Success" => LaunchStatus::Launched,
        "Failure" => LaunchStatus::Failed,
        "Partial Failure" => LaunchStatus::Failed,
        "In Flight" => LaunchStatus::Launched,
        "Hold" => LaunchStatus::Hold,
        "Scrubbed" => LaunchStatus::Scrubbed,
        _ => LaunchStatus::Scheduled,
    }
}

/// Map a SpaceX launch document to a Mission.
///
/// The success flag drives the status: absent means the launch has not
/// happened yet.
pub fn mission_from_spacex(launch: &SpacexLaunch) -> Mission {
    let status = match launch.success {
        None => MissionStatus::Upcoming,
        Some(true) => MissionStatus::Success,
        Some(false) => MissionStatus::Failure,
    };

    let payload_names: Vec<&str> = launch
        .payloads
        .iter()
        .filter_map(|p| p.name.as_deref())
        .filter(|n| !n.is_empty())
        .collect();
    let payload = if payload_names.is_empty() {
        "Unknown".to_string()
    } else {
        payload_names.join(", ")
    };

    Mission {
        id: launch.id.clone(),
        name: launch.name.clone(),
        description: Some(
            launch
                .details
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "SpaceX mission".to_string()),
        ),
        agency: SpaceAgency::SpaceX,
        status,
        launch_date: launch.date_utc.clone(),
        mission_type: Some(
            launch
                .payloads
                .first()
                .and_then(|p| p.payload_type.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
        ),
        destination: None,
        rocket: Some(
            launch
                .rocket
                .as_ref()
                .and_then(|r| r.name.clone())
                .unwrap_or_else(|| "Falcon 9".to_string()),
        ),
        payload: Some(payload),
        cost: None,
        crew_size: None,
        success_rate: None,
        live_stream_url: launch.links.as_ref().and_then(|l| l.webcast.clone()),
        details_url: None,
    }
}

/// Map a Launch Library launch document to a Mission.
pub fn mission_from_launch_library(launch: &LaunchLibraryLaunch) -> Mission {
    let mission = launch.mission.as_ref();
    let status_name = launch
        .status
        .as_ref()
        .and_then(|s| s.name.as_deref())
        .unwrap_or("TBD");

    Mission {
        id: launch.id.to_string(),
        name: launch.name.clone(),
        description: Some(
            mission
                .and_then(|m| m.description.clone())
                .unwrap_or_else(|| launch.name.clone()),
        ),
        agency: normalize_agency(
            launch
                .launch_service_provider
                .as_ref()
                .and_then(|p| p.name.as_deref()),
        ),
        status: mission_status_from_name(status_name),
        launch_date: Some(launch.net.clone()),
        mission_type: Some(
            mission
                .and_then(|m| m.mission_type.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
        ),
        destination: None,
        rocket: Some(
            launch
                .rocket
                .as_ref()
                .and_then(|r| r.configuration.as_ref())
                .and_then(|c| c.name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
        ),
        payload: Some(
            mission
                .and_then(|m| m.name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
        ),
        cost: None,
        crew_size: None,
        success_rate: None,
        live_stream_url: launch.vid_urls.first().and_then(|v| v.url.clone()),
        details_url: None,
    }
}

/// Map a Launch Library launch document to a Launch event.
pub fn launch_from_launch_library(launch: &LaunchLibraryLaunch) -> Launch {
    let status_name = launch
        .status
        .as_ref()
        .and_then(|s| s.name.as_deref())
        .unwrap_or("TBD");

    let launch_site = launch
        .pad
        .as_ref()
        .and_then(|pad| {
            pad.name
                .clone()
                .or_else(|| pad.location.as_ref().and_then(|loc| loc.name.clone()))
        })
        .unwrap_or_else(|| "Unknown".to_string());

    Launch {
        id: launch.id.to_string(),
        mission_id: launch
            .mission
            .as_ref()
            .and_then(|m| m.id.as_ref())
            .map(|id| id.to_string())
            .unwrap_or_else(|| launch.id.to_string()),
        name: launch.name.clone(),
        agency: normalize_agency(
            launch
                .launch_service_provider
                .as_ref()
                .and_then(|p| p.name.as_deref()),
        ),
        rocket: launch
            .rocket
            .as_ref()
            .and_then(|r| r.configuration.as_ref())
            .and_then(|c| c.full_name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        launch_date: launch.net.clone(),
        launch_time_utc: launch.net.clone(),
        launch_site,
        status: launch_status_from_name(status_name),
        countdown_seconds: None,
        live_stream_url: launch.vid_urls.first().and_then(|v| v.url.clone()),
        weather_conditions: launch.weather_summary.clone().map(|condition| {
            // The summary endpoint has no numeric breakdown.
            WeatherConditions {
                condition,
                temperature: 0.0,
                wind_speed: 0.0,
                precipitation: 0.0,
            }
        }),
    }
}

/// Map an Open Notify snapshot to an IssPosition, filling in the fixed
/// orbital constants the snapshot endpoint does not supply.
pub fn iss_position_from_snapshot(snapshot: &IssSnapshot) -> Result<IssPosition> {
    let latitude: f64 = snapshot
        .iss_position
        .latitude
        .parse()
        .map_err(|_| Error::UpstreamPayload {
            source_name: "open-notify",
            reason: format!("unparsable latitude {:?}", snapshot.iss_position.latitude),
        })?;
    let longitude: f64 = snapshot
        .iss_position
        .longitude
        .parse()
        .map_err(|_| Error::UpstreamPayload {
            source_name: "open-notify",
            reason: format!("unparsable longitude {:?}", snapshot.iss_position.longitude),
        })?;

    Ok(IssPosition {
        timestamp: snapshot.timestamp,
        latitude,
        longitude,
        altitude_km: ISS_ALTITUDE_KM,
        velocity_kmh: ISS_VELOCITY_KMH,
        orbital_period_minutes: ISS_ORBITAL_PERIOD_MINUTES,
        next_passes: None,
    })
}

/// Map an N2YO position response to a Satellite. Returns `None` when no
/// position records were supplied.
pub fn satellite_from_n2yo(satellite_id: &str, data: &N2yoPositions) -> Option<Satellite> {
    let first = data.positions.first()?;
    Some(Satellite {
        id: satellite_id.to_string(),
        name: data
            .info
            .as_ref()
            .and_then(|i| i.satname.clone())
            .unwrap_or_else(|| format!("Satellite {}", satellite_id)),
        norad_id: satellite_id.parse().unwrap_or(0),
        latitude: first.satlatitude,
        longitude: first.satlongitude,
        altitude_km: first.sataltitude,
        // N2YO does not report velocity directly.
        velocity_kmh: 0.0,
        visibility: if first.elevation.unwrap_or(0.0) > 0.0 {
            Visibility::Visible
        } else {
            Visibility::Eclipsed
        },
        country: "Unknown".to_string(),
        launch_date: None,
    })
}

/// Build the ISS satellite record from a live position.
pub fn iss_satellite_from_position(position: &IssPosition) -> Satellite {
    Satellite {
        id: "iss".to_string(),
        name: "International Space Station".to_string(),
        norad_id: ISS_NORAD_ID,
        latitude: position.latitude,
        longitude: position.longitude,
        altitude_km: position.altitude_km,
        velocity_kmh: position.velocity_kmh,
        visibility: Visibility::Visible,
        country: "International".to_string(),
        launch_date: None,
    }
}
