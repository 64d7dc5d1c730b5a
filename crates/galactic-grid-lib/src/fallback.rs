//! Static fallback data served when every live source has failed.
//!
//! Fallback records are generated fresh per call so their launch dates stay
//! in the near future relative to the caller's clock.

use chrono::{Duration, SecondsFormat, Utc};

use crate::adapters::ISS_NORAD_ID;
use crate::model::{
    IssPass, Launch, LaunchStatus, Mission, MissionStatus, Satellite, SpaceAgency, Visibility,
};

fn days_from_now(days: i64) -> String {
    (Utc::now() + Duration::days(days)).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Canned mission returned when a mission lookup exhausts all sources.
/// Carries the caller's id so the response still correlates with the request.
pub fn fallback_mission(id: &str) -> Mission {
    Mission {
        id: id.to_string(),
        name: "SpaceX Falcon 9 Mission".to_string(),
        description: Some("Commercial satellite deployment mission".to_string()),
        agency: SpaceAgency::SpaceX,
        status: MissionStatus::Upcoming,
        launch_date: Some(days_from_now(7)),
        mission_type: Some("Commercial".to_string()),
        destination: None,
        rocket: Some("Falcon 9 Block 5".to_string()),
        payload: Some("Commercial Satellites".to_string()),
        cost: None,
        crew_size: None,
        success_rate: None,
        live_stream_url: None,
        details_url: None,
    }
}

/// Canned two-item result set for mission search degradation.
pub fn fallback_search_results() -> Vec<Mission> {
    vec![
        Mission {
            id: "fallback-spacex-1".to_string(),
            name: "Falcon 9 Commercial Mission".to_string(),
            description: Some("Commercial satellite deployment".to_string()),
            agency: SpaceAgency::SpaceX,
            status: MissionStatus::Upcoming,
            launch_date: Some(days_from_now(3)),
            mission_type: Some("Commercial".to_string()),
            destination: None,
            rocket: Some("Falcon 9 Block 5".to_string()),
            payload: Some("Commercial Satellites".to_string()),
            cost: None,
            crew_size: None,
            success_rate: None,
            live_stream_url: None,
            details_url: None,
        },
        Mission {
            id: "fallback-nasa-1".to_string(),
            name: "NASA Science Mission".to_string(),
            description: Some("Scientific research mission".to_string()),
            agency: SpaceAgency::Nasa,
            status: MissionStatus::Upcoming,
            launch_date: Some(days_from_now(14)),
            mission_type: Some("Science".to_string()),
            destination: None,
            rocket: Some("Atlas V".to_string()),
            payload: Some("Science Payload".to_string()),
            cost: None,
            crew_size: None,
            success_rate: None,
            live_stream_url: None,
            details_url: None,
        },
    ]
}

/// Canned single-item upcoming-launch schedule.
pub fn fallback_upcoming_launches() -> Vec<Launch> {
    let date = days_from_now(7);
    vec![Launch {
        id: "fallback-1".to_string(),
        mission_id: "unknown".to_string(),
        name: "Upcoming Falcon 9 Mission".to_string(),
        agency: SpaceAgency::SpaceX,
        rocket: "Falcon 9 Block 5".to_string(),
        launch_date: date.clone(),
        launch_time_utc: date,
        launch_site: "Kennedy Space Center".to_string(),
        status: LaunchStatus::Scheduled,
        countdown_seconds: None,
        live_stream_url: None,
        weather_conditions: None,
    }]
}

/// Well-known satellite catalog used when live tracking is unavailable.
pub fn well_known_satellites() -> Vec<Satellite> {
    vec![
        Satellite {
            id: "iss".to_string(),
            name: "International Space Station".to_string(),
            norad_id: ISS_NORAD_ID,
            latitude: 0.0,
            longitude: 0.0,
            altitude_km: 408.0,
            velocity_kmh: 27_600.0,
            visibility: Visibility::Visible,
            country: "International".to_string(),
            launch_date: None,
        },
        Satellite {
            id: "hubble".to_string(),
            name: "Hubble Space Telescope".to_string(),
            norad_id: 20_580,
            latitude: 0.0,
            longitude: 0.0,
            altitude_km: 547.0,
            velocity_kmh: 27_400.0,
            visibility: Visibility::Visible,
            country: "USA".to_string(),
            launch_date: None,
        },
        Satellite {
            id: "starlink-1007".to_string(),
            name: "Starlink-1007".to_string(),
            norad_id: 44_713,
            latitude: 0.0,
            longitude: 0.0,
            altitude_km: 550.0,
            velocity_kmh: 27_000.0,
            visibility: Visibility::Visible,
            country: "USA".to_string(),
            launch_date: None,
        },
    ]
}

/// Illustrative pass entry attached when pass predictions are requested.
/// Real pass prediction needs an observer location, which the position
/// surface does not take.
pub fn example_iss_pass() -> IssPass {
    IssPass {
        rise_time: "2024-02-15T20:30:00Z".to_string(),
        set_time: "2024-02-15T20:36:00Z".to_string(),
        duration_seconds: 360,
    }
}
