//! Markdown rendering for tool responses.
//!
//! Tool output is human-readable markdown rather than raw JSON; assistants
//! relay it verbatim. Timestamps render in UTC since the server has no
//! notion of the caller's locale.

use chrono::{DateTime, Duration, Utc};

use galactic_grid_lib::{IssPosition, Launch, Mission, Satellite};

fn parse_utc(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

fn format_timestamp(value: &str) -> String {
    match parse_utc(value) {
        Some(date) => date.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => value.to_string(),
    }
}

/// Mission details card.
pub fn mission(mission: &Mission) -> String {
    let mut text = format!(
        "# 🚀 Mission: {}\n\n\
         **Agency:** {}\n\
         **Status:** {}\n\
         **Launch Date:** {}\n\
         **Rocket:** {}\n\
         **Destination:** {}\n\n\
         **Description:** {}\n",
        mission.name,
        mission.agency,
        mission.status,
        mission.launch_date.as_deref().unwrap_or("TBD"),
        mission.rocket.as_deref().unwrap_or("Unknown"),
        mission.destination.as_deref().unwrap_or("Earth Orbit"),
        mission
            .description
            .as_deref()
            .unwrap_or("No description available"),
    );
    if let Some(url) = &mission.live_stream_url {
        text.push_str(&format!("\n🔴 [Live Stream]({})\n", url));
    }
    text
}

/// Mission search result list.
pub fn missions(missions: &[Mission]) -> String {
    if missions.is_empty() {
        return "🔍 No missions matched the search.".to_string();
    }
    let entries: Vec<String> = missions
        .iter()
        .map(|m| {
            format!(
                "🚀 **{}** ({})\n   Status: {}\n   Launch: {}\n   Rocket: {}",
                m.name,
                m.agency,
                m.status,
                m.launch_date.as_deref().unwrap_or("TBD"),
                m.rocket.as_deref().unwrap_or("Unknown"),
            )
        })
        .collect();
    format!(
        "# 🔍 Mission Search Results ({} found):\n\n{}",
        missions.len(),
        entries.join("\n\n")
    )
}

/// Live ISS position card, with predicted passes when present.
pub fn iss_position(position: &IssPosition) -> String {
    let updated = DateTime::<Utc>::from_timestamp(position.timestamp, 0)
        .map(|d| d.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| position.timestamp.to_string());

    let mut text = format!(
        "# 🛰️ International Space Station - Live Position\n\n\
         **Location:** {:.4}°N, {:.4}°E\n\
         **Altitude:** {:.1} km\n\
         **Speed:** {:.0} km/h\n\
         **Orbital Period:** {:.1} minutes\n\
         **Last Updated:** {}",
        position.latitude,
        position.longitude,
        position.altitude_km,
        position.velocity_kmh,
        position.orbital_period_minutes,
        updated,
    );

    if let Some(passes) = position.next_passes.as_ref().filter(|p| !p.is_empty()) {
        text.push_str("\n\n**Next Passes:**\n");
        let lines: Vec<String> = passes
            .iter()
            .map(|pass| {
                format!(
                    "🛰️ {} - {} ({} min)",
                    format_timestamp(&pass.rise_time),
                    format_timestamp(&pass.set_time),
                    pass.duration_seconds.div_ceil(60),
                )
            })
            .collect();
        text.push_str(&lines.join("\n"));
    }
    text
}

/// Upcoming launch schedule with countdowns.
pub fn upcoming_launches(launches: &[Launch], days: u32) -> String {
    if launches.is_empty() {
        return format!("🗓️ No upcoming launches found in the next {} days.", days);
    }

    let now = Utc::now();
    let entries: Vec<String> = launches
        .iter()
        .map(|launch| {
            let countdown = match parse_utc(&launch.launch_date) {
                Some(date) => {
                    let days_until = days_until(now, date);
                    if days_until > 0 {
                        format!("{} days to go", days_until)
                    } else {
                        "Launching soon!".to_string()
                    }
                }
                None => "Launching soon!".to_string(),
            };
            let mut entry = format!(
                "🚀 **{}** ({})\n   Rocket: {}\n   Launch: {}\n   Site: {}\n   ⏰ {}",
                launch.name,
                launch.agency,
                launch.rocket,
                format_timestamp(&launch.launch_date),
                launch.launch_site,
                countdown,
            );
            if let Some(url) = &launch.live_stream_url {
                entry.push_str(&format!("\n   🔴 [Live Stream]({})", url));
            }
            entry
        })
        .collect();

    format!(
        "# 🗓️ Upcoming Launches (Next {} days):\n\n{}",
        days,
        entries.join("\n\n")
    )
}

/// Satellite tracking summary.
pub fn satellites(satellites: &[Satellite]) -> String {
    if satellites.is_empty() {
        return "🛰️ No satellite data available.".to_string();
    }
    let entries: Vec<String> = satellites
        .iter()
        .map(|sat| {
            format!(
                "🛰️ **{}** (NORAD {})\n   Location: {:.4}°, {:.4}°\n   Altitude: {:.1} km\n   Velocity: {:.0} km/h\n   Visibility: {}\n   Country: {}",
                sat.name,
                sat.norad_id,
                sat.latitude,
                sat.longitude,
                sat.altitude_km,
                sat.velocity_kmh,
                sat.visibility,
                sat.country,
            )
        })
        .collect();
    format!("# 🛰️ Satellite Tracking Data\n\n{}", entries.join("\n\n"))
}

fn days_until(now: DateTime<Utc>, date: DateTime<Utc>) -> i64 {
    let delta = date - now;
    if delta <= Duration::zero() {
        return 0;
    }
    // Ceiling: a launch 36 hours out reads as 2 days.
    let whole_days = delta.num_days();
    if delta > Duration::days(whole_days) {
        whole_days + 1
    } else {
        whole_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galactic_grid_lib::{
        IssPass, LaunchStatus, MissionStatus, SpaceAgency, Visibility,
    };

    fn sample_mission() -> Mission {
        Mission {
            id: "m-1".to_string(),
            name: "Crew-9".to_string(),
            description: None,
            agency: SpaceAgency::SpaceX,
            status: MissionStatus::Upcoming,
            launch_date: None,
            mission_type: None,
            destination: None,
            rocket: None,
            payload: None,
            cost: None,
            crew_size: None,
            success_rate: None,
            live_stream_url: None,
            details_url: None,
        }
    }

    #[test]
    fn mission_card_fills_placeholder_literals() {
        let text = mission(&sample_mission());
        assert!(text.starts_with("# 🚀 Mission: Crew-9"));
        assert!(text.contains("**Launch Date:** TBD"));
        assert!(text.contains("**Rocket:** Unknown"));
        assert!(text.contains("**Destination:** Earth Orbit"));
        assert!(text.contains("**Description:** No description available"));
        assert!(!text.contains("Live Stream"));
    }

    #[test]
    fn mission_card_links_the_stream_when_present() {
        let mut m = sample_mission();
        m.live_stream_url = Some("https://youtu.be/live".to_string());
        let text = mission(&m);
        assert!(text.contains("🔴 [Live Stream](https://youtu.be/live)"));
    }

    #[test]
    fn iss_card_formats_coordinates_and_passes() {
        let position = IssPosition {
            timestamp: 1_708_000_000,
            latitude: -47.36221,
            longitude: 151.72312,
            altitude_km: 408.0,
            velocity_kmh: 27_600.0,
            orbital_period_minutes: 93.0,
            next_passes: Some(vec![IssPass {
                rise_time: "2024-02-15T20:30:00Z".to_string(),
                set_time: "2024-02-15T20:36:00Z".to_string(),
                duration_seconds: 360,
            }]),
        };
        let text = iss_position(&position);
        assert!(text.contains("**Location:** -47.3622°N, 151.7231°E"));
        assert!(text.contains("**Speed:** 27600 km/h"));
        assert!(text.contains("**Next Passes:**"));
        assert!(text.contains("(6 min)"));
    }

    #[test]
    fn iss_card_omits_passes_when_absent() {
        let position = IssPosition {
            timestamp: 0,
            latitude: 0.0,
            longitude: 0.0,
            altitude_km: 408.0,
            velocity_kmh: 27_600.0,
            orbital_period_minutes: 93.0,
            next_passes: None,
        };
        assert!(!iss_position(&position).contains("Next Passes"));
    }

    #[test]
    fn empty_schedule_names_the_window() {
        let text = upcoming_launches(&[], 14);
        assert_eq!(text, "🗓️ No upcoming launches found in the next 14 days.");
    }

    #[test]
    fn schedule_counts_down_future_launches() {
        let date = (Utc::now() + Duration::days(7)).to_rfc3339();
        let launch = Launch {
            id: "1".to_string(),
            mission_id: "1".to_string(),
            name: "Falcon 9 | Crew-9".to_string(),
            agency: SpaceAgency::SpaceX,
            rocket: "Falcon 9 Block 5".to_string(),
            launch_date: date.clone(),
            launch_time_utc: date,
            launch_site: "Kennedy Space Center".to_string(),
            status: LaunchStatus::Go,
            countdown_seconds: None,
            live_stream_url: Some("https://nasa.gov/live".to_string()),
            weather_conditions: None,
        };
        let text = upcoming_launches(&[launch], 30);
        assert!(text.starts_with("# 🗓️ Upcoming Launches (Next 30 days):"));
        assert!(text.contains("days to go"));
        assert!(text.contains("🔴 [Live Stream](https://nasa.gov/live)"));
    }

    #[test]
    fn past_or_unparsable_dates_read_launching_soon() {
        let mut launch = Launch {
            id: "1".to_string(),
            mission_id: "1".to_string(),
            name: "Imminent".to_string(),
            agency: SpaceAgency::Other,
            rocket: "Unknown".to_string(),
            launch_date: "2020-01-01T00:00:00Z".to_string(),
            launch_time_utc: "2020-01-01T00:00:00Z".to_string(),
            launch_site: "Unknown".to_string(),
            status: LaunchStatus::Scheduled,
            countdown_seconds: None,
            live_stream_url: None,
            weather_conditions: None,
        };
        assert!(upcoming_launches(std::slice::from_ref(&launch), 30).contains("Launching soon!"));

        launch.launch_date = "not-a-date".to_string();
        assert!(upcoming_launches(&[launch], 30).contains("Launching soon!"));
    }

    #[test]
    fn satellite_summary_lists_norad_and_visibility() {
        let sat = Satellite {
            id: "hubble".to_string(),
            name: "Hubble Space Telescope".to_string(),
            norad_id: 20_580,
            latitude: 12.5,
            longitude: -40.1,
            altitude_km: 547.0,
            velocity_kmh: 27_400.0,
            visibility: Visibility::Visible,
            country: "USA".to_string(),
            launch_date: None,
        };
        let text = satellites(&[sat]);
        assert!(text.contains("**Hubble Space Telescope** (NORAD 20580)"));
        assert!(text.contains("Visibility: visible"));
    }

    #[test]
    fn empty_satellite_list_has_a_plain_message() {
        assert_eq!(satellites(&[]), "🛰️ No satellite data available.");
    }
}
