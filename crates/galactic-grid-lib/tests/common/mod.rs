//! Shared in-process fakes for the upstream source traits.
//!
//! Each fake serves a canned payload or a canned upstream failure and
//! counts its calls, so tests can assert both the merged output and which
//! sources the service actually consulted.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde_json::json;

use galactic_grid_lib::error::{Error, Result};
use galactic_grid_lib::model::{LaunchSearch, MissionSearch};
use galactic_grid_lib::sources::launch_library::LaunchLibraryLaunch;
use galactic_grid_lib::sources::n2yo::N2yoPositions;
use galactic_grid_lib::sources::open_notify::IssSnapshot;
use galactic_grid_lib::sources::spacex::SpacexLaunch;
use galactic_grid_lib::sources::{IssApi, LaunchLibraryApi, SatelliteTrackerApi, SpacexApi};

fn unavailable(source_name: &'static str) -> Error {
    Error::UpstreamStatus {
        source_name,
        status: 503,
    }
}

/// Build a SpaceX launch payload from sparse JSON, as the wire would.
#[allow(dead_code)]
pub fn spacex_launch(value: serde_json::Value) -> SpacexLaunch {
    serde_json::from_value(value).expect("valid spacex launch payload")
}

/// Build a Launch Library launch payload from sparse JSON.
#[allow(dead_code)]
pub fn library_launch(value: serde_json::Value) -> LaunchLibraryLaunch {
    serde_json::from_value(value).expect("valid launch library payload")
}

/// Minimal well-formed Launch Library payload.
#[allow(dead_code)]
pub fn library_launch_named(id: u32, name: &str) -> LaunchLibraryLaunch {
    library_launch(json!({
        "id": id,
        "name": name,
        "net": "2024-06-01T12:00:00Z",
    }))
}

#[derive(Default)]
pub struct FakeSpacex {
    pub launch_response: Option<SpacexLaunch>,
    pub launches_response: Option<Vec<SpacexLaunch>>,
    pub launch_calls: Arc<AtomicUsize>,
    pub launches_calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl FakeSpacex {
    /// A fake whose every endpoint fails with an upstream 503.
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn with_launch(launch: SpacexLaunch) -> Self {
        Self {
            launch_response: Some(launch),
            ..Self::default()
        }
    }

    pub fn with_launches(launches: Vec<SpacexLaunch>) -> Self {
        Self {
            launches_response: Some(launches),
            ..Self::default()
        }
    }

    pub fn launch_calls(&self) -> usize {
        self.launch_calls.load(Ordering::SeqCst)
    }

    pub fn launches_calls(&self) -> usize {
        self.launches_calls.load(Ordering::SeqCst)
    }
}

impl SpacexApi for FakeSpacex {
    async fn launch(&self, _id: &str) -> Result<SpacexLaunch> {
        self.launch_calls.fetch_add(1, Ordering::SeqCst);
        self.launch_response
            .clone()
            .ok_or_else(|| unavailable("spacex"))
    }

    async fn launches(&self, _limit: u32) -> Result<Vec<SpacexLaunch>> {
        self.launches_calls.fetch_add(1, Ordering::SeqCst);
        self.launches_response
            .clone()
            .ok_or_else(|| unavailable("spacex"))
    }
}

#[derive(Default)]
pub struct FakeLaunchLibrary {
    pub launch_response: Option<LaunchLibraryLaunch>,
    pub search_response: Option<Vec<LaunchLibraryLaunch>>,
    pub upcoming_response: Option<Vec<LaunchLibraryLaunch>>,
    pub launch_calls: Arc<AtomicUsize>,
    pub search_calls: Arc<AtomicUsize>,
    pub upcoming_calls: Arc<AtomicUsize>,
    /// Windows passed to `upcoming`, for asserting the requested span.
    pub upcoming_windows: Arc<Mutex<Vec<(DateTime<Utc>, DateTime<Utc>)>>>,
}

#[allow(dead_code)]
impl FakeLaunchLibrary {
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn with_launch(launch: LaunchLibraryLaunch) -> Self {
        Self {
            launch_response: Some(launch),
            ..Self::default()
        }
    }

    pub fn with_search(results: Vec<LaunchLibraryLaunch>) -> Self {
        Self {
            search_response: Some(results),
            ..Self::default()
        }
    }

    pub fn with_upcoming(results: Vec<LaunchLibraryLaunch>) -> Self {
        Self {
            upcoming_response: Some(results),
            ..Self::default()
        }
    }

    pub fn launch_calls(&self) -> usize {
        self.launch_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn upcoming_calls(&self) -> usize {
        self.upcoming_calls.load(Ordering::SeqCst)
    }
}

impl LaunchLibraryApi for FakeLaunchLibrary {
    async fn launch(&self, _id: &str) -> Result<LaunchLibraryLaunch> {
        self.launch_calls.fetch_add(1, Ordering::SeqCst);
        self.launch_response
            .clone()
            .ok_or_else(|| unavailable("launch-library"))
    }

    async fn search(&self, _params: &MissionSearch) -> Result<Vec<LaunchLibraryLaunch>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.search_response
            .clone()
            .ok_or_else(|| unavailable("launch-library"))
    }

    async fn upcoming(
        &self,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
        _params: &LaunchSearch,
    ) -> Result<Vec<LaunchLibraryLaunch>> {
        self.upcoming_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut windows) = self.upcoming_windows.lock() {
            windows.push((window_start, window_end));
        }
        self.upcoming_response
            .clone()
            .ok_or_else(|| unavailable("launch-library"))
    }
}

#[derive(Default)]
pub struct FakeIss {
    pub response: Option<IssSnapshot>,
    pub calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl FakeIss {
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: IssSnapshot) -> Self {
        Self {
            response: Some(snapshot),
            calls: Arc::default(),
        }
    }

    pub fn at(latitude: &str, longitude: &str) -> Self {
        Self::with_snapshot(
            serde_json::from_value(json!({
                "timestamp": 1_708_000_000,
                "iss_position": {"latitude": latitude, "longitude": longitude},
            }))
            .expect("valid snapshot payload"),
        )
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IssApi for FakeIss {
    async fn current_position(&self) -> Result<IssSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .clone()
            .ok_or_else(|| unavailable("open-notify"))
    }
}

#[derive(Default)]
pub struct FakeTracker {
    pub response: Option<N2yoPositions>,
    pub calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl FakeTracker {
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn with_positions(positions: N2yoPositions) -> Self {
        Self {
            response: Some(positions),
            calls: Arc::default(),
        }
    }

    pub fn tracking(satname: &str, latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self::with_positions(
            serde_json::from_value(json!({
                "info": {"satname": satname},
                "positions": [{
                    "satlatitude": latitude,
                    "satlongitude": longitude,
                    "sataltitude": altitude,
                    "elevation": 10.0,
                }],
            }))
            .expect("valid tracker payload"),
        )
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SatelliteTrackerApi for FakeTracker {
    async fn positions(&self, _satellite_id: &str) -> Result<N2yoPositions> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone().ok_or_else(|| unavailable("n2yo"))
    }
}
