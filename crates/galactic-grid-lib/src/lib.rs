//! Galactic Grid library entry points.
//!
//! This crate aggregates public space-data APIs (SpaceX, Launch Library 2,
//! Open Notify, N2YO) behind one normalized domain model and a single read
//! service with per-source fallback. Higher-level consumers (the MCP
//! server) should only depend on the types exported here instead of
//! talking to upstreams directly.
//!

#![deny(warnings)]

pub mod adapters;
pub mod config;
pub mod error;
pub mod fallback;
pub mod model;
pub mod service;
pub mod sources;

pub use config::SpaceApiConfig;
pub use error::{Error, Result};
pub use model::{
    IssPass, IssPosition, Launch, LaunchSearch, LaunchStatus, Mission, MissionSearch,
    MissionStatus, Satellite, SatelliteCategory, SatelliteQuery, SpaceAgency, Visibility,
    WeatherConditions,
};
pub use service::{GridService, SpaceDataService};
