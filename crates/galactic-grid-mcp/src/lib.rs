//! MCP (Model Context Protocol) server for Galactic Grid space data.
//!
//! A stdio-based MCP server exposing aggregated space data to AI
//! assistants: mission lookup and search, upcoming launches, live ISS
//! position, and satellite tracking, plus a read-only resource with the
//! raw ISS position.
//!
//! The server communicates via JSON-RPC 2.0 over stdio; all logging goes
//! to stderr to keep the stdout protocol stream clean.

#![deny(warnings)]

pub mod error;
pub mod render;
pub mod server;
pub mod types;

pub use error::{Error, Result};
pub use server::{GalacticGridServer, ISS_RESOURCE_URI};
