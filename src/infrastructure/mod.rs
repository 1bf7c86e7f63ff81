//! # Infrastructure Layer
//!
//! Adapters to the outside world and process-level setup.
//!
//! - [`catalog`]: upstream catalog clients
//! - [`config`]: layered service configuration
//! - [`telemetry`]: tracing subscriber setup

pub mod catalog;
pub mod config;
pub mod telemetry;
