//! Typed object model and client facades for the Awair air-quality API.
//!
//! `awair-core` turns the raw payloads from [`awair_api`] into
//! immutable domain entities with a normalized sensor vocabulary, and
//! wraps them behind two facades: [`Awair`] for the cloud API and
//! [`AwairLocal`] for devices on the local network.

pub mod client;
pub mod config;
pub mod convert;
pub mod model;
pub mod query;

// ── Primary re-exports ──────────────────────────────────────────────
pub use awair_api as api;
pub use awair_api::{Credentials, Error, Sampling};

pub use client::{Awair, AwairLocal};
pub use config::AwairConfig;
pub use model::{AirData, Device, Indices, LocalDevice, Sensors, User};
pub use query::AirDataQuery;
