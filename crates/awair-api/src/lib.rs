// awair-api: Async Rust client for the Awair REST API (cloud + local network)

pub mod auth;
pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use auth::Credentials;
pub use client::AwairClient;
pub use error::Error;
pub use types::Sampling;
