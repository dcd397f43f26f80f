// ── Domain model ──
//
// Canonical representations of Awair entities. Every type here is
// immutable once built from a response; construction happens in
// `crate::convert`, which bridges the raw `awair_api` payload shapes.

pub mod air_data;
pub mod device;
pub mod sensors;
pub mod user;

pub use air_data::AirData;
pub use device::{Device, LocalDevice};
pub use sensors::{Indices, Sensors, canonical_sensor_name};
pub use user::User;
