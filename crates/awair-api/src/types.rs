//! Response types for the Awair REST API.
//!
//! All types match the JSON returned by `developer-apis.awair.is/v1`
//! endpoints (camelCase fields) or by a device's local-network firmware
//! (snake_case fields). Optional vendor fields use `#[serde(default)]`
//! and every entity carries a `#[serde(flatten)]` catch-all so new
//! vendor fields never break deserialization.

use std::collections::HashMap;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Sampling ─────────────────────────────────────────────────────────

/// Which air-data endpoint to query.
///
/// Each historical sampling has a hard cap on how many datapoints a
/// single request may return and on how wide the `from`..`to` window
/// may be; both come from the vendor's published quota tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sampling {
    /// The most recent reading. Empty if the device has been offline
    /// for more than 10 minutes.
    Latest,
    /// Five-minute averages, up to 24 hours / 288 datapoints.
    FiveMinute,
    /// Fifteen-minute averages, up to 7 days / 672 datapoints.
    FifteenMinute,
    /// Per-second raw readings, up to 1 hour / 360 datapoints.
    Raw,
}

impl Sampling {
    /// The URL path segment for this sampling.
    pub fn as_path(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::FiveMinute => "5-min-avg",
            Self::FifteenMinute => "15-min-avg",
            Self::Raw => "raw",
        }
    }

    /// Maximum number of datapoints a single request may return.
    pub fn max_limit(self) -> Option<u32> {
        match self {
            Self::Latest => None,
            Self::FiveMinute => Some(288),
            Self::FifteenMinute => Some(672),
            Self::Raw => Some(360),
        }
    }

    /// Widest allowed `from`..`to` window.
    pub fn max_window(self) -> Option<Duration> {
        match self {
            Self::Latest => None,
            Self::FiveMinute => Some(Duration::hours(24)),
            Self::FifteenMinute => Some(Duration::hours(168)),
            Self::Raw => Some(Duration::hours(1)),
        }
    }
}

// ── User ─────────────────────────────────────────────────────────────

/// User profile — from `GET /v1/users/self`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// The API documents the user id as a string.
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub dob_day: Option<u32>,
    #[serde(default)]
    pub dob_month: Option<u32>,
    #[serde(default)]
    pub dob_year: Option<i32>,
    /// Account tier, e.g. `"Large_developer"`.
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub usages: Vec<ScopeUsage>,
    #[serde(default)]
    pub permissions: Vec<ScopeQuota>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// How often an API scope has been called in the current usage window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeUsage {
    pub scope: String,
    pub usage: u64,
}

/// How often an API scope may be called per usage window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeQuota {
    pub scope: String,
    pub quota: u64,
}

// ── Devices ──────────────────────────────────────────────────────────

/// Envelope for `GET /v1/users/self/devices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceListResponse {
    #[serde(default)]
    pub devices: Vec<DeviceResponse>,
}

/// One owned device from the device list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResponse {
    pub device_id: i64,
    /// Takes the form `<deviceType>_<deviceId>`, e.g. `"awair-r2_5709"`.
    #[serde(rename = "deviceUUID")]
    pub device_uuid: String,
    pub device_type: String,
    #[serde(default)]
    pub mac_address: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub preference: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub space_type: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

// ── Air data ─────────────────────────────────────────────────────────

/// Envelope for `GET .../air-data/{sampling}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirDataListResponse {
    #[serde(default)]
    pub data: Vec<AirDataRecord>,
}

/// A single timestamped reading from the cloud API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirDataRecord {
    /// ISO 8601 date-time, e.g. `"2020-04-10T15:38:24.111Z"`.
    pub timestamp: String,
    pub score: f64,
    #[serde(default)]
    pub sensors: Vec<SensorReading>,
    #[serde(default)]
    pub indices: Vec<SensorReading>,
}

/// A `{comp, value}` pair. `comp` is the vendor-internal sensor name
/// (`temp`, `humid`, ...); normalization to the canonical vocabulary
/// happens in `awair-core`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub comp: String,
    pub value: f64,
}

// ── Local network ────────────────────────────────────────────────────

/// Device metadata — from `GET http://{addr}/settings/config/data`.
///
/// The local config endpoint uses different field names than the cloud
/// device list; `awair-core` reconciles the two shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalConfigResponse {
    pub device_uuid: String,
    #[serde(default)]
    pub wifi_mac: Option<String>,
    #[serde(default)]
    pub fw_version: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Latest reading — from `GET http://{addr}/air-data/latest`.
///
/// Local firmware returns a flat object with one field per sensor
/// instead of the cloud's `sensors` array, and no indices at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalAirDataResponse {
    /// ISO 8601 date-time.
    pub timestamp: String,
    pub score: f64,
    /// Every remaining field; numeric ones are sensor readings.
    #[serde(flatten)]
    pub readings: serde_json::Map<String, Value>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn sampling_paths() {
        assert_eq!(Sampling::Latest.as_path(), "latest");
        assert_eq!(Sampling::FiveMinute.as_path(), "5-min-avg");
        assert_eq!(Sampling::FifteenMinute.as_path(), "15-min-avg");
        assert_eq!(Sampling::Raw.as_path(), "raw");
    }

    #[test]
    fn sampling_caps_match_vendor_quotas() {
        assert_eq!(Sampling::FiveMinute.max_limit(), Some(288));
        assert_eq!(Sampling::FifteenMinute.max_limit(), Some(672));
        assert_eq!(Sampling::Raw.max_limit(), Some(360));
        assert_eq!(Sampling::Latest.max_limit(), None);

        assert_eq!(Sampling::Raw.max_window(), Some(Duration::hours(1)));
        assert_eq!(
            Sampling::FifteenMinute.max_window(),
            Some(Duration::hours(168))
        );
    }

    #[test]
    fn device_uuid_uses_vendor_casing() {
        let device: DeviceResponse = serde_json::from_value(json!({
            "deviceId": 5709,
            "deviceUUID": "awair-r2_5709",
            "deviceType": "awair-r2"
        }))
        .unwrap();
        assert_eq!(device.device_uuid, "awair-r2_5709");
        assert!(device.mac_address.is_none());
    }

    #[test]
    fn unknown_fields_land_in_extra() {
        let user: UserResponse = serde_json::from_value(json!({
            "id": "32406",
            "someNewField": true
        }))
        .unwrap();
        assert!(user.extra.contains_key("someNewField"));
    }

    #[test]
    fn local_air_data_keeps_flat_readings() {
        let reading: LocalAirDataResponse = serde_json::from_value(json!({
            "timestamp": "2020-08-31T22:07:03.831Z",
            "score": 93,
            "temp": 19.59,
            "co2": 410
        }))
        .unwrap();
        assert!((reading.score - 93.0).abs() < f64::EPSILON);
        assert_eq!(reading.readings.len(), 2);
    }
}
