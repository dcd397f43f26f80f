// ── API-to-domain type conversions ──
//
// Bridges raw `awair_api` response types into the `awair_core::model`
// domain types. Each conversion normalizes sensor names to the
// canonical vocabulary, parses strings into strong types, and maps
// absent optional fields to `None`. Structurally required fields are
// enforced by the response types themselves; the semantic checks here
// (calendar dates, timestamps, uuid shape) fail with a validation
// error naming the offending field.

use chrono::{DateTime, NaiveDate, Utc};

use awair_api::Error;
use awair_api::types::{
    AirDataRecord, DeviceResponse, LocalAirDataResponse, LocalConfigResponse, UserResponse,
};

use crate::model::{AirData, Device, Indices, LocalDevice, Sensors, User};

// ── Helpers ────────────────────────────────────────────────────────

/// Parse the vendor's ISO 8601 timestamps (`2020-04-10T15:38:24.111Z`).
fn parse_timestamp(raw: &str, context: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::Validation {
            context: context.to_owned(),
            message: format!("timestamp `{raw}`: {e}"),
        })
}

/// Assemble a date of birth from the split `dobYear`/`dobMonth`/`dobDay`
/// fields. Any of the three missing means the profile has none.
fn assemble_dob(
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
) -> Result<Option<NaiveDate>, Error> {
    match (year, month, day) {
        (Some(y), Some(m), Some(d)) => {
            NaiveDate::from_ymd_opt(y, m, d)
                .map(Some)
                .ok_or_else(|| Error::Validation {
                    context: "user".to_owned(),
                    message: format!(
                        "dobYear/dobMonth/dobDay {y}-{m}-{d} is not a valid calendar date"
                    ),
                })
        }
        _ => Ok(None),
    }
}

// ── User ───────────────────────────────────────────────────────────

impl TryFrom<UserResponse> for User {
    type Error = Error;

    fn try_from(raw: UserResponse) -> Result<Self, Error> {
        let dob = assemble_dob(raw.dob_year, raw.dob_month, raw.dob_day)?;

        Ok(User {
            id: raw.id,
            email: raw.email,
            first_name: raw.first_name,
            last_name: raw.last_name,
            sex: raw.sex,
            dob,
            tier: raw.tier,
            usages: raw.usages.into_iter().map(|u| (u.scope, u.usage)).collect(),
            permissions: raw
                .permissions
                .into_iter()
                .map(|p| (p.scope, p.quota))
                .collect(),
        })
    }
}

// ── Device ─────────────────────────────────────────────────────────

impl From<DeviceResponse> for Device {
    fn from(raw: DeviceResponse) -> Self {
        Device {
            id: raw.device_id,
            uuid: raw.device_uuid,
            device_type: raw.device_type,
            mac_address: raw.mac_address,
            name: raw.name,
            latitude: raw.latitude,
            longitude: raw.longitude,
            location_name: raw.location_name,
            preference: raw.preference,
            room_type: raw.room_type,
            space_type: raw.space_type,
            timezone: raw.timezone,
        }
    }
}

/// Build a [`LocalDevice`] from the local config payload.
///
/// The local firmware identifies itself only through `device_uuid`
/// (`<type>_<id>`); type and numeric id are recovered by splitting at
/// the first underscore, matching the cloud device shape.
pub(crate) fn local_device(address: &str, raw: LocalConfigResponse) -> Result<LocalDevice, Error> {
    let (device_type, id_str) =
        raw.device_uuid
            .split_once('_')
            .ok_or_else(|| Error::Validation {
                context: "local device config".to_owned(),
                message: format!(
                    "device_uuid `{}` is not of the form `<type>_<id>`",
                    raw.device_uuid
                ),
            })?;
    let device_type = device_type.to_owned();
    let id = id_str.parse::<i64>().map_err(|_| Error::Validation {
        context: "local device config".to_owned(),
        message: format!("device_uuid `{}` has a non-numeric id", raw.device_uuid),
    })?;

    Ok(LocalDevice {
        device: Device {
            id,
            uuid: raw.device_uuid,
            device_type,
            mac_address: raw.wifi_mac,
            name: None,
            latitude: None,
            longitude: None,
            location_name: None,
            preference: None,
            room_type: None,
            space_type: None,
            timezone: raw.timezone,
        },
        address: address.to_owned(),
        firmware_version: raw.fw_version,
    })
}

// ── Air data ───────────────────────────────────────────────────────

impl TryFrom<AirDataRecord> for AirData {
    type Error = Error;

    fn try_from(raw: AirDataRecord) -> Result<Self, Error> {
        let timestamp = parse_timestamp(&raw.timestamp, "air data")?;
        let sensors =
            Sensors::from_vendor_pairs(raw.sensors.into_iter().map(|r| (r.comp, r.value)));
        let indices =
            Indices::from_vendor_pairs(raw.indices.into_iter().map(|r| (r.comp, r.value)));

        Ok(AirData {
            timestamp,
            score: raw.score,
            sensors,
            indices,
        })
    }
}

/// Reshape the flat local reading into an [`AirData`].
///
/// Locally, every sensor is a top-level numeric field next to
/// `timestamp` and `score`; non-numeric fields are config metadata,
/// not readings. Local firmware reports no indices.
pub(crate) fn local_air_data(raw: LocalAirDataResponse) -> Result<AirData, Error> {
    let timestamp = parse_timestamp(&raw.timestamp, "local air data")?;
    let sensors = Sensors::from_vendor_pairs(
        raw.readings
            .into_iter()
            .filter_map(|(comp, value)| value.as_f64().map(|v| (comp, v))),
    );

    Ok(AirData {
        timestamp,
        score: raw.score,
        sensors,
        indices: Indices::default(),
    })
}
