//! Awair devices, cloud-registered and local-network.

/// Vendor device-type codes and their human-friendly model names.
const MODEL_NAMES: &[(&str, &str)] = &[
    ("awair", "Awair"),
    ("awair-element", "Awair Element"),
    ("awair-glow", "Awair Glow"),
    ("awair-glow-c", "Awair Glow C"),
    ("awair-mint", "Awair Mint"),
    ("awair-omni", "Awair Omni"),
    ("awair-r2", "Awair 2nd Edition"),
];

/// A device registered to the authenticated user.
///
/// Carries the metadata needed to request the device's sensor data
/// plus location/room details from the owner's setup. Built from a
/// device-list response; never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    /// Vendor-assigned numeric id.
    pub id: i64,
    /// `<device_type>_<id>`, e.g. `"awair-r2_5709"`.
    pub uuid: String,
    /// The API code for the model, e.g. `"awair-r2"`.
    /// See [`model`](Self::model) for the display name.
    pub device_type: String,
    pub mac_address: Option<String>,
    /// The owner-assigned name.
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location_name: Option<String>,
    /// Why the owner monitors air quality here, e.g. `"GENERAL"`.
    pub preference: Option<String>,
    /// E.g. `"LIVING_ROOM"` or `"OFFICE"`.
    pub room_type: Option<String>,
    /// E.g. `"HOME"` or `"OFFICE"`.
    pub space_type: Option<String>,
    pub timezone: Option<String>,
}

impl Device {
    /// The human-friendly model name, e.g. `"Awair 2nd Edition"` for
    /// `awair-r2`. Unknown device types fall back to the raw type code.
    pub fn model(&self) -> &str {
        MODEL_NAMES
            .iter()
            .find(|(code, _)| *code == self.device_type)
            .map_or(self.device_type.as_str(), |(_, name)| name)
    }
}

/// A device reached over the local network instead of the cloud.
///
/// Built from the device's own config endpoint; only the latest
/// reading is available locally.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalDevice {
    /// The shared device metadata, reconciled to the cloud shape.
    pub device: Device,
    /// Hostname or IP the device was queried at, with optional port.
    pub address: String,
    /// Firmware version reported by the device.
    pub firmware_version: Option<String>,
}

impl LocalDevice {
    /// The human-friendly model name.
    pub fn model(&self) -> &str {
        self.device.model()
    }
}
