//! A single timestamped air-quality reading.

use chrono::{DateTime, Utc};

use crate::model::sensors::{Indices, Sensors};

/// One air-data record: the vendor's aggregate score plus the raw
/// sensor values and their per-sensor indices, keyed by the canonical
/// vocabulary.
///
/// Values stay in vendor units; the `fahrenheit` query option is a
/// display-unit flag applied API-side, never a client transform.
#[derive(Debug, Clone, PartialEq)]
pub struct AirData {
    pub timestamp: DateTime<Utc>,
    /// The aggregate air-quality score, 0-100.
    pub score: f64,
    pub sensors: Sensors,
    pub indices: Indices,
}
