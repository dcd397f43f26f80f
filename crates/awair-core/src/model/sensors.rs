//! Ordered sensor and index containers with the canonical vocabulary.
//!
//! The vendor names its sensors with short internal codes (`temp`,
//! `humid`, `spl_a`, ...). Both containers normalize known codes to a
//! fixed descriptive vocabulary at construction time, so callers never
//! deal with the abbreviations; unknown codes pass through unmapped so
//! new sensor types keep working. Values are accessible by key lookup
//! or through the generated named accessors, and iteration order is
//! the order the API returned the readings in.

use std::ops::Index;

use indexmap::IndexMap;

/// Vendor-internal sensor codes and their canonical names.
const SENSOR_ALIASES: &[(&str, &str)] = &[
    ("temp", "temperature"),
    ("humid", "humidity"),
    ("co2", "carbon_dioxide"),
    ("voc", "volatile_organic_compounds"),
    ("pm25", "particulate_matter_2_5"),
    ("lux", "illuminance"),
    ("spl_a", "sound_pressure_level"),
];

/// Normalize a vendor sensor code to the canonical vocabulary.
///
/// Unknown codes (e.g. the first-gen device's aggregate `dust` sensor)
/// are returned unchanged.
pub fn canonical_sensor_name(vendor: &str) -> &str {
    SENSOR_ALIASES
        .iter()
        .find(|(code, _)| *code == vendor)
        .map_or(vendor, |(_, canonical)| canonical)
}

macro_rules! reading_map {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            readings: IndexMap<String, f64>,
        }

        impl $name {
            /// Build from `(vendor_code, value)` pairs, normalizing known
            /// codes and preserving pair order.
            pub(crate) fn from_vendor_pairs<I>(pairs: I) -> Self
            where
                I: IntoIterator<Item = (String, f64)>,
            {
                let readings = pairs
                    .into_iter()
                    .map(|(code, value)| (canonical_sensor_name(&code).to_owned(), value))
                    .collect();
                Self { readings }
            }

            /// The value for `name`, if present.
            pub fn get(&self, name: &str) -> Option<f64> {
                self.readings.get(name).copied()
            }

            /// Whether a reading named `name` is present.
            pub fn contains(&self, name: &str) -> bool {
                self.readings.contains_key(name)
            }

            /// Number of readings.
            pub fn len(&self) -> usize {
                self.readings.len()
            }

            pub fn is_empty(&self) -> bool {
                self.readings.is_empty()
            }

            /// Iterate `(name, value)` pairs in API order.
            pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
                self.readings.iter().map(|(name, value)| (name.as_str(), *value))
            }

            /// Reading names in API order.
            pub fn names(&self) -> impl Iterator<Item = &str> {
                self.readings.keys().map(String::as_str)
            }
        }

        impl Index<&str> for $name {
            type Output = f64;

            /// Keyed access; panics when the reading is absent.
            /// Use [`get`](Self::get) for a fallible lookup.
            fn index(&self, name: &str) -> &f64 {
                &self.readings[name]
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = (&'a String, &'a f64);
            type IntoIter = indexmap::map::Iter<'a, String, f64>;

            fn into_iter(self) -> Self::IntoIter {
                self.readings.iter()
            }
        }
    };
}

reading_map! {
    /// Sensor readings of one [`AirData`](crate::model::AirData) record,
    /// keyed by canonical sensor name.
    Sensors
}

reading_map! {
    /// Per-sensor index values of one air-data record.
    ///
    /// An index is the vendor's quality category for a sensor, given as
    /// a float between -4 and 4 where the absolute value is what
    /// matters: near 0 is good, near 4 is bad. Not every sensor has a
    /// corresponding index (local devices report none at all).
    Indices
}

macro_rules! canonical_accessors {
    ($container:ident: $($method:ident => $key:literal),+ $(,)?) => {
        impl $container {
            $(
                #[doc = concat!("The `", $key, "` value, if present.")]
                pub fn $method(&self) -> Option<f64> {
                    self.get($key)
                }
            )+
        }
    };
}

canonical_accessors! {
    Sensors:
    temperature => "temperature",
    humidity => "humidity",
    carbon_dioxide => "carbon_dioxide",
    volatile_organic_compounds => "volatile_organic_compounds",
    particulate_matter_2_5 => "particulate_matter_2_5",
    illuminance => "illuminance",
    sound_pressure_level => "sound_pressure_level",
}

canonical_accessors! {
    Indices:
    temperature => "temperature",
    humidity => "humidity",
    carbon_dioxide => "carbon_dioxide",
    volatile_organic_compounds => "volatile_organic_compounds",
    particulate_matter_2_5 => "particulate_matter_2_5",
    illuminance => "illuminance",
    sound_pressure_level => "sound_pressure_level",
}
