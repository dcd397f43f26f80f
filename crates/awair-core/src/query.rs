// Per-call query options for air-data requests.
//
// Options are validated client-side against the sampling's caps before
// a request is issued, so quota-burning calls that the API would
// reject never leave the process. Only explicitly-set options are
// serialized onto the query string.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

use awair_api::{Error, Sampling};

/// Options for [`Awair::air_data`](crate::Awair::air_data).
///
/// All options are optional; the builder methods set them.
///
/// ```
/// use awair_core::AirDataQuery;
///
/// let query = AirDataQuery::new().limit(10).fahrenheit(true);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AirDataQuery {
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
    limit: Option<u32>,
    desc: Option<bool>,
    fahrenheit: Option<bool>,
}

impl AirDataQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower bound for the earliest datapoint. Defaults to the widest
    /// window the sampling allows, ending at the current time.
    pub fn from_date(mut self, from: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self
    }

    /// Upper bound for the most recent datapoint. Defaults to the
    /// current time.
    pub fn to_date(mut self, to: DateTime<Utc>) -> Self {
        self.to = Some(to);
        self
    }

    /// Maximum number of datapoints to return. Capped per sampling
    /// (288 five-minute, 672 fifteen-minute, 360 raw).
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// `true` (the API default) orders datapoints descending from the
    /// `to` bound; `false` orders them ascending from it.
    pub fn descending(mut self, desc: bool) -> Self {
        self.desc = Some(desc);
        self
    }

    /// Ask the API to report temperatures in fahrenheit instead of
    /// celsius. Pass-through display flag; any conversion happens
    /// API-side.
    pub fn fahrenheit(mut self, fahrenheit: bool) -> Self {
        self.fahrenheit = Some(fahrenheit);
        self
    }

    /// Validate against `sampling`'s caps and serialize the set
    /// options as query parameters.
    pub(crate) fn to_params(&self, sampling: Sampling) -> Result<Vec<(String, String)>, Error> {
        let now = Utc::now();
        self.validate(sampling, now)?;

        let mut params = Vec::new();
        if let Some(fahrenheit) = self.fahrenheit {
            params.push(("fahrenheit".to_owned(), fahrenheit.to_string()));
        }
        if let Some(desc) = self.desc {
            params.push(("desc".to_owned(), desc.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_owned(), limit.to_string()));
        }
        if let Some(from) = self.from {
            params.push(("from".to_owned(), format_timestamp(from)));
        }
        if let Some(to) = self.to {
            params.push(("to".to_owned(), format_timestamp(to)));
        }
        Ok(params)
    }

    fn validate(&self, sampling: Sampling, now: DateTime<Utc>) -> Result<(), Error> {
        if let Some(limit) = self.limit {
            // `latest` returns a single datapoint, so its cap is 1.
            let cap = sampling.max_limit().unwrap_or(1);
            if limit < 1 || limit > cap {
                return Err(invalid_options(format!(
                    "limit must be between 1 and {cap} for {} queries",
                    sampling.as_path()
                )));
            }
        }

        let window_cap = sampling.max_window().unwrap_or_else(|| Duration::hours(24));
        let from = self.from.unwrap_or(now - window_cap);
        let to = self.to.unwrap_or(now);

        if from > now || to > now {
            return Err(invalid_options("dates cannot be in the future".to_owned()));
        }
        if from > to {
            return Err(invalid_options(
                "'from' cannot be greater than 'to'".to_owned(),
            ));
        }
        if to - from > window_cap {
            return Err(invalid_options(format!(
                "difference between 'from' and 'to' must be at most {} hours",
                window_cap.num_hours()
            )));
        }

        Ok(())
    }
}

fn invalid_options(message: String) -> Error {
    Error::InvalidOptions { message }
}

/// Timestamps go on the wire in the API's own format,
/// millisecond-precision UTC with a `Z` suffix.
fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
