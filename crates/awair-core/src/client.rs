// ── Client facades ──
//
// `Awair` (cloud) and `AwairLocal` (local network) orchestrate the
// transport client and the response mapper: one request per operation,
// raw payloads through `convert`, typed entities out. No internal
// locking, caching, or retry -- concurrency belongs to the caller, and
// rate limits surface as errors.

use tracing::debug;
use url::Url;

use awair_api::client::BASE_URL;
use awair_api::transport::TransportConfig;
use awair_api::{AwairClient, Credentials, Error, Sampling};

use crate::config::AwairConfig;
use crate::convert;
use crate::model::{AirData, Device, LocalDevice, User};
use crate::query::AirDataQuery;

/// Entry point for the Awair cloud API.
///
/// ```no_run
/// # async fn example() -> Result<(), awair_core::Error> {
/// use awair_core::Awair;
///
/// let awair = Awair::with_token("my-access-token")?;
/// let devices = awair.devices().await?;
/// let latest = awair.air_data_latest(&devices[0], false).await?;
/// if let Some(reading) = latest {
///     println!("score: {}", reading.score);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Awair {
    api: AwairClient,
}

impl Awair {
    /// Create a cloud client from configuration.
    pub fn new(config: AwairConfig) -> Result<Self, Error> {
        let transport = TransportConfig::default().with_timeout(config.timeout);
        let http = transport.build_client()?;
        let base_url = match config.base_url {
            Some(url) => url,
            None => Url::parse(BASE_URL)?,
        };
        let api = AwairClient::with_client(http, base_url, Credentials::AccessToken(config.access_token));
        Ok(Self { api })
    }

    /// Create a cloud client with default settings and the given
    /// access token.
    pub fn with_token(access_token: impl Into<String>) -> Result<Self, Error> {
        Self::new(AwairConfig::new(access_token))
    }

    /// Wrap an existing transport client. Injection seam for tests and
    /// for callers managing their own `reqwest::Client`.
    pub fn from_api(api: AwairClient) -> Self {
        Self { api }
    }

    /// The underlying transport client.
    pub fn api(&self) -> &AwairClient {
        &self.api
    }

    /// Fetch the user the configured access token belongs to.
    pub async fn user(&self) -> Result<User, Error> {
        debug!("fetching user profile");
        self.api.user().await?.try_into()
    }

    /// List the devices owned by the authenticated user, in the order
    /// the API returns them.
    pub async fn devices(&self) -> Result<Vec<Device>, Error> {
        debug!("listing devices");
        let devices = self.api.devices().await?;
        Ok(devices.into_iter().map(Device::from).collect())
    }

    /// Fetch air data for `device` at the given sampling.
    ///
    /// Issues one request; the returned sequence preserves API order
    /// (descending from the `to` bound unless the query says
    /// otherwise).
    pub async fn air_data(
        &self,
        device: &Device,
        sampling: Sampling,
        query: &AirDataQuery,
    ) -> Result<Vec<AirData>, Error> {
        let params = query.to_params(sampling)?;
        let records = self
            .api
            .air_data(&device.device_type, device.id, sampling, &params)
            .await?;
        records.into_iter().map(AirData::try_from).collect()
    }

    /// The most recent reading for `device`, or `None` when the device
    /// has been offline for more than 10 minutes.
    ///
    /// `fahrenheit` asks the API to report temperatures in fahrenheit;
    /// the conversion happens API-side, not in this library.
    pub async fn air_data_latest(
        &self,
        device: &Device,
        fahrenheit: bool,
    ) -> Result<Option<AirData>, Error> {
        let query = AirDataQuery::new().fahrenheit(fahrenheit);
        let mut readings = self.air_data(device, Sampling::Latest, &query).await?;
        if readings.is_empty() {
            Ok(None)
        } else {
            Ok(Some(readings.remove(0)))
        }
    }

    /// Five-minute averages; up to 24 hours / 288 datapoints.
    pub async fn air_data_five_minute(
        &self,
        device: &Device,
        query: &AirDataQuery,
    ) -> Result<Vec<AirData>, Error> {
        self.air_data(device, Sampling::FiveMinute, query).await
    }

    /// Fifteen-minute averages; up to 7 days / 672 datapoints.
    pub async fn air_data_fifteen_minute(
        &self,
        device: &Device,
        query: &AirDataQuery,
    ) -> Result<Vec<AirData>, Error> {
        self.air_data(device, Sampling::FifteenMinute, query).await
    }

    /// Raw per-second readings; up to 1 hour / 360 datapoints.
    pub async fn air_data_raw(
        &self,
        device: &Device,
        query: &AirDataQuery,
    ) -> Result<Vec<AirData>, Error> {
        self.air_data(device, Sampling::Raw, query).await
    }
}

/// Entry point for devices on the local network.
///
/// Local mode needs no credentials and no cloud connectivity: each
/// configured address is queried directly, and only the latest reading
/// is available (local firmware keeps no history and reports no
/// indices).
#[derive(Debug, Clone)]
pub struct AwairLocal {
    api: AwairClient,
    device_addrs: Vec<String>,
}

impl AwairLocal {
    /// Create a local-network client for the given device addresses
    /// (hostname or IP, with optional port).
    pub fn new(device_addrs: Vec<String>) -> Result<Self, Error> {
        let http = TransportConfig::default().build_client()?;
        // The base URL is unused in local mode; endpoint URLs are built
        // per address.
        let base_url = Url::parse(BASE_URL)?;
        let api = AwairClient::with_client(http, base_url, Credentials::None);
        Ok(Self { api, device_addrs })
    }

    /// Wrap an existing transport client.
    pub fn from_api(api: AwairClient, device_addrs: Vec<String>) -> Self {
        Self { api, device_addrs }
    }

    /// Query each configured address for its device metadata.
    pub async fn devices(&self) -> Result<Vec<LocalDevice>, Error> {
        let mut devices = Vec::with_capacity(self.device_addrs.len());
        for addr in &self.device_addrs {
            debug!(addr, "querying local device config");
            let config = self.api.local_config(addr).await?;
            devices.push(convert::local_device(addr, config)?);
        }
        Ok(devices)
    }

    /// The latest reading from a local device.
    pub async fn air_data_latest(&self, device: &LocalDevice) -> Result<Option<AirData>, Error> {
        debug!(addr = device.address.as_str(), "fetching local air data");
        let raw = self.api.local_air_data(&device.address).await?;
        Ok(Some(convert::local_air_data(raw)?))
    }
}
