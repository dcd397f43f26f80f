// HTTP client for the Awair REST API.
//
// Issues bearer-authenticated GETs against the cloud API and plain
// GETs against local-network devices. Non-2xx statuses and vendor
// error payloads are mapped here; response bodies are decoded into
// the typed shapes from `types`, with schema failures surfaced as
// validation errors naming the offending field.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::auth::Credentials;
use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{
    AirDataListResponse, AirDataRecord, DeviceListResponse, DeviceResponse, LocalAirDataResponse,
    LocalConfigResponse, Sampling, UserResponse,
};

/// Production endpoint for the Awair cloud API.
pub const BASE_URL: &str = "https://developer-apis.awair.is/v1/";

/// Async client for the Awair REST API.
///
/// One instance serves both the cloud endpoints (authenticated with the
/// configured [`Credentials`]) and the unauthenticated local-network
/// endpoints. The client holds no mutable state; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct AwairClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
}

impl AwairClient {
    /// Create a client against the production cloud endpoint.
    pub fn new(credentials: Credentials, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Url::parse(BASE_URL)?;
        Ok(Self::with_client(http, base_url, credentials))
    }

    /// Create a client from an existing `reqwest::Client` and base URL.
    ///
    /// This is the injection seam for tests and for callers that need a
    /// non-default host.
    pub fn with_client(http: reqwest::Client, base_url: Url, credentials: Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
        }
    }

    /// The cloud base URL this client queries.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Cloud endpoints ──────────────────────────────────────────────

    /// Fetch the profile of the authenticated user.
    ///
    /// `GET /v1/users/self`
    pub async fn user(&self) -> Result<UserResponse, Error> {
        let url = self.base_url.join("users/self")?;
        let body = self.get_value(url).await?;
        decode("user", body)
    }

    /// List the devices owned by the authenticated user.
    ///
    /// `GET /v1/users/self/devices`
    pub async fn devices(&self) -> Result<Vec<DeviceResponse>, Error> {
        let url = self.base_url.join("users/self/devices")?;
        let body = self.get_value(url).await?;
        let list: DeviceListResponse = decode("device list", body)?;
        Ok(list.devices)
    }

    /// Fetch air data for one device.
    ///
    /// `GET /v1/users/self/devices/{deviceType}/{deviceId}/air-data/{sampling}`
    ///
    /// `params` are appended to the query string verbatim; option
    /// validation happens upstream in `awair-core`.
    pub async fn air_data(
        &self,
        device_type: &str,
        device_id: i64,
        sampling: Sampling,
        params: &[(String, String)],
    ) -> Result<Vec<AirDataRecord>, Error> {
        let path = format!(
            "users/self/devices/{device_type}/{device_id}/air-data/{}",
            sampling.as_path()
        );
        let mut url = self.base_url.join(&path)?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        debug!(device_type, device_id, sampling = sampling.as_path(), "fetching air data");
        let body = self.get_value(url).await?;
        let list: AirDataListResponse = decode("air data", body)?;
        Ok(list.data)
    }

    // ── Local-network endpoints ──────────────────────────────────────

    /// Fetch a local device's configuration.
    ///
    /// `GET http://{addr}/settings/config/data`
    ///
    /// `device_addr` is the device's hostname or IP (with optional
    /// port), e.g. `"AWAIR-ELEM-1419E1.local"`. No authentication.
    pub async fn local_config(&self, device_addr: &str) -> Result<LocalConfigResponse, Error> {
        let url = Url::parse(&format!("http://{device_addr}/settings/config/data"))?;
        let body = self.get_value(url).await?;
        decode("local device config", body)
    }

    /// Fetch the latest reading from a local device.
    ///
    /// `GET http://{addr}/air-data/latest`
    pub async fn local_air_data(&self, device_addr: &str) -> Result<LocalAirDataResponse, Error> {
        let url = Url::parse(&format!("http://{device_addr}/air-data/latest"))?;
        let body = self.get_value(url).await?;
        decode("local air data", body)
    }

    // ── Request plumbing ─────────────────────────────────────────────

    /// Issue a GET, map non-2xx statuses, and check the body for a
    /// vendor `errors` array.
    async fn get_value(&self, url: Url) -> Result<Value, Error> {
        debug!(%url, "querying the Awair API");

        let mut request = self.http.get(url);
        if let Some(token) = self.credentials.bearer_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(Error::Transport)?;
        let status = response.status();
        if !status.is_success() {
            let retry_after = parse_retry_after(response.headers());
            let body = response.text().await.unwrap_or_default();
            return Err(map_status(status, retry_after, body));
        }

        let body: Value = response.json().await.map_err(Error::Transport)?;
        check_errors_array(&body)?;
        Ok(body)
    }
}

/// Map a non-2xx status to the matching error kind.
fn map_status(status: StatusCode, retry_after_secs: Option<u64>, body: String) -> Error {
    match status.as_u16() {
        400 => Error::BadRequest { message: body },
        401 | 403 => Error::Authentication {
            message: "the supplied access token is invalid or does not have access to the \
                      requested data"
                .into(),
        },
        404 => Error::NotFound,
        429 => Error::RateLimited { retry_after_secs },
        other => Error::Http {
            status: other,
            body,
        },
    }
}

/// Seconds from a `Retry-After` header, when the API sends one.
fn parse_retry_after(headers: &reqwest::header::HeaderMap) -> Option<u64> {
    headers
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

/// Check a 2xx body for an `errors` array.
///
/// Holdover from the GraphQL-era API; quota exhaustion still shows up
/// this way on some endpoints.
fn check_errors_array(body: &Value) -> Result<(), Error> {
    let Some(errors) = body.get("errors").and_then(Value::as_array) else {
        return Ok(());
    };

    let mut messages = Vec::new();
    for error in errors {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error");
        if message.contains("Too many requests") {
            return Err(Error::RateLimited {
                retry_after_secs: None,
            });
        }
        messages.push(message.to_owned());
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(Error::Api {
            message: messages.join(", "),
        })
    }
}

/// Decode a JSON body into a typed response, tagging schema failures
/// with the response shape.
fn decode<T: DeserializeOwned>(context: &'static str, body: Value) -> Result<T, Error> {
    serde_json::from_value(body).map_err(|e| Error::validation(context, &e))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn status_mapping_matches_taxonomy() {
        assert!(matches!(
            map_status(StatusCode::UNAUTHORIZED, None, String::new()),
            Error::Authentication { .. }
        ));
        assert!(matches!(
            map_status(StatusCode::FORBIDDEN, None, String::new()),
            Error::Authentication { .. }
        ));
        assert!(matches!(
            map_status(StatusCode::TOO_MANY_REQUESTS, Some(30), String::new()),
            Error::RateLimited {
                retry_after_secs: Some(30)
            }
        ));
        assert!(matches!(
            map_status(StatusCode::BAD_REQUEST, None, String::new()),
            Error::BadRequest { .. }
        ));
        assert!(matches!(
            map_status(StatusCode::NOT_FOUND, None, String::new()),
            Error::NotFound
        ));
        assert!(matches!(
            map_status(StatusCode::BAD_GATEWAY, None, String::new()),
            Error::Http { status: 502, .. }
        ));
    }

    #[test]
    fn errors_array_joins_messages() {
        let body = json!({
            "errors": [
                { "message": "first problem" },
                { "message": "second problem" },
            ]
        });
        match check_errors_array(&body) {
            Err(Error::Api { message }) => {
                assert_eq!(message, "first problem, second problem");
            }
            other => panic!("expected Api error, got: {other:?}"),
        }
    }

    #[test]
    fn errors_array_detects_quota_exhaustion() {
        let body = json!({
            "errors": [{ "message": "Too many requests this minute" }]
        });
        assert!(matches!(
            check_errors_array(&body),
            Err(Error::RateLimited { .. })
        ));
    }

    #[test]
    fn body_without_errors_passes() {
        assert!(check_errors_array(&json!({ "data": [] })).is_ok());
    }
}
