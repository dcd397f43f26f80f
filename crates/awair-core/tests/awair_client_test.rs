#![allow(clippy::unwrap_used)]
// End-to-end tests for the cloud `Awair` facade using wiremock.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use awair_api::AwairClient;
use awair_core::{AirDataQuery, Awair, Credentials, Device, Error, Sampling};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Awair) {
    let server = MockServer::start().await;
    let api = AwairClient::with_client(
        reqwest::Client::new(),
        Url::parse(&server.uri()).unwrap(),
        Credentials::access_token("test-token"),
    );
    (server, Awair::from_api(api))
}

fn mock_device() -> Device {
    Device {
        id: 24947,
        uuid: "awair_24947".to_owned(),
        device_type: "awair".to_owned(),
        mac_address: None,
        name: None,
        latitude: None,
        longitude: None,
        location_name: None,
        preference: None,
        room_type: None,
        space_type: None,
        timezone: None,
    }
}

// ── User ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_user() {
    let (server, awair) = setup().await;

    let body = json!({
        "id": "32406",
        "email": "foo@bar.com",
        "firstName": "Andrew",
        "dobYear": 2020, "dobMonth": 4, "dobDay": 8,
        "tier": "Large_developer",
        "sex": "MALE",
        "usages": [
            { "scope": "USER_DEVICE_LIST", "usage": 23 },
            { "scope": "USER_INFO", "usage": 80 },
        ],
        "permissions": [
            { "scope": "FIFTEEN_MIN", "quota": 30000 },
            { "scope": "FIVE_MIN", "quota": 30000 },
            { "scope": "RAW", "quota": 30000 },
            { "scope": "LATEST", "quota": 30000 },
            { "scope": "USER_DEVICE_LIST", "quota": 2000 },
            { "scope": "USER_INFO", "quota": 500 },
        ]
    });

    Mock::given(method("GET"))
        .and(path("/users/self"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let user = awair.user().await.unwrap();

    assert_eq!(user.id, "32406");
    assert_eq!(user.email.as_deref(), Some("foo@bar.com"));
    assert_eq!(user.first_name.as_deref(), Some("Andrew"));
    assert_eq!(user.dob, NaiveDate::from_ymd_opt(2020, 4, 8));
    assert_eq!(user.tier.as_deref(), Some("Large_developer"));

    // Exactly the scope/limit pairs present in the response.
    assert_eq!(user.permissions.len(), 6);
    assert_eq!(user.permissions["FIFTEEN_MIN"], 30000);
    assert_eq!(user.permissions["USER_INFO"], 500);
    assert_eq!(user.usages.len(), 2);
    assert_eq!(user.usages["USER_INFO"], 80);
}

// ── Devices ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_devices_count_and_order() {
    let (server, awair) = setup().await;

    let body = json!({
        "devices": [
            { "deviceId": 24947, "deviceUUID": "awair_24947", "deviceType": "awair",
              "name": "Living Room", "preference": "GENERAL", "roomType": "LIVING_ROOM",
              "spaceType": "HOME", "timezone": "US/Pacific",
              "latitude": 0.0, "longitude": 0.0 },
            { "deviceId": 5709, "deviceUUID": "awair-r2_5709", "deviceType": "awair-r2" },
            { "deviceId": 755, "deviceUUID": "awair-omni_755", "deviceType": "awair-omni" },
        ]
    });

    Mock::given(method("GET"))
        .and(path("/users/self/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let devices = awair.devices().await.unwrap();

    assert_eq!(devices.len(), 3);
    assert_eq!(devices[0].id, 24947);
    assert_eq!(devices[0].uuid, "awair_24947");
    assert_eq!(devices[0].model(), "Awair");
    assert_eq!(devices[0].room_type.as_deref(), Some("LIVING_ROOM"));
    assert_eq!(devices[1].model(), "Awair 2nd Edition");
    assert_eq!(devices[2].model(), "Awair Omni");
}

// ── Air data ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_air_data_latest() {
    let (server, awair) = setup().await;

    let body = json!({
        "data": [{
            "timestamp": "2020-04-10T15:38:24.111Z",
            "score": 88,
            "sensors": [
                { "comp": "temp", "value": 22.12 },
                { "comp": "humid", "value": 45.18 },
            ],
            "indices": [
                { "comp": "temp", "value": -1.0 },
                { "comp": "humid", "value": 0.0 },
            ]
        }]
    });

    Mock::given(method("GET"))
        .and(path("/users/self/devices/awair/24947/air-data/latest"))
        .and(query_param("fahrenheit", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let reading = awair
        .air_data_latest(&mock_device(), false)
        .await
        .unwrap()
        .expect("device is online");

    assert_eq!(reading.score, 88.0);
    assert_eq!(reading.sensors["temperature"], 22.12);
    assert_eq!(reading.sensors["humidity"], 45.18);
    assert_eq!(reading.sensors.temperature(), Some(22.12));
    assert_eq!(reading.indices.temperature(), Some(-1.0));
    assert_eq!(
        reading.timestamp,
        Utc.with_ymd_and_hms(2020, 4, 10, 15, 38, 24).unwrap()
            + Duration::milliseconds(111)
    );
}

#[tokio::test]
async fn test_air_data_latest_offline_device() {
    let (server, awair) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users/self/devices/awair/24947/air-data/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let reading = awair.air_data_latest(&mock_device(), false).await.unwrap();
    assert_eq!(reading, None);
}

#[tokio::test]
async fn test_air_data_five_minute_preserves_record_order() {
    let (server, awair) = setup().await;

    let body = json!({
        "data": [
            { "timestamp": "2020-04-10T15:35:00.000Z", "score": 88.0,
              "sensors": [{ "comp": "temp", "value": 21.777 }],
              "indices": [{ "comp": "temp", "value": -1.0 }] },
            { "timestamp": "2020-04-10T15:30:00.000Z", "score": 87.0,
              "sensors": [{ "comp": "temp", "value": 21.771 }],
              "indices": [{ "comp": "temp", "value": -1.0 }] },
        ]
    });

    Mock::given(method("GET"))
        .and(path("/users/self/devices/awair/24947/air-data/5-min-avg"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let query = AirDataQuery::new()
        .from_date(Utc::now() - Duration::minutes(30))
        .limit(2);
    let readings = awair
        .air_data_five_minute(&mock_device(), &query)
        .await
        .unwrap();

    assert_eq!(readings.len(), 2);
    // API order (descending) is preserved, not re-sorted.
    assert!(readings[0].timestamp > readings[1].timestamp);
    assert_eq!(readings[0].sensors.temperature(), Some(21.777));
}

#[tokio::test]
async fn test_unknown_sensors_pass_through_unmapped() {
    let (server, awair) = setup().await;

    let body = json!({
        "data": [{
            "timestamp": "2020-04-10T15:38:24.111Z",
            "score": 88.0,
            "sensors": [
                { "comp": "temp", "value": 21.77 },
                { "comp": "dust", "value": 10.0 },
                { "comp": "radon_est", "value": 3.0 },
            ],
            "indices": [{ "comp": "dust", "value": 1.0 }]
        }]
    });

    Mock::given(method("GET"))
        .and(path("/users/self/devices/awair/24947/air-data/raw"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let readings = awair
        .air_data_raw(&mock_device(), &AirDataQuery::new())
        .await
        .unwrap();

    let sensors = &readings[0].sensors;
    assert_eq!(sensors.get("dust"), Some(10.0));
    assert_eq!(sensors.get("radon_est"), Some(3.0));
    assert_eq!(sensors.temperature(), Some(21.77));
    assert_eq!(readings[0].indices.get("dust"), Some(1.0));
}

// ── Errors ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_auth_failure_surfaces_as_auth_error() {
    let (server, awair) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = awair.user().await;
    assert!(matches!(result, Err(ref e) if e.is_auth()), "got: {result:?}");
}

#[tokio::test]
async fn test_invalid_options_never_issue_a_request() {
    let (server, awair) = setup().await;

    let query = AirDataQuery::new().limit(1000);
    let result = awair
        .air_data(&mock_device(), Sampling::FiveMinute, &query)
        .await;

    assert!(matches!(result, Err(Error::InvalidOptions { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}
