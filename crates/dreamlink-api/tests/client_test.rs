#![allow(clippy::unwrap_used)]
// Integration tests for `DreamboxClient` using wiremock.

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dreamlink_api::{DreamboxClient, Error, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, DreamboxClient) {
    let server = MockServer::start().await;
    let client = DreamboxClient::new(
        &server.address().to_string(),
        None,
        None,
        &TransportConfig::default(),
    )
    .unwrap();
    (server, client)
}

fn xml_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_owned(), "application/xml")
}

const DEVICE_INFO_XML: &str = "<e2deviceinfo>\
    <e2devicename>dm920</e2devicename>\
    <e2network><e2interface>\
        <e2name>eth0</e2name>\
        <e2mac>00:09:34:2A:BC:DE</e2mac>\
    </e2interface></e2network>\
</e2deviceinfo>";

// ── Device info ─────────────────────────────────────────────────────

#[tokio::test]
async fn device_info_extracts_name_and_mac() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/web/deviceinfo"))
        .and(header("Accept", "application/xml"))
        .respond_with(xml_response(DEVICE_INFO_XML))
        .mount(&server)
        .await;

    let info = client.device_info().await.unwrap();

    assert_eq!(info.name, "dm920");
    assert_eq!(info.mac, "00:09:34:2A:BC:DE");
    assert_eq!(info.entity_id(), "remote-0009342ABCDE");
}

#[tokio::test]
async fn device_info_propagates_status_errors() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/web/deviceinfo"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = client.device_info().await;
    assert!(
        matches!(result, Err(Error::Status { code: 503 })),
        "expected Status error, got: {result:?}"
    );
}

#[tokio::test]
async fn device_info_fails_on_missing_field() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/web/deviceinfo"))
        .respond_with(xml_response(
            "<e2deviceinfo><e2devicename>dm920</e2devicename></e2deviceinfo>",
        ))
        .mount(&server)
        .await;

    let result = client.device_info().await;
    assert!(
        matches!(result, Err(Error::MissingField { .. })),
        "expected MissingField error, got: {result:?}"
    );
}

// ── Basic auth ──────────────────────────────────────────────────────

#[tokio::test]
async fn credentials_are_sent_as_basic_auth() {
    let server = MockServer::start().await;
    let client = DreamboxClient::new(
        &server.address().to_string(),
        Some("root".into()),
        Some("secret".to_string().into()),
        &TransportConfig::default(),
    )
    .unwrap();

    // base64("root:secret")
    Mock::given(method("GET"))
        .and(path("/web/deviceinfo"))
        .and(header("Authorization", "Basic cm9vdDpzZWNyZXQ="))
        .respond_with(xml_response(DEVICE_INFO_XML))
        .mount(&server)
        .await;

    client.device_info().await.unwrap();
}

#[tokio::test]
async fn empty_credentials_send_no_auth_header() {
    let server = MockServer::start().await;
    let client = DreamboxClient::new(
        &server.address().to_string(),
        Some(String::new()),
        Some(String::new().into()),
        &TransportConfig::default(),
    )
    .unwrap();

    let received = Mock::given(method("GET"))
        .and(path("/web/deviceinfo"))
        .respond_with(xml_response(DEVICE_INFO_XML))
        .expect(1)
        .mount_as_scoped(&server)
        .await;

    client.device_info().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
    drop(received);
}

// ── Remote key presses ──────────────────────────────────────────────

#[tokio::test]
async fn send_key_requires_true_result() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/web/remotecontrol"))
        .and(query_param("command", "116"))
        .respond_with(xml_response(
            "<e2remotecontrol><e2result>True</e2result></e2remotecontrol>",
        ))
        .mount(&server)
        .await;

    client.send_key(116, false).await.unwrap();
}

#[tokio::test]
async fn send_key_long_press_adds_type_modifier() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/web/remotecontrol"))
        .and(query_param("command", "115"))
        .and(query_param("type", "long"))
        .respond_with(xml_response(
            "<e2remotecontrol><e2result>True</e2result></e2remotecontrol>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    client.send_key(115, true).await.unwrap();
}

#[tokio::test]
async fn send_key_rejection_is_an_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/web/remotecontrol"))
        .respond_with(xml_response(
            "<e2remotecontrol><e2result>False</e2result></e2remotecontrol>",
        ))
        .mount(&server)
        .await;

    let result = client.send_key(352, false).await;
    assert!(
        matches!(
            result,
            Err(Error::CommandRejected {
                code: 352,
                result: Some(ref r)
            }) if r == "False"
        ),
        "expected CommandRejected, got: {result:?}"
    );
}

#[tokio::test]
async fn send_key_missing_result_field_is_a_rejection() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/web/remotecontrol"))
        .respond_with(xml_response("<e2remotecontrol></e2remotecontrol>"))
        .mount(&server)
        .await;

    let result = client.send_key(11, false).await;
    assert!(matches!(
        result,
        Err(Error::CommandRejected { result: None, .. })
    ));
}

// ── Power state ─────────────────────────────────────────────────────

#[tokio::test]
async fn set_power_ignores_reported_standby_value() {
    let (server, client) = setup().await;

    // The box reports a stale standby value on state changes; a 200
    // must count as success regardless of the body.
    Mock::given(method("GET"))
        .and(path("/web/powerstate"))
        .and(query_param("newstate", "4"))
        .respond_with(xml_response(
            "<e2powerstate><e2instandby>true</e2instandby></e2powerstate>",
        ))
        .mount(&server)
        .await;

    client.set_power(true).await.unwrap();
}

#[tokio::test]
async fn set_power_off_uses_newstate_5() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/web/powerstate"))
        .and(query_param("newstate", "5"))
        .respond_with(xml_response(
            "<e2powerstate><e2instandby>true</e2instandby></e2powerstate>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    client.set_power(false).await.unwrap();
}

#[tokio::test]
async fn power_state_maps_standby_values() {
    for (body, standby) in [
        ("<e2powerstate><e2instandby>true</e2instandby></e2powerstate>", true),
        ("<e2powerstate><e2instandby>True</e2instandby></e2powerstate>", true),
        ("<e2powerstate><e2instandby>false</e2instandby></e2powerstate>", false),
        ("<e2powerstate><e2instandby>garbage</e2instandby></e2powerstate>", false),
        ("<e2powerstate></e2powerstate>", false),
    ] {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/web/powerstate"))
            .respond_with(xml_response(body))
            .mount(&server)
            .await;

        assert_eq!(client.power_state().await.unwrap(), standby, "body: {body}");
    }
}

// ── Downmix ─────────────────────────────────────────────────────────

#[tokio::test]
async fn downmix_read_and_write() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/web/downmix"))
        .and(query_param("enable", "False"))
        .respond_with(xml_response(
            "<e2simplexmlresult><e2state>False</e2state></e2simplexmlresult>",
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/web/downmix"))
        .respond_with(xml_response(
            "<e2simplexmlresult><e2state>True</e2state></e2simplexmlresult>",
        ))
        .mount(&server)
        .await;

    assert!(client.downmix().await.unwrap());
    assert!(!client.set_downmix(false).await.unwrap());
}

// ── Transport failures ──────────────────────────────────────────────

#[tokio::test]
async fn malformed_xml_is_a_typed_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/web/powerstate"))
        .respond_with(xml_response("<e2powerstate><oops></e2powerstate>"))
        .mount(&server)
        .await;

    let result = client.power_state().await;
    assert!(
        matches!(result, Err(Error::Xml { .. })),
        "expected Xml error, got: {result:?}"
    );
}

#[tokio::test]
async fn connection_refused_is_transient() {
    // Point at a port with no listener: bind an ephemeral port, note the
    // address, then drop the socket so connecting to it is refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap().to_string();
    drop(listener);

    let client =
        DreamboxClient::new(&address, None, None, &TransportConfig::default()).unwrap();

    let err = client.power_state().await.unwrap_err();
    assert!(err.is_transient(), "expected transient error, got: {err:?}");
}
