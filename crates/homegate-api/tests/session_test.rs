#![allow(clippy::unwrap_used)]
// Integration tests for `RouterSession` against a wiremock router.
//
// The session's client is blocking, so calls run inside
// `spawn_blocking` while the mock server lives on the test runtime.

use secrecy::SecretString;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use homegate_api::{Error, RouterSession};

// ── Helpers ─────────────────────────────────────────────────────────

async fn start_router() -> (MockServer, String) {
    let server = MockServer::start().await;
    let gateway = server.address().to_string();
    (server, gateway)
}

fn connect(gateway: &str) -> RouterSession {
    RouterSession::connect(gateway, "admin", SecretString::from("admin".to_owned())).unwrap()
}

/// Run a blocking closure over a fresh session on the blocking pool.
async fn with_session<T, F>(gateway: String, f: F) -> T
where
    T: Send + 'static,
    F: FnOnce(&RouterSession) -> T + Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&connect(&gateway)))
        .await
        .unwrap()
}

const DHCP_PAGE: &str = "\
<html><body><table>
<tr><td>Hostname</td><td>MAC Address</td><td>IP Address</td><td>Expires In</td></tr>
<tr><td>my-pc</td><td>AA:BB:CC:DD:EE:01</td><td>192.168.1.2</td><td>23 Hours, 59 Minutes</td></tr>
<tr><td>phone</td><td>aa:bb:cc:dd:ee:02</td><td>192.168.1.3</td><td>12 Hours, 3 Minutes</td></tr>
</table></body></html>";

const STATION_PAGE: &str = "\
<html><body><table>
<tr><td>AA:BB:CC:DD:EE:02&nbsp;</td></tr>
<tr><td>aa:bb:cc:dd:ee:01&nbsp;</td></tr>
</table></body></html>";

const FILTER_PAGE: &str = "\
<html><body>
<form action=wlmacflt.cmd>
<input type=hidden name='sessionKey' value='8675309221'>
<table><tr><td>aa:bb:cc:dd:ee:99&nbsp;</td></tr></table>
</form></body></html>";

// ── Scrapes ─────────────────────────────────────────────────────────

#[tokio::test]
async fn dhcp_leases_scraped_from_lease_page() {
    let (server, gateway) = start_router().await;

    Mock::given(method("GET"))
        .and(path("/dhcpinfo.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DHCP_PAGE))
        .mount(&server)
        .await;

    let leases = with_session(gateway, |s| s.dhcp_leases()).await.unwrap();

    assert_eq!(leases.len(), 2);
    assert_eq!(leases["my-pc"].mac.as_str(), "aa:bb:cc:dd:ee:01");
    assert_eq!(leases["my-pc"].ip, "192.168.1.2");
    assert_eq!(leases["phone"].expires, "12 Hours, 3 Minutes");
}

#[tokio::test]
async fn stations_scraped_in_order() {
    let (server, gateway) = start_router().await;

    Mock::given(method("GET"))
        .and(path("/wlstationlist.cmd"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STATION_PAGE))
        .mount(&server)
        .await;

    let stations = with_session(gateway, |s| s.stations()).await.unwrap();

    let macs: Vec<String> = stations.iter().map(ToString::to_string).collect();
    assert_eq!(macs, vec!["aa:bb:cc:dd:ee:02", "aa:bb:cc:dd:ee:01"]);
}

#[tokio::test]
async fn blocked_list_scraped_from_filter_page() {
    let (server, gateway) = start_router().await;

    Mock::given(method("GET"))
        .and(path("/wlmacflt.cmd"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FILTER_PAGE))
        .mount(&server)
        .await;

    let blocked = with_session(gateway, |s| s.blocked()).await.unwrap();

    assert_eq!(blocked.len(), 1);
    assert_eq!(blocked[0].as_str(), "aa:bb:cc:dd:ee:99");
}

// ── Session key ─────────────────────────────────────────────────────

#[tokio::test]
async fn session_key_mined_once_and_reused() {
    let (server, gateway) = start_router().await;

    // Key mining hits the filter page without an action parameter.
    Mock::given(method("GET"))
        .and(path("/wlmacflt.cmd"))
        .and(query_param_is_missing("action"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FILTER_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/wlmacflt.cmd"))
        .and(query_param("action", "add"))
        .and(query_param("rmLst", "aa:bb:cc:dd:ee:01"))
        .and(query_param("sessionKey", "8675309221"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>OK</html>"))
        .expect(2)
        .mount(&server)
        .await;

    with_session(gateway, |s| {
        let mac = "aa:bb:cc:dd:ee:01".parse().unwrap();
        s.block(&mac).unwrap();
        s.block(&mac).unwrap();
    })
    .await;
}

#[tokio::test]
async fn missing_session_key_is_an_extraction_error() {
    let (server, gateway) = start_router().await;

    Mock::given(method("GET"))
        .and(path("/wlmacflt.cmd"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>no digits here</html>"))
        .mount(&server)
        .await;

    let result = with_session(gateway, |s| s.session_key()).await;

    assert!(
        matches!(result, Err(Error::SessionKey { .. })),
        "expected SessionKey error, got: {result:?}"
    );
}

// ── Actions ─────────────────────────────────────────────────────────

#[tokio::test]
async fn reboot_carries_session_key() {
    let (server, gateway) = start_router().await;

    Mock::given(method("GET"))
        .and(path("/wlmacflt.cmd"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FILTER_PAGE))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rebootinfo.cgi"))
        .and(query_param("sessionKey", "8675309221"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rebooting</html>"))
        .expect(1)
        .mount(&server)
        .await;

    with_session(gateway, |s| s.reboot()).await.unwrap();
}

#[tokio::test]
async fn unblock_uses_remove_action() {
    let (server, gateway) = start_router().await;

    Mock::given(method("GET"))
        .and(path("/wlmacflt.cmd"))
        .and(query_param_is_missing("action"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FILTER_PAGE))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/wlmacflt.cmd"))
        .and(query_param("action", "remove"))
        .and(query_param("rmLst", "aa:bb:cc:dd:ee:01"))
        .and(query_param("sessionKey", "8675309221"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>OK</html>"))
        .expect(1)
        .mount(&server)
        .await;

    with_session(gateway, |s| {
        let mac = "aa:bb:cc:dd:ee:01".parse().unwrap();
        s.unblock(&mac)
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn time_limit_sends_encoded_window() {
    let (server, gateway) = start_router().await;

    Mock::given(method("GET"))
        .and(path("/wlmacflt.cmd"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FILTER_PAGE))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/todmngr.tod"))
        .and(query_param("action", "add"))
        .and(query_param("username", "homework"))
        .and(query_param("mac", "aa:bb:cc:dd:ee:01"))
        .and(query_param("days", "127"))
        .and(query_param("start_time", "60"))
        .and(query_param("end_time", "1439"))
        .and(query_param("sessionKey", "8675309221"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>OK</html>"))
        .expect(1)
        .mount(&server)
        .await;

    with_session(gateway, |s| {
        let mac = "aa:bb:cc:dd:ee:01".parse().unwrap();
        let window = homegate_core::AccessWindow::parse("Everyday", "1", "23:59").unwrap();
        s.set_time_limit("homework", &mac, window)
    })
    .await
    .unwrap();
}

// ── Failure modes ───────────────────────────────────────────────────

#[tokio::test]
async fn unauthorized_is_a_credentials_failure() {
    let (server, gateway) = start_router().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = with_session(gateway, |s| s.dhcp_leases()).await;

    match result {
        Err(err) => assert!(err.is_auth(), "expected auth error, got: {err:?}"),
        Ok(_) => panic!("expected Authentication error"),
    }
}

#[tokio::test]
async fn unreachable_router_is_a_connection_failure() {
    // Bind a listener, learn its address, then shut it down.
    let (server, gateway) = start_router().await;
    drop(server);

    let result = with_session(gateway, |s| s.stations()).await;

    match result {
        Err(err) => assert!(err.is_connection(), "expected connection error, got: {err:?}"),
        Ok(_) => panic!("expected Transport error"),
    }
}

#[tokio::test]
async fn unexpected_status_is_surfaced() {
    let (server, gateway) = start_router().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = with_session(gateway, |s| s.dhcp_leases()).await;

    assert!(
        matches!(result, Err(Error::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus, got: {result:?}"
    );
}

#[tokio::test]
async fn bad_gateway_rejected_before_any_request() {
    let result = RouterSession::connect(
        "http://192.168.1.1",
        "admin",
        SecretString::from("admin".to_owned()),
    );

    assert!(matches!(result, Err(Error::InvalidGateway { .. })));
}
