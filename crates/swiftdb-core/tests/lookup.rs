use std::sync::{Arc, Mutex};
use std::time::Duration;
use swiftdb_core::lookup::{
    LookupRequest, LookupTransport, TransportError, TransportResponse, UpstreamFailure,
};
use swiftdb_core::prelude::*;

/// Replays one canned reply and records what was asked.
#[derive(Debug)]
struct Scripted {
    reply: std::result::Result<TransportResponse, TransportError>,
    seen: Mutex<Vec<(String, Vec<(String, String)>, String)>>,
}

impl Scripted {
    fn status(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(TransportResponse {
                status,
                body: body.to_string(),
            }),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn failing(err: TransportError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(err),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl LookupTransport for Scripted {
    fn get(&self, request: &LookupRequest<'_>) -> std::result::Result<TransportResponse, TransportError> {
        self.seen.lock().unwrap().push((
            request.url.to_string(),
            request
                .query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            request.api_key.to_string(),
        ));
        self.reply.clone()
    }
}

const FOUND: &str = r#"{"status":"ok","data":{"count":1,"banks":[
    {"bank":"Test Bank","city":"X","branch":null,"swift_code":"TESTUS33","country":"United States","country_code":"US"}
]}}"#;

fn client(transport: Arc<Scripted>) -> LookupClient {
    let config = LookupConfig::new("test-key")
        .with_endpoint("https://lookup.test/v1/swiftlookup")
        .with_timeout(Duration::from_secs(2));
    LookupClient::with_transport(config, transport)
}

#[test]
fn found_record_keeps_null_branch() {
    let transport = Scripted::status(200, FOUND);
    let bank = client(transport.clone()).lookup("TESTUS33").unwrap();

    assert_eq!(bank.bank, "Test Bank");
    assert_eq!(bank.city, "X");
    assert_eq!(bank.branch, None);
    assert_eq!(bank.swift_code, "TESTUS33");
    assert_eq!(bank.country, "United States");
    assert_eq!(bank.country_code, "US");

    let seen = transport.seen.lock().unwrap();
    let (url, query, key) = &seen[0];
    assert_eq!(url, "https://lookup.test/v1/swiftlookup");
    assert_eq!(query, &vec![("swift".to_string(), "TESTUS33".to_string())]);
    assert_eq!(key, "test-key");
}

#[test]
fn code_is_uppercased_before_sending() {
    let transport = Scripted::status(200, FOUND);
    assert!(client(transport.clone()).lookup(" testus33 ").is_some());
    assert_eq!(transport.seen.lock().unwrap()[0].1[0].1, "TESTUS33");
}

#[test]
fn only_the_first_bank_counts() {
    let body = r#"{"status":"ok","error":null,"data":{"count":2,"banks":[
        {"bank":"First","city":"A","branch":"One","swift_code":"TESTUS33","country":"United States","country_code":"US"},
        {"bank":"Second","city":"B","branch":null,"swift_code":"TESTUS33","country":"United States","country_code":"US"}
    ]}}"#;
    let bank = client(Scripted::status(200, body)).lookup("TESTUS33").unwrap();
    assert_eq!(bank.bank, "First");
    assert_eq!(bank.branch.as_deref(), Some("One"));
}

#[test]
fn server_error_is_none_not_panic() {
    let c = client(Scripted::status(500, "internal error"));
    assert!(c.lookup("TESTUS33").is_none());
    match c.resolve("TESTUS33") {
        LookupOutcome::TransientError(UpstreamFailure::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn schema_violation_is_none() {
    let c = client(Scripted::status(200, r#"{"status":"ok","error":null}"#));
    assert!(c.lookup("TESTUS33").is_none());
    assert!(matches!(
        c.resolve("TESTUS33"),
        LookupOutcome::TransientError(UpstreamFailure::Schema(_))
    ));
}

#[test]
fn non_json_body_is_none() {
    let c = client(Scripted::status(200, "<html>oops</html>"));
    assert!(matches!(
        c.resolve("TESTUS33"),
        LookupOutcome::TransientError(UpstreamFailure::Malformed(_))
    ));
}

#[test]
fn empty_or_null_data_is_not_found() {
    let empty = client(Scripted::status(200, r#"{"status":"ok","data":{"count":0,"banks":[]}}"#));
    assert_eq!(empty.resolve("TESTUS33"), LookupOutcome::NotFound);

    let null = client(Scripted::status(
        200,
        r#"{"status":"error","error":"no match","data":null}"#,
    ));
    assert_eq!(null.resolve("TESTUS33"), LookupOutcome::NotFound);
}

#[test]
fn timeouts_and_network_errors_are_transient() {
    let timeout = client(Scripted::failing(TransportError::Timeout("2s".into())));
    assert!(timeout.lookup("TESTUS33").is_none());
    assert!(matches!(
        timeout.resolve("TESTUS33"),
        LookupOutcome::TransientError(UpstreamFailure::Timeout(_))
    ));

    let down = client(Scripted::failing(TransportError::Network("refused".into())));
    assert!(matches!(
        down.resolve("TESTUS33"),
        LookupOutcome::TransientError(UpstreamFailure::Network(_))
    ));
}

#[test]
fn malformed_codes_never_reach_the_network() {
    let transport = Scripted::status(200, FOUND);
    let c = client(transport.clone());
    assert_eq!(c.resolve("CHASUS3"), LookupOutcome::NotFound);
    assert_eq!(c.resolve("chasus33!"), LookupOutcome::NotFound);
    assert_eq!(transport.calls(), 0);
}

#[test]
fn blank_key_is_a_config_error() {
    let transport = Scripted::status(200, FOUND);
    let c = LookupClient::with_transport(LookupConfig::new(""), transport.clone());
    assert!(matches!(c.resolve("TESTUS33"), LookupOutcome::ConfigError(_)));
    assert!(c.lookup("TESTUS33").is_none());
    assert_eq!(transport.calls(), 0);
}
