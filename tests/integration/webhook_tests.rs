use itemplatform_client::prelude::*;
use reqwest::header::HeaderValue;
use std::sync::Mutex;

fn delivery_headers(signature: &str, event: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(SIGNATURE_HEADER, HeaderValue::from_str(signature).unwrap());
    headers.insert(EVENT_HEADER, HeaderValue::from_str(event).unwrap());
    headers
}

fn record(client: &Client, event: &str) -> Arc<Mutex<Vec<Value>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    client.subscribe(event, move |payload| sink.lock().unwrap().push(payload.clone()));
    seen
}

fn client_with_secret(secret: Option<&str>) -> Client {
    let config = Config::new(Credentials::new("1", "user", "secret"));
    let config = match secret {
        Some(secret) => config.with_webhook_secret(secret),
        None => config,
    };
    Client::new(config).unwrap()
}

#[test]
fn test_signed_delivery_reaches_subscribers_once() {
    let client = client_with_secret(Some("abc"));
    let deposits = record(&client, "deposit.accepted");
    let withdrawals = record(&client, "withdrawal.sent");

    let body = br#"{"x":1}"#;
    let digest = sign(SignatureAlgorithm::Sha256, b"abc", body).unwrap();
    let headers = delivery_headers(
        &format_signature_header(SignatureAlgorithm::Sha256, &digest),
        "deposit.accepted",
    );

    let outcome = client.webhook(None).handle(&headers, body).unwrap();

    assert_eq!(
        outcome,
        WebhookOutcome::Dispatched {
            event: "deposit.accepted".to_string(),
            subscribers: 1
        }
    );
    assert_eq!(*deposits.lock().unwrap(), vec![json!({"x": 1})]);
    assert!(withdrawals.lock().unwrap().is_empty());
}

#[test]
fn test_incorrect_digest_invokes_nobody() {
    let client = client_with_secret(Some("abc"));
    let seen = record(&client, "deposit.accepted");

    let body = br#"{"x":1}"#;
    let digest = sign(SignatureAlgorithm::Sha256, b"not-abc", body).unwrap();
    let headers = delivery_headers(&format!("sha256={digest}"), "deposit.accepted");

    let outcome = client.webhook(None).handle(&headers, body).unwrap();

    assert_eq!(outcome, WebhookOutcome::Rejected);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_handler_secret_used_when_client_has_none() {
    let client = client_with_secret(None);
    let seen = record(&client, "deposit.accepted");

    let body = br#"{"x":1}"#;
    let headers = delivery_headers("sha256=deadbeef", "deposit.accepted");

    let outcome = client.webhook(Some("abc")).handle(&headers, body).unwrap();

    assert_eq!(outcome, WebhookOutcome::Rejected);
    assert!(seen.lock().unwrap().is_empty());

    let digest = sign(SignatureAlgorithm::Sha256, b"abc", body).unwrap();
    let headers = delivery_headers(&format!("sha256={digest}"), "deposit.accepted");
    let outcome = client.webhook(Some("abc")).handle(&headers, body).unwrap();

    assert_eq!(
        outcome,
        WebhookOutcome::Dispatched {
            event: "deposit.accepted".to_string(),
            subscribers: 1
        }
    );
    assert_eq!(*seen.lock().unwrap(), vec![json!({"x": 1})]);
}

#[test]
fn test_empty_override_keeps_configured_secret() {
    let client = client_with_secret(Some("abc"));
    let seen = record(&client, "deposit.accepted");

    let body = br#"{"x":1}"#;
    let digest = sign(SignatureAlgorithm::Sha256, b"abc", body).unwrap();
    let headers = delivery_headers(&format!("sha256={digest}"), "deposit.accepted");

    let outcome = client.webhook(Some("")).handle(&headers, body).unwrap();

    assert!(matches!(outcome, WebhookOutcome::Dispatched { subscribers: 1, .. }));
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn test_empty_configured_secret_skips_verification() {
    let client = client_with_secret(Some(""));
    let seen = record(&client, "deposit.accepted");

    let outcome = client
        .webhook(None)
        .handle_raw(None, Some("deposit.accepted"), br#"{"x":1}"#)
        .unwrap();

    assert!(matches!(outcome, WebhookOutcome::Dispatched { subscribers: 1, .. }));
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn test_no_secret_dispatches_unconditionally() {
    let client = client_with_secret(None);
    let seen = record(&client, "deposit.accepted");

    let headers = delivery_headers("sha256=deadbeef", "deposit.accepted");
    let outcome = client.webhook(None).handle(&headers, br#"{"x":1}"#).unwrap();

    assert!(matches!(outcome, WebhookOutcome::Dispatched { subscribers: 1, .. }));
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn test_malformed_body_is_fatal() {
    let client = client_with_secret(None);
    let seen = record(&client, "deposit.accepted");

    let headers = delivery_headers("sha256=deadbeef", "deposit.accepted");
    let result = client.webhook(None).handle(&headers, b"not json");

    assert!(matches!(result, Err(AppError::Decode(_))));
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_sha512_signatures_are_accepted() {
    let client = client_with_secret(Some("abc"));
    let seen = record(&client, "item.updated");

    let body = br#"{"item":{"id":9}}"#;
    let digest = sign(SignatureAlgorithm::Sha512, b"abc", body).unwrap();
    let headers = delivery_headers(&format!("sha512={digest}"), "item.updated");

    client.webhook(None).handle(&headers, body).unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![json!({"item": {"id": 9}})]);
}

#[test]
fn test_sha1_signatures_are_accepted() {
    let client = client_with_secret(Some("abc"));
    let seen = record(&client, "deposit.accepted");

    let headers = delivery_headers(
        "sha1=f60abc378f5791ca662874f2c5e8bd733b00681e",
        "deposit.accepted",
    );
    let outcome = client.webhook(None).handle(&headers, br#"{"x":1}"#).unwrap();

    assert!(matches!(outcome, WebhookOutcome::Dispatched { subscribers: 1, .. }));
    assert_eq!(*seen.lock().unwrap(), vec![json!({"x": 1})]);
}
