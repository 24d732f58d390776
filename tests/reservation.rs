mod common;

use axum::http::StatusCode;
use common::{context, send, RecordingMailer, ADMIN_EMAIL};
use serde_json::json;
use std::sync::Arc;

const RESERVATION: &str = "/api/reservation";
const JSON: &str = "application/json";

fn reservation() -> String {
    json!({
        "formData": {
            "name_first": "Aisha",
            "name_last": "Khan",
            "email_address": "aisha@example.com",
            "cell_number": "0821234567",
            "address_line_1": "12 Long Street",
            "city": "Cape Town",
            "postal_code": "8001"
        },
        "cart": [
            { "id": 1, "name": "Kufi Cap", "price": 250, "quantity": 2 }
        ],
        "total": 599
    })
    .to_string()
}

#[tokio::test]
async fn notifies_sales_then_customer() {
    let mailer = Arc::new(RecordingMailer::default());
    let ctx = context(None, Some(mailer.clone()));

    let (status, body) = send(ctx, "POST", RESERVATION, JSON, reservation()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"ok":true}"#);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 2);

    assert_eq!(sent[0].to, ADMIN_EMAIL);
    assert_eq!(sent[0].subject, "NEW RESERVATION — Al-Ameen Caps");
    assert!(sent[0].html.contains("• Kufi Cap × 2 — R500.00"));
    assert!(sent[0].html.contains("R 599.00"));

    assert_eq!(sent[1].to, "aisha@example.com");
    assert_eq!(
        sent[1].subject,
        "Reservation Confirmed: Al-Ameen Caps Inaugural Collection"
    );
    assert!(sent[1].text.starts_with("Assalamu alaikum Aisha Khan,"));
}

#[tokio::test]
async fn rejects_invalid_json() {
    let mailer = Arc::new(RecordingMailer::default());
    let ctx = context(None, Some(mailer.clone()));

    let (status, body) = send(ctx, "POST", RESERVATION, JSON, "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid JSON");
    assert_eq!(mailer.attempts(), 0);
}

#[tokio::test]
async fn rejects_missing_email() {
    let mailer = Arc::new(RecordingMailer::default());
    let ctx = context(None, Some(mailer.clone()));

    for payload in [
        String::new(),
        json!({ "cart": [] }).to_string(),
        json!({ "formData": { "name_first": "Aisha", "email_address": "" } }).to_string(),
    ] {
        let (status, body) = send(ctx.clone(), "POST", RESERVATION, JSON, payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Missing formData or email");
    }

    assert_eq!(mailer.attempts(), 0);
}

#[tokio::test]
async fn fails_without_mail_configuration() {
    let (status, body) = send(context(None, None), "POST", RESERVATION, JSON, reservation()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Email not configured");
}

#[tokio::test]
async fn reports_send_failures() {
    let mailer = Arc::new(RecordingMailer::failing());
    let ctx = context(None, Some(mailer.clone()));

    let (status, body) = send(ctx, "POST", RESERVATION, JSON, reservation()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Failed to send reservation");
    assert_eq!(mailer.attempts(), 1);
}

#[tokio::test]
async fn get_is_rejected() {
    let (status, body) = send(context(None, None), "GET", RESERVATION, JSON, "").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, "Method Not Allowed");
}
