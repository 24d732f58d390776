#![allow(dead_code)]

use alameen_backend_rs::{
    app,
    modules::{
        notification::service::{
            email::{Email, Mailer},
            Error, Result,
        },
        payfast::{fields::FieldList, signature},
    },
    types::{AppContext, AppEnvironment, Context, MailContext, PayfastContext},
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const PASSPHRASE: &str = "jt7NOE43FZPn";
pub const ADMIN_EMAIL: &str = "sales@alameencaps.com";

#[derive(Default)]
pub struct RecordingMailer {
    pub fail: bool,
    pub attempts: Mutex<usize>,
    pub sent: Mutex<Vec<Email>>,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: Email) -> Result<()> {
        *self.attempts.lock().unwrap() += 1;
        if self.fail {
            return Err(Error::NotSent);
        }
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

pub fn context(passphrase: Option<&str>, mailer: Option<Arc<RecordingMailer>>) -> Arc<Context> {
    Arc::new(Context {
        app: AppContext {
            host: String::from("127.0.0.1"),
            environment: AppEnvironment::Development,
            port: 8000,
            url: String::from("https://api.shop.test"),
            site_url: String::from("https://shop.test"),
        },
        payfast: PayfastContext {
            merchant_id: String::from("10000100"),
            merchant_key: String::from("46f0cd694581a"),
            passphrase: passphrase.map(String::from),
            sandbox: true,
            return_url: String::from("https://shop.test/success"),
            cancel_url: String::from("https://shop.test/cancel"),
            notify_url: String::from("https://api.shop.test/api/payfast/notify"),
        },
        mail: MailContext {
            sender_name: String::from("Al-Ameen Caps"),
            sender_email: String::from("orders@alameencaps.com"),
            admin_email: Some(String::from(ADMIN_EMAIL)),
            reservation_email: String::from("reservations@alameencaps.com"),
            mailer: mailer.map(|mailer| mailer as Arc<dyn Mailer>),
        },
    })
}

/// Encodes fields the way the gateway posts them.
pub fn form_body(fields: &FieldList) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", key, signature::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Signs a notification the way the gateway does.
pub fn gateway_signature(fields: &FieldList, passphrase: Option<&str>) -> String {
    hex::encode(md5::compute(signature::verification_string(fields, passphrase).as_bytes()).0)
}

pub async fn send(
    ctx: Arc<Context>,
    method: &str,
    uri: &str,
    content_type: &str,
    body: impl Into<Body>,
) -> (StatusCode, String) {
    let response = app::router(ctx)
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", content_type)
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}
