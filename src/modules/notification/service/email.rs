use super::{templates, Error, Notification, Result};
use crate::types::Context;
use async_trait::async_trait;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::sync::Arc;

/// A rendered email, independent of the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Email {
    pub from_name: String,
    pub from_address: String,
    pub to: String,
    pub bcc: Option<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Email) -> Result<()>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Port 465 uses implicit TLS, anything else upgrades with STARTTLS.
    pub fn new(host: &str, port: u16, user: String, password: String) -> Result<Self> {
        let builder = match port {
            465 => AsyncSmtpTransport::<Tokio1Executor>::relay(host),
            _ => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host),
        }
        .map_err(|err| {
            tracing::error!("Failed to create mail transport for {}: {}", host, err);
            Error::InvalidTransport
        })?;

        Ok(Self {
            transport: builder
                .port(port)
                .credentials(Credentials::new(user, password))
                .build(),
        })
    }
}

fn parse_address(raw: &str) -> Result<Address> {
    raw.parse::<Address>().map_err(|err| {
        tracing::error!("Failed to parse email address {}: {}", raw, err);
        Error::InvalidAddress(raw.to_string())
    })
}

fn build_message(email: Email) -> Result<Message> {
    let mut builder = Message::builder()
        .from(Mailbox::new(
            Some(email.from_name),
            parse_address(&email.from_address)?,
        ))
        .to(Mailbox::new(None, parse_address(&email.to)?))
        .subject(email.subject);

    if let Some(bcc) = email.bcc {
        builder = builder.bcc(Mailbox::new(None, parse_address(&bcc)?));
    }

    builder
        .multipart(MultiPart::alternative_plain_html(email.text, email.html))
        .map_err(|err| {
            tracing::error!("Failed to build email: {}", err);
            Error::NotSent
        })
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: Email) -> Result<()> {
        let message = build_message(email)?;

        self.transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(|err| {
                tracing::error!("Failed to send email: {}", err);
                Error::NotSent
            })
    }
}

fn render(ctx: &Context, notification: Notification) -> Email {
    let from_name = ctx.mail.sender_name.clone();
    let from_address = ctx.mail.sender_email.clone();

    match notification {
        Notification::OrderConfirmed(n) => Email {
            from_name,
            from_address,
            to: n.email_address.clone(),
            bcc: ctx.mail.admin_email.clone(),
            subject: String::from("Order Confirmation - Al-Ameen Caps"),
            html: templates::order_confirmed_html(&ctx.app.site_url, &n),
            text: templates::order_confirmed_text(&n),
        },
        Notification::ReservationReceived(n) => Email {
            from_name,
            from_address,
            to: n.recipient.clone(),
            bcc: None,
            subject: String::from("NEW RESERVATION — Al-Ameen Caps"),
            html: templates::reservation_received_html(&n.reservation),
            text: templates::reservation_received_text(&n.reservation),
        },
        Notification::ReservationConfirmed(n) => Email {
            from_name,
            from_address,
            to: n.email_address.clone(),
            bcc: None,
            subject: String::from("Reservation Confirmed: Al-Ameen Caps Inaugural Collection"),
            html: templates::reservation_confirmed_html(&n.reservation),
            text: templates::reservation_confirmed_text(&n.reservation),
        },
    }
}

pub async fn send(ctx: Arc<Context>, notification: Notification) -> Result<()> {
    let mailer = ctx.mail.mailer.clone().ok_or(Error::NotConfigured)?;
    let email = render(&ctx, notification);

    tracing::debug!("Sending \"{}\" email to {}", email.subject, email.to);

    mailer.send(email).await
}
