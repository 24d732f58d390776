use super::types::{request, response::Outcome};
use crate::{
    modules::{
        notification::{self, service::Notification},
        payfast::signature,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> Outcome {
    // Without a configured passphrase every notification is accepted.
    if let Some(passphrase) = ctx.payfast.passphrase.as_deref() {
        if !signature::verify(&payload.fields, Some(passphrase)) {
            return Outcome::SignatureMismatch;
        }
    }

    if !payload.is_complete() {
        return Outcome::Ignored {
            status: payload.payment_status().unwrap_or_default().to_string(),
        };
    }

    let Some(email_address) = payload.email_address() else {
        return Outcome::MissingContact;
    };

    if ctx.mail.mailer.is_none() {
        return Outcome::MailNotConfigured;
    }

    tracing::info!(
        "ITN: Payment {} complete",
        payload.payment_id().unwrap_or("<unknown>")
    );

    let notification = Notification::order_confirmed(
        email_address.to_string(),
        payload.customer_name(),
        payload.amount().map(String::from),
    );

    match notification::service::send(ctx.clone(), notification).await {
        Ok(()) => Outcome::Sent {
            email_address: email_address.to_string(),
        },
        Err(err) => Outcome::SendFailed(err),
    }
}
