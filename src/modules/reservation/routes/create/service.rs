use super::types::{request, response};
use crate::{
    modules::notification::{self, service::Notification},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let email_address = payload
        .form_data
        .as_ref()
        .and_then(|form| form.email())
        .map(String::from)
        .ok_or(response::Error::MissingEmail)?;

    if ctx.mail.mailer.is_none() {
        tracing::error!("Reservation: EMAIL_USER or EMAIL_PASS not set");
        return Err(response::Error::EmailNotConfigured);
    }

    notification::service::send(
        ctx.clone(),
        Notification::reservation_received(ctx.mail.reservation_recipient(), payload.clone()),
    )
    .await
    .map_err(|err| {
        tracing::error!("Reservation: Failed to notify sales: {}", err);
        response::Error::FailedToSend
    })?;

    notification::service::send(
        ctx.clone(),
        Notification::reservation_confirmed(email_address.clone(), payload),
    )
    .await
    .map_err(|err| {
        tracing::error!(
            "Reservation: Failed to send confirmation to {}: {}",
            email_address,
            err
        );
        response::Error::FailedToSend
    })?;

    tracing::info!("Reservation recorded for {}", email_address);

    Ok(response::Success::Reserved)
}
