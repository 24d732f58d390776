use super::types::{request, response};
use crate::{
    modules::payfast::payment::{PaymentRequest, SignedPaymentForm},
    types::Context,
};
use bigdecimal::{BigDecimal, Zero};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .validate()
        .map_err(response::Error::FailedToValidate)?;

    if payload.amount <= BigDecimal::zero() {
        return Err(response::Error::InvalidAmount);
    }

    let m_payment_id = payload
        .m_payment_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis().to_string());

    let form = SignedPaymentForm::new(
        &ctx.payfast,
        PaymentRequest {
            name_first: payload.name_first,
            name_last: payload.name_last,
            email_address: payload.email_address,
            m_payment_id: m_payment_id.clone(),
            amount: payload.amount,
            item_name: payload.item_name,
        },
    );

    tracing::info!(
        "Redirecting payment {} to {} (sandbox: {})",
        m_payment_id,
        form.action,
        ctx.payfast.sandbox
    );

    Ok(response::Success::PaymentForm(form))
}
