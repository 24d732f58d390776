use super::{
    service::service,
    types::{request, response},
};
use crate::{modules::payfast::fields::FieldList, types::Context};
use axum::{body::Body, extract::State};
use std::sync::Arc;

/// Largest notification body that is decoded. Anything bigger is
/// acknowledged like any other malformed body.
pub const BODY_LIMIT: usize = 1024 * 64;

pub async fn handler(State(ctx): State<Arc<Context>>, body: Body) -> response::Acknowledged {
    let fields = match axum::body::to_bytes(body, BODY_LIMIT).await {
        Ok(bytes) => FieldList::from_form(bytes.as_ref()).unwrap_or_else(|err| {
            tracing::warn!("ITN: Failed to decode notification body: {}", err);
            FieldList::new()
        }),
        Err(err) => {
            tracing::warn!("ITN: Failed to read notification body: {}", err);
            FieldList::new()
        }
    };

    let outcome = service(ctx, request::Payload { fields }).await;
    outcome.log();

    response::Acknowledged::from(outcome)
}
