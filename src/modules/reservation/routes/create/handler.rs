use super::{
    service::service,
    types::{request, response},
};
use crate::types::Context;
use axum::extract::State;
use bytes::Bytes;
use std::sync::Arc;

pub async fn handler(State(ctx): State<Arc<Context>>, body: Bytes) -> response::Response {
    // An empty body reads as `{}`.
    let body = match body.is_empty() {
        true => Bytes::from_static(b"{}"),
        false => body,
    };

    let payload = serde_json::from_slice::<request::Payload>(&body).map_err(|err| {
        tracing::warn!("Reservation: Failed to parse body: {}", err);
        response::Error::InvalidJson
    })?;

    service(ctx, payload).await
}
