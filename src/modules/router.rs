use super::{payfast, reservation};
use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(payfast::routes::get_router())
        .merge(reservation::routes::get_router())
}
