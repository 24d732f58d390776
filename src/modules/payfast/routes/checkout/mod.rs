mod handler;
mod service;
mod types;

use crate::{types::Context, utils::http::method_not_allowed};
use axum::routing::{post, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route(
        "/checkout",
        post(handler::handler).fallback(method_not_allowed),
    )
}
