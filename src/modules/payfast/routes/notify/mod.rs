mod handler;
mod service;
pub mod types;

pub use handler::BODY_LIMIT;
pub use service::service;

use crate::{types::Context, utils::http::method_not_allowed};
use axum::{
    extract::DefaultBodyLimit,
    routing::{post, Router},
};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    // The handler reads the body itself so oversized notifications are
    // still acknowledged.
    Router::new().route(
        "/notify",
        post(handler::handler)
            .fallback(method_not_allowed)
            .layer(DefaultBodyLimit::disable()),
    )
}
