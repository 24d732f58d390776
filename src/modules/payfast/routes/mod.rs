mod checkout;
pub mod notify;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().nest(
        "/payfast",
        Router::new()
            .merge(notify::get_router())
            .merge(checkout::get_router()),
    )
}
