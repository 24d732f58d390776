use crate::{modules, types::Context};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

pub fn router(ctx: Arc<Context>) -> Router {
    Router::new()
        .nest("/api", modules::get_router())
        .with_state(ctx)
        .layer(DefaultBodyLimit::max(1024 * 64))
        .layer(trace::TraceLayer::new_for_http())
        .layer(
            cors::CorsLayer::new()
                .allow_methods([Method::OPTIONS, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
                .allow_origin(cors::Any),
        )
}

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        Self {
            router: router(ctx.clone()),
            ctx,
        }
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let address = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(&address).await?;

        tracing::info!("App is running on {}", address);

        axum::serve(listener, self.router).await
    }
}
