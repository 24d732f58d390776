use alameen_backend_rs::{
    app::App,
    types::{Config, ToContext},
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let ctx = match Config::from_env().and_then(|config| config.to_context()) {
        Ok(ctx) => Arc::new(ctx),
        Err(err) => {
            tracing::error!("Failed to load configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        "PayFast {} mode, signature checks {}",
        match ctx.payfast.sandbox {
            true => "sandbox",
            false => "live",
        },
        match ctx.payfast.passphrase {
            Some(_) => "enabled",
            None => "disabled",
        }
    );

    match App::new(ctx).serve().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Server stopped: {}", err);
            ExitCode::FAILURE
        }
    }
}
