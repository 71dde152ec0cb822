use std::net::SocketAddr;

use anyhow::Context;
use courier_api::{app, app_config, AppState};
use courier_core::ProviderContext;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courier_api=debug,courier_core=info,courier_custom=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = app_config::Config::load().context("Failed to load config")?;
    let context = ProviderContext {
        run_mode: app_config::run_mode(),
    };

    let state = AppState::from_config(&config, context)?;
    tracing::info!("Fulfillment providers: {:?}", state.registry.identifiers());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
