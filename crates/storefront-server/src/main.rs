mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use storefront_page::PredictionSource;
use storefront_recommend::{RecommendClient, RecommendationAdapter};

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = storefront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let catalog = storefront_core::load_catalog(&config.catalog_path)?;
    tracing::info!(
        env = %config.env,
        products = catalog.products().len(),
        catalog = %config.catalog_path.display(),
        "catalog loaded"
    );

    let client = RecommendClient::from_config(&config)?;
    let adapter = RecommendationAdapter::new(&config.recommend_canonical_host);

    let state = AppState {
        catalog: Arc::new(catalog),
        recommendations: Arc::new(PredictionSource::new(client, adapter)),
        locale: config.locale.clone(),
    };
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "storefront server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
