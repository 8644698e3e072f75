use anyhow::Context;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use drivenova_pricing::{cache, config::AppConfig, routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("drivenova_pricing=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();
    let bind_addr = config.bind_addr;
    info!("Catalog upstream: {}", config.catalog_base_url);

    let state = AppState::new(config).context("building application state")?;

    // Keep the catalog warm in the background
    tokio::spawn(cache::start_cache_warmer(
        state.cache.clone(),
        state.catalog.clone(),
        state.config.catalog_cache_ttl,
    ));

    let app = routes::router().with_state(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(CompressionLayer::new()),
    );

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    info!("Listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
