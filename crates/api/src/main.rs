use std::sync::Arc;

use infra::{db, seed, MemStore, PgStore, Store};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app::build_router;
use api::config::{Config, StorageBackend};
use api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let (store, pool): (Arc<dyn Store>, Option<db::Db>) = match &config.storage {
        StorageBackend::Memory { seed_sample_data } => {
            let store = MemStore::new();
            if *seed_sample_data {
                seed::seed(&store).await?;
            }
            tracing::info!("Using in-memory store");
            let store: Arc<dyn Store> = Arc::new(store);
            (store, None)
        }
        StorageBackend::Postgres { database_url, max_connections } => {
            let pool = db::connect(database_url, *max_connections).await?;
            db::migrate(&pool).await?;
            tracing::info!("Connected to Postgres");
            let store: Arc<dyn Store> = Arc::new(PgStore::new(pool.clone()));
            (store, Some(pool))
        }
    };

    let app = build_router(AppState::new(store), config.request_timeout);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
    }
    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
