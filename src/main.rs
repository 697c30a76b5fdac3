//! cfpicker - Application Entry Point
//!
//! This is the main entry point for the cfpicker server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cfpicker::{
    codeforces::CodeforcesClient,
    config::{StoreBackend, CONFIG},
    constants::API_BASE_PATH,
    handlers,
    middleware::logging_middleware,
    picker::Sheet,
    services::{CatalogService, SheetService},
    state::AppState,
    store::{FileStore, KeyValueStore, MemoryStore, RedisStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting cfpicker server...");

    // Initialize the sheet store
    let store: Arc<dyn KeyValueStore> = match CONFIG.store.backend {
        StoreBackend::Redis => {
            tracing::info!("Connecting to Redis...");
            Arc::new(RedisStore::connect(&CONFIG.redis.url).await?)
        }
        StoreBackend::File => {
            tracing::info!(path = %CONFIG.store.file_path.display(), "Using file store");
            Arc::new(FileStore::new(CONFIG.store.file_path.clone()))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, the sheet will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    // Load the persisted sheet
    let sheet = match SheetService::load(store.as_ref(), &CONFIG.store.sheet_key).await {
        Ok(sheet) => sheet,
        Err(e) => {
            tracing::warn!(error = %e, "Could not read the stored sheet, starting empty");
            Sheet::new()
        }
    };

    // Initialize the Codeforces client
    let codeforces = CodeforcesClient::new(&CONFIG.codeforces)?;
    tracing::info!(base_url = %CONFIG.codeforces.base_url, "Codeforces client ready");

    // Create application state
    let state = AppState::new(Arc::new(codeforces), store, sheet, CONFIG.clone());

    // Initial catalog load
    let initial = state.clone();
    tokio::spawn(async move {
        if let Err(e) = CatalogService::refresh(&initial).await {
            tracing::warn!(error = %e, "Initial catalog load failed");
        }
    });

    // Build the router
    let app = Router::new()
        .nest(API_BASE_PATH, handlers::routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
