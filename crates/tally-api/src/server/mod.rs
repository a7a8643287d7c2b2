//! Server setup and initialization
//!
//! Builds the stores selected by configuration, the application router, and
//! runs the HTTP server until a shutdown signal arrives.

use std::sync::Arc;

use axum::Router;
use tally_cache::{RedisCooldownStore, RedisPool};
use tally_common::{AppConfig, AppError, StorageBackend};
use tally_core::traits::{CooldownStore, TallyStore};
use tally_db::{create_pool, ensure_schema, MemoryStore, PgCooldownStore, PgPoolConfig, PgTallyStore};
use tally_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.cors,
        config.app.env.is_production(),
    );
    router.with_state(state)
}

/// Open the configured stores and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let (tally_store, mut cooldown_store) = open_stores(&config).await?;

    if let Some(redis) = &config.redis {
        info!("Keeping vote cooldowns in Redis");
        let pool = RedisPool::from_config(redis).map_err(|e| AppError::Cache(e.to_string()))?;
        let redis_store: Arc<dyn CooldownStore> = Arc::new(RedisCooldownStore::new(pool));
        cooldown_store = redis_store;
    }

    let service_context = ServiceContextBuilder::new()
        .tally_store(tally_store)
        .cooldown_store(cooldown_store)
        .voting(config.voting.clone())
        .storage_timeout(config.storage.timeout())
        .build()?;

    Ok(AppState::new(service_context, config))
}

type Stores = (Arc<dyn TallyStore>, Arc<dyn CooldownStore>);

/// One memory store serves both roles
fn shared(store: MemoryStore) -> Stores {
    let store = Arc::new(store);
    (store.clone(), store)
}

/// Tally and cooldown stores for the configured backend
async fn open_stores(config: &AppConfig) -> Result<Stores, AppError> {
    match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage; votes are lost on restart");
            Ok(shared(MemoryStore::new()))
        }
        StorageBackend::File => {
            let path = &config.storage.file_path;
            info!(path = %path, "Using snapshot file storage");
            let store = MemoryStore::open(path)
                .await
                .map_err(|e| AppError::Storage(e.to_string()))?;
            Ok(shared(store))
        }
        StorageBackend::Postgres => {
            let database = config
                .database
                .as_ref()
                .ok_or_else(|| AppError::config("DATABASE_URL is required for the postgres backend"))?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&PgPoolConfig::from(database))
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            ensure_schema(&pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            let tally: Arc<dyn TallyStore> = Arc::new(PgTallyStore::new(pool.clone()));
            let cooldown: Arc<dyn CooldownStore> = Arc::new(PgCooldownStore::new(pool));
            Ok((tally, cooldown))
        }
    }
}

/// Serve `app` on an already bound listener until a shutdown signal arrives
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
