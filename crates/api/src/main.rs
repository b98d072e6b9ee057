use std::net::SocketAddr;
use std::sync::Arc;

use alunos_db::store::{AlunoStore, MemoryAlunoStore, PgAlunoStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alunos_api::config::{ServerConfig, StoreBackend};
use alunos_api::router::build_app_router;
use alunos_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alunos_api=debug,alunos_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");
    tracing::info!(
        host = %config.host,
        port = %config.port,
        backend = ?config.store_backend,
        "Loaded server configuration"
    );

    // --- Store ---
    let store = connect_store(&config).await;

    // --- App state ---
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Open the configured store. Any failure here is fatal: the server never
/// starts without a working store.
async fn connect_store(config: &ServerConfig) -> Arc<dyn AlunoStore> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data will not survive a restart");
            Arc::new(MemoryAlunoStore::new())
        }
        StoreBackend::Postgres => {
            let pool = alunos_db::create_pool(&config.database_url, config.db_max_connections)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            alunos_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            alunos_db::ensure_schema(&pool)
                .await
                .expect("Failed to create alunos schema");
            tracing::info!("Database schema ready");

            Arc::new(PgAlunoStore::new(pool))
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
