use std::{net::SocketAddr, path::Path};

use axum::Router;
use configs::{AppConfig, ServerConfig, StorageBackend};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{errors::StartupError, routes, state::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Config from file when present, otherwise from environment variables.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = configs::config_path();
    let cfg = if Path::new(&path).exists() {
        AppConfig::load_and_validate()
    } else {
        info!(%path, "config file not found; using environment");
        AppConfig::from_env()
    };
    cfg.map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

/// Open the configured storage and wire the services on top of it.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    match cfg.storage.backend {
        StorageBackend::Memory => {
            warn!("using in-memory storage; catalog data is lost on restart");
            Ok(AppState::in_memory())
        }
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None).await?;
            info!("database migrations applied");
            Ok(AppState::with_database(db))
        }
    }
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app from a resolved config and serve until Ctrl+C.
///
/// The binary resolves `cfg` with [`load_config`] before building the runtime,
/// so worker threads and the server share one config.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, backend = ?cfg.storage.backend, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let s = ServerConfig { host: "0.0.0.0".into(), port: 9090, worker_threads: None };
        assert_eq!(bind_addr(&s).unwrap().to_string(), "0.0.0.0:9090");
    }

    #[test]
    fn bind_addr_rejects_hostnames() {
        let s = ServerConfig { host: "not a host".into(), port: 9090, worker_threads: None };
        assert!(bind_addr(&s).is_err());
    }

    #[test]
    fn load_config_without_file_uses_env_and_normalizes_threads() {
        std::env::set_var("CONFIG_PATH", "/nonexistent/farmacia-config.toml");
        std::env::set_var("STORAGE_BACKEND", "memory");
        std::env::remove_var("TOKIO_WORKER_THREADS");
        let cfg = load_config().unwrap();
        assert_eq!(cfg.storage.backend, StorageBackend::Memory);
        assert_eq!(cfg.server.worker_threads, Some(4));

        std::env::set_var("TOKIO_WORKER_THREADS", "3");
        assert_eq!(load_config().unwrap().server.worker_threads, Some(3));
        std::env::remove_var("TOKIO_WORKER_THREADS");
    }

    #[tokio::test]
    async fn memory_backend_needs_no_database() {
        let mut cfg = AppConfig::default();
        cfg.storage.backend = StorageBackend::Memory;
        let state = build_state(&cfg).await.unwrap();
        assert!(state.categories.list().await.unwrap().is_empty());
    }
}
