use anyhow::Result;
use codepulse::application::services::ApplicationServices;
use codepulse::config::{AppConfig, StorageBackend};
use codepulse::domain::category::{CategoryReadRepository, CategoryWriteRepository};
use codepulse::infrastructure::{
    database,
    repositories::{InMemoryCategoryRepository, PostgresCategoryRepository},
};
use codepulse::presentation::http::{
    routes::{RouterOptions, build_router_with_options},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let (category_write_repo, category_read_repo) = build_repositories(&config).await?;

    let services = Arc::new(ApplicationServices::new(
        category_write_repo,
        category_read_repo,
        config.unique_url_handles(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router_with_options(state, &RouterOptions::from_config(&config));
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        storage = ?config.storage_backend(),
        unique_url_handles = config.unique_url_handles(),
        "listening on {address}"
    );

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build_repositories(
    config: &AppConfig,
) -> Result<(
    Arc<dyn CategoryWriteRepository>,
    Arc<dyn CategoryReadRepository>,
)> {
    match config.storage_backend() {
        StorageBackend::Postgres => {
            let pool =
                database::init_pool(config.database_url(), config.database_max_connections())
                    .await?;
            database::run_migrations(&pool).await?;
            let repo = Arc::new(PostgresCategoryRepository::new(pool));
            let write_repo: Arc<dyn CategoryWriteRepository> = repo.clone();
            let read_repo: Arc<dyn CategoryReadRepository> = repo;
            Ok((write_repo, read_repo))
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory category storage; data is lost on shutdown");
            let repo = Arc::new(InMemoryCategoryRepository::new());
            let write_repo: Arc<dyn CategoryWriteRepository> = repo.clone();
            let read_repo: Arc<dyn CategoryReadRepository> = repo;
            Ok((write_repo, read_repo))
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
