use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use translation_gateway::config::Config;
use translation_gateway::server::{self, AppState};
use translation_gateway::translation::{
    LibreTranslateProvider, LocalFallbackProvider, TranslationProvider, TranslationService,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when the file is absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translation_gateway=info".parse()?),
        )
        .init();

    // Load configuration from environment
    let config = Config::from_env()?;

    // Failover order: remote API first, local fallback last
    let providers: Vec<Arc<dyn TranslationProvider>> = vec![
        Arc::new(LibreTranslateProvider::new(&config)?),
        Arc::new(LocalFallbackProvider::new()),
    ];
    let service = TranslationService::new(providers);

    info!(
        "Starting {} ({}) with providers {:?}",
        config.app_name,
        config.app_env,
        service.provider_names()
    );

    let bind_address = config.bind_address();
    let app = server::router(AppState::new(config, service));

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Keep serving; without a signal handler there is nothing to wait for
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
