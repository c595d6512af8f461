//! Wiring & DI. Entry point: load config, pick the classifier, serve the router.
//! No business logic here; requests are handled by NameAnalysisService.

use dotenv::dotenv;
use name_handler::adapters::ai::{MockClassifierAdapter, OllamaAdapter};
use name_handler::adapters::http::{AppState, router};
use name_handler::ports::NameClassifierPort;
use name_handler::shared::config::AppConfig;
use name_handler::usecases::NameAnalysisService;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        AppConfig::default()
    });

    // --- Classifier: chosen once here, never re-read per request ---
    let classifier: Arc<dyn NameClassifierPort> = if cfg.mock_mode() {
        warn!("MOCK_LLM is set, using rule-based mock classifier");
        Arc::new(MockClassifierAdapter::new())
    } else {
        let timeout = Duration::from_secs(cfg.request_timeout_secs_or_default());
        let adapter = OllamaAdapter::new(
            &cfg.ollama_url_or_default(),
            cfg.ollama_model_or_default(),
            timeout,
        )?;
        info!(
            url = %adapter.chat_url(),
            model = %cfg.ollama_model_or_default(),
            timeout_secs = timeout.as_secs(),
            "using Ollama classifier"
        );
        Arc::new(adapter)
    };

    let service = Arc::new(NameAnalysisService::new(classifier));
    let mode = service.mode();
    let app = router(AppState::new(service), cfg.max_upload_bytes_or_default());

    let bind_addr = cfg.bind_addr_or_default();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("bind {}: {}", bind_addr, e))?;

    name_handler::adapters::ui::print_welcome(mode, &bind_addr);
    info!(addr = %bind_addr, mode, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed the server runs until killed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
