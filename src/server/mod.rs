use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::summarize::{HuggingFaceSummarizer, SummaryAssembler};
use crate::transcript::{TranscriptSource, YoutubeTranscriptSource};
use crate::translate::{HuggingFaceTranslator, TranslationService};

pub mod handlers;

/// Shared application state passed to Axum handlers.
///
/// The collaborator clients are process-lifetime singletons constructed once
/// at startup; handlers share them by handle rather than through globals.
#[derive(Clone)]
pub struct AppState {
    pub transcripts: Arc<dyn TranscriptSource>,
    pub assembler: Arc<SummaryAssembler>,
    pub translation: Arc<TranslationService>,
}

impl AppState {
    /// Wire up the production collaborators from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let transcripts = YoutubeTranscriptSource::new(&config.transcript)
            .context("Failed to initialize the transcript source")?;

        let summarizer = HuggingFaceSummarizer::new(&config.hugging_face, &config.summarizer);
        let assembler = SummaryAssembler::new(Arc::new(summarizer), config.summarizer.chunk_size);

        let translator = HuggingFaceTranslator::new(&config.hugging_face);
        let translation = TranslationService::new(Arc::new(translator));

        Ok(Self {
            transcripts: Arc::new(transcripts),
            assembler: Arc::new(assembler),
            translation: Arc::new(translation),
        })
    }
}

/// Build the Axum router with all routes.
///
/// Cross-origin requests are universally permitted: this is a
/// development-stage service and the CORS policy must be tightened before
/// any production exposure.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/summary", post(handlers::summarize_video))
        .route("/translate", post(handlers::translate_text))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Create and start the server. Returns a handle carrying the bound port.
pub async fn start(host: &str, port: u16, state: AppState) -> Result<ServerHandle, std::io::Error> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(port = local_addr.port(), "tubesum server started");

    let task = tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    Ok(ServerHandle {
        port: local_addr.port(),
        task,
    })
}

/// Handle returned by `start()` — keeps the server task alive.
pub struct ServerHandle {
    pub port: u16,
    task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Run until the server task exits
    pub async fn wait(self) -> Result<()> {
        self.task.await.context("Server task failed")
    }
}

async fn health_handler() -> &'static str {
    "ok"
}
