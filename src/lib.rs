//! Tubesum - an HTTP service that condenses YouTube video transcripts
//!
//! This library fetches a video's caption transcript, runs it through a
//! chunked abstractive-summarization pipeline backed by a hosted inference
//! model, and exposes a small translation endpoint with a closed set of
//! supported target languages.

pub mod cli;
pub mod config;
pub mod server;
pub mod summarize;
pub mod transcript;
pub mod translate;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use server::{build_router, AppState};
pub use summarize::{chunk_text, SummaryAssembler, Summarizer};
pub use transcript::{extract_video_id, TranscriptSource};
pub use translate::{LanguageSupport, SupportedLanguages, TranslationService, Translator};

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Domain errors surfaced by the summarization and translation operations
#[derive(thiserror::Error, Debug)]
pub enum DigestError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Unsupported target language: {0}")]
    UnsupportedLanguage(String),

    #[error("Transcript fetch failed: {0}")]
    TranscriptFetch(String),

    #[error("Summarization failed: {0}")]
    Summarization(String),

    #[error("Translation failed: {0}")]
    Translation(String),
}

impl DigestError {
    /// Whether this error is caused by a malformed request rather than a
    /// collaborator failure
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DigestError::MissingField(_) | DigestError::UnsupportedLanguage(_)
        )
    }
}
