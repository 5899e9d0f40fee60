use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Hugging Face Inference API settings
    pub hugging_face: HuggingFaceConfig,

    /// Summarization pipeline settings
    pub summarizer: SummarizerConfig,

    /// Transcript fetching settings
    pub transcript: TranscriptConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the listener to
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuggingFaceConfig {
    /// Base URL of the hosted inference API
    pub api_url: String,

    /// Bearer token; falls back to the HF_API_TOKEN environment variable
    pub api_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Summarization model identifier
    pub model: String,

    /// Transcript chunk size in characters
    pub chunk_size: usize,

    /// Upper bound on generated summary length per chunk (tokens)
    pub max_length: u32,

    /// Lower bound on generated summary length per chunk (tokens)
    pub min_length: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptConfig {
    /// Caption language codes to try, in preference order
    pub languages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5002,
            },
            hugging_face: HuggingFaceConfig {
                api_url: "https://api-inference.huggingface.co/models".to_string(),
                api_token: None,
            },
            summarizer: SummarizerConfig {
                model: "facebook/bart-large-cnn".to_string(),
                chunk_size: 1000,
                max_length: 150,
                min_length: 30,
            },
            transcript: TranscriptConfig {
                languages: vec!["en".to_string(), "hi".to_string()],
            },
        }
    }
}

impl Config {
    /// Load configuration from file or create default
    pub async fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let content = fs_err::read_to_string(&config_path)
                .context("Failed to read config file")?;

            let config: Config = serde_yaml::from_str(&content)
                .context("Failed to parse config file")?;

            config
        } else {
            let config = Self::default();
            config.save().await?;
            config
        };

        // The token is usually injected through the environment rather than
        // written into the config file.
        if config.hugging_face.api_token.is_none() {
            config.hugging_face.api_token = std::env::var("HF_API_TOKEN").ok();
        }

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub async fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs_err::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)
            .context("Failed to serialize config")?;

        fs_err::write(&config_path, content)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get configuration file path
    fn config_path() -> Result<PathBuf> {
        // First try current directory for easy testing
        let local_config = PathBuf::from("config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?;

        Ok(config_dir.join("tubesum").join("config.yaml"))
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.summarizer.chunk_size == 0 {
            anyhow::bail!("Summarizer chunk size must be greater than zero");
        }

        if self.summarizer.min_length > self.summarizer.max_length {
            anyhow::bail!(
                "Summarizer min_length ({}) exceeds max_length ({})",
                self.summarizer.min_length,
                self.summarizer.max_length
            );
        }

        if self.summarizer.model.is_empty() {
            anyhow::bail!("Summarization model must be configured");
        }

        if self.hugging_face.api_url.is_empty() {
            anyhow::bail!("Inference API URL must be configured");
        }

        Ok(())
    }

    /// Display current configuration
    pub fn display(&self) {
        println!("Current Configuration:");
        println!("  Listen Address: {}:{}", self.server.host, self.server.port);
        println!("  Inference API: {}", self.hugging_face.api_url);
        println!(
            "  API Token: {}",
            if self.hugging_face.api_token.is_some() {
                "configured"
            } else {
                "not set (requests are unauthenticated)"
            }
        );
        println!("  Summarization Model: {}", self.summarizer.model);
        println!("  Chunk Size: {} characters", self.summarizer.chunk_size);
        println!(
            "  Summary Length: {}-{} tokens per chunk",
            self.summarizer.min_length, self.summarizer.max_length
        );
        println!(
            "  Caption Languages: {}",
            self.transcript.languages.join(", ")
        );
    }
}
