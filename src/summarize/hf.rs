use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::Summarizer;
use crate::config::{HuggingFaceConfig, SummarizerConfig};

/// Generation parameters sent with every summarization request.
///
/// Decoding is deterministic (`do_sample: false`); the length bounds are a
/// soft constraint the model is not guaranteed to obey exactly.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationParams {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

#[derive(Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParams,
}

#[derive(Deserialize)]
struct SummarizationOutput {
    summary_text: String,
}

/// Summarizer backed by the Hugging Face hosted Inference API
pub struct HuggingFaceSummarizer {
    client: reqwest::Client,
    endpoint: String,
    api_token: Option<String>,
    params: GenerationParams,
}

impl HuggingFaceSummarizer {
    pub fn new(hf: &HuggingFaceConfig, summarizer: &SummarizerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!(
                "{}/{}",
                hf.api_url.trim_end_matches('/'),
                summarizer.model
            ),
            api_token: hf.api_token.clone(),
            params: GenerationParams {
                max_length: summarizer.max_length,
                min_length: summarizer.min_length,
                do_sample: false,
            },
        }
    }
}

#[async_trait]
impl Summarizer for HuggingFaceSummarizer {
    async fn summarize_chunk(&self, chunk: &str) -> Result<String> {
        tracing::debug!(chunk_chars = chunk.chars().count(), "requesting chunk summary");

        let mut request = self.client.post(&self.endpoint).json(&SummarizationRequest {
            inputs: chunk,
            parameters: &self.params,
        });

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .context("Failed to reach the summarization model")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Summarization model returned HTTP {}: {}", status, body);
        }

        let outputs: Vec<SummarizationOutput> = response
            .json()
            .await
            .context("Failed to parse summarization response")?;

        outputs
            .into_iter()
            .next()
            .map(|output| output.summary_text)
            .ok_or_else(|| anyhow::anyhow!("Summarization model returned no output"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn endpoint_joins_api_url_and_model() {
        let config = Config::default();
        let summarizer = HuggingFaceSummarizer::new(&config.hugging_face, &config.summarizer);
        assert_eq!(
            summarizer.endpoint,
            "https://api-inference.huggingface.co/models/facebook/bart-large-cnn"
        );
    }

    #[test]
    fn generation_params_serialize_with_greedy_decoding() {
        let params = GenerationParams {
            max_length: 150,
            min_length: 30,
            do_sample: false,
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["do_sample"], serde_json::json!(false));
        assert_eq!(json["max_length"], serde_json::json!(150));
        assert_eq!(json["min_length"], serde_json::json!(30));
    }
}
