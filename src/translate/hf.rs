use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::Translator;
use crate::config::HuggingFaceConfig;

#[derive(Deserialize)]
struct TranslationOutput {
    translation_text: String,
}

/// Translator backed by hosted Helsinki-NLP opus-mt models, one per target
/// language
pub struct HuggingFaceTranslator {
    client: reqwest::Client,
    api_url: String,
    api_token: Option<String>,
}

impl HuggingFaceTranslator {
    pub fn new(hf: &HuggingFaceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: hf.api_url.trim_end_matches('/').to_string(),
            api_token: hf.api_token.clone(),
        }
    }

    /// Hosted model for a supported target language.
    ///
    /// The validator runs before this, so an unknown code here means the
    /// supported set and the model table have drifted apart.
    fn model_for(target: &str) -> Option<&'static str> {
        match target {
            "hi" => Some("Helsinki-NLP/opus-mt-en-hi"),
            "fr" => Some("Helsinki-NLP/opus-mt-en-fr"),
            "es" => Some("Helsinki-NLP/opus-mt-en-es"),
            "en" => Some("Helsinki-NLP/opus-mt-mul-en"),
            _ => None,
        }
    }
}

#[async_trait]
impl Translator for HuggingFaceTranslator {
    async fn translate(&self, text: &str, target: &str) -> Result<String> {
        let model = Self::model_for(target)
            .ok_or_else(|| anyhow::anyhow!("No translation model configured for '{target}'"))?;

        tracing::debug!(target, model, text_chars = text.chars().count(), "requesting translation");

        let mut request = self
            .client
            .post(format!("{}/{}", self.api_url, model))
            .json(&serde_json::json!({ "inputs": text }));

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .context("Failed to reach the translation model")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Translation model returned HTTP {}: {}", status, body);
        }

        let outputs: Vec<TranslationOutput> = response
            .json()
            .await
            .context("Failed to parse translation response")?;

        outputs
            .into_iter()
            .next()
            .map(|output| output.translation_text)
            .ok_or_else(|| anyhow::anyhow!("Translation model returned no output"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::{LanguageSupport, SupportedLanguages};

    #[test]
    fn every_proceed_language_has_a_model() {
        let languages = SupportedLanguages::new();
        for (code, _) in languages.iter() {
            if languages.validate(code) == LanguageSupport::Proceed {
                assert!(
                    HuggingFaceTranslator::model_for(code).is_some(),
                    "no model mapped for supported language '{code}'"
                );
            }
        }
    }

    #[test]
    fn braille_has_no_model() {
        assert!(HuggingFaceTranslator::model_for("braille").is_none());
    }
}
