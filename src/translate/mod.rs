use async_trait::async_trait;
use std::sync::Arc;

use crate::DigestError;

pub mod hf;

pub use hf::HuggingFaceTranslator;

/// Fixed message returned for the reserved `braille` language code.
pub const BRAILLE_PLACEHOLDER: &str =
    "Braille translation is handled on-device; the original text is returned unchanged for rendering by a braille display.";

/// Trait for translating text into a target language
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into the language identified by `target`
    async fn translate(&self, text: &str, target: &str) -> anyhow::Result<String>;
}

/// Outcome of validating a target-language code against the supported set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSupport {
    /// Code is not in the supported set; the request must be rejected
    Unsupported,
    /// Reserved `braille` code; return the fixed placeholder without
    /// invoking the translation collaborator
    PlaceholderOnly,
    /// Supported code; delegate to the translation collaborator
    Proceed,
}

/// The closed set of target-language codes the translate endpoint accepts
pub struct SupportedLanguages {
    entries: &'static [(&'static str, &'static str)],
}

impl SupportedLanguages {
    pub fn new() -> Self {
        Self {
            entries: &[
                ("hi", "Hindi"),
                ("en", "English"),
                ("fr", "French"),
                ("es", "Spanish"),
                ("braille", "Braille"),
            ],
        }
    }

    /// Validate a target-language code. Membership is checked before any
    /// translation attempt.
    pub fn validate(&self, code: &str) -> LanguageSupport {
        if !self.entries.iter().any(|(c, _)| *c == code) {
            return LanguageSupport::Unsupported;
        }

        if code == "braille" {
            return LanguageSupport::PlaceholderOnly;
        }

        LanguageSupport::Proceed
    }

    /// Iterate over `(code, display name)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

impl Default for SupportedLanguages {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates the target language and delegates to the translation
/// collaborator for supported codes.
pub struct TranslationService {
    languages: SupportedLanguages,
    translator: Arc<dyn Translator>,
}

impl TranslationService {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            languages: SupportedLanguages::new(),
            translator,
        }
    }

    /// Translate `text` into `target`, which must be a supported code.
    ///
    /// The reserved `braille` code short-circuits to a fixed placeholder;
    /// a collaborator failure surfaces as `DigestError::Translation` with
    /// the original cause's message.
    pub async fn translate(&self, text: &str, target: &str) -> Result<String, DigestError> {
        match self.languages.validate(target) {
            LanguageSupport::Unsupported => {
                Err(DigestError::UnsupportedLanguage(target.to_string()))
            }
            LanguageSupport::PlaceholderOnly => Ok(BRAILLE_PLACEHOLDER.to_string()),
            LanguageSupport::Proceed => self
                .translator
                .translate(text, target)
                .await
                .map_err(|e| DigestError::Translation(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_are_unsupported() {
        let languages = SupportedLanguages::new();
        assert_eq!(languages.validate("xx"), LanguageSupport::Unsupported);
        assert_eq!(languages.validate("de"), LanguageSupport::Unsupported);
        assert_eq!(languages.validate(""), LanguageSupport::Unsupported);
        // Codes are case-sensitive.
        assert_eq!(languages.validate("EN"), LanguageSupport::Unsupported);
    }

    #[test]
    fn braille_is_placeholder_only() {
        let languages = SupportedLanguages::new();
        assert_eq!(languages.validate("braille"), LanguageSupport::PlaceholderOnly);
    }

    #[test]
    fn supported_codes_proceed() {
        let languages = SupportedLanguages::new();
        for code in ["hi", "en", "fr", "es"] {
            assert_eq!(languages.validate(code), LanguageSupport::Proceed);
        }
    }

    #[tokio::test]
    async fn braille_never_invokes_the_collaborator() {
        let mut mock = MockTranslator::new();
        mock.expect_translate().times(0);

        let service = TranslationService::new(Arc::new(mock));
        let translated = service.translate("hello", "braille").await.unwrap();
        assert_eq!(translated, BRAILLE_PLACEHOLDER);
    }

    #[tokio::test]
    async fn supported_code_returns_collaborator_output_verbatim() {
        let mut mock = MockTranslator::new();
        mock.expect_translate()
            .withf(|text, target| text == "hello" && target == "hi")
            .times(1)
            .returning(|_, _| Ok("नमस्ते".to_string()));

        let service = TranslationService::new(Arc::new(mock));
        let translated = service.translate("hello", "hi").await.unwrap();
        assert_eq!(translated, "नमस्ते");
    }

    #[tokio::test]
    async fn unsupported_code_is_rejected_before_translation() {
        let mut mock = MockTranslator::new();
        mock.expect_translate().times(0);

        let service = TranslationService::new(Arc::new(mock));
        let err = service.translate("hello", "xx").await.unwrap_err();
        assert!(matches!(err, DigestError::UnsupportedLanguage(code) if code == "xx"));
    }

    #[tokio::test]
    async fn collaborator_failure_surfaces_with_its_detail() {
        let mut mock = MockTranslator::new();
        mock.expect_translate()
            .returning(|_, _| Err(anyhow::anyhow!("upstream quota exceeded")));

        let service = TranslationService::new(Arc::new(mock));
        let err = service.translate("hello", "fr").await.unwrap_err();

        match err {
            DigestError::Translation(message) => {
                assert!(message.contains("upstream quota exceeded"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
