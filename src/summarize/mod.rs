use async_trait::async_trait;
use std::sync::Arc;

use crate::DigestError;

pub mod hf;

pub use hf::{GenerationParams, HuggingFaceSummarizer};

/// Trait for abstractive summarization of a single transcript chunk
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce a shorter text conveying the meaning of `chunk`
    async fn summarize_chunk(&self, chunk: &str) -> anyhow::Result<String>;
}

/// Split `text` into contiguous chunks of exactly `size` characters, except
/// the last, which holds the remainder.
///
/// Chunks are produced left-to-right with no overlap and no gap, so
/// concatenating them reconstructs the input exactly. Boundaries are purely
/// positional and may split a word or sentence mid-way; this is an accepted
/// simplicity/quality trade-off, not something to paper over with
/// sentence-aware splitting. Sizes are counted in characters (Unicode scalar
/// values), never bytes, so a boundary can never land inside a UTF-8
/// sequence.
///
/// Empty input yields an empty vector, never a single empty chunk.
pub fn chunk_text(text: &str, size: usize) -> Vec<String> {
    assert!(size > 0, "chunk size must be greater than zero");

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(size)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Drives the chunk-then-merge summarization pipeline: split the transcript
/// into bounded segments, summarize each in order, and join the partial
/// summaries into one final text.
pub struct SummaryAssembler {
    summarizer: Arc<dyn Summarizer>,
    chunk_size: usize,
}

impl SummaryAssembler {
    pub fn new(summarizer: Arc<dyn Summarizer>, chunk_size: usize) -> Self {
        Self {
            summarizer,
            chunk_size,
        }
    }

    /// Summarize a full transcript.
    ///
    /// Partial summaries appear in the same order as their source chunks.
    /// The first chunk failure aborts the whole operation; no partial result
    /// is ever returned. An empty transcript yields an empty summary without
    /// invoking the model.
    pub async fn summarize(&self, transcript: &str) -> Result<String, DigestError> {
        if transcript.is_empty() {
            return Ok(String::new());
        }

        let chunks = chunk_text(transcript, self.chunk_size);
        tracing::debug!(
            chunk_count = chunks.len(),
            transcript_chars = transcript.chars().count(),
            "summarizing transcript"
        );

        let mut summary = String::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let partial = self
                .summarizer
                .summarize_chunk(chunk)
                .await
                .map_err(|e| DigestError::Summarization(e.to_string()))?;

            tracing::trace!(chunk = index, partial_chars = partial.len(), "chunk summarized");

            summary.push_str(&partial);
            summary.push(' ');
        }

        Ok(summary.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_reconstruct_the_input() {
        let text = "the quick brown fox jumps over the lazy dog";
        let chunks = chunk_text(text, 7);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn chunk_count_is_ceiling_of_length_over_size() {
        let text = "a".repeat(2500);
        let chunks = chunk_text(&text, 1000);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 1000);
        assert_eq!(chunks[1].len(), 1000);
        assert_eq!(chunks[2].len(), 500);
    }

    #[test]
    fn exact_multiple_has_no_trailing_short_chunk() {
        let text = "a".repeat(2000);
        let chunks = chunk_text(&text, 1000);
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.len() == 1000));
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        assert!(chunk_text("", 1000).is_empty());
    }

    #[test]
    fn chunking_counts_characters_not_bytes() {
        // Four 3-byte characters; a byte-based splitter would panic here.
        let text = "日本語字";
        let chunks = chunk_text(text, 3);
        assert_eq!(chunks, vec!["日本語".to_string(), "字".to_string()]);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    #[should_panic]
    fn zero_chunk_size_panics() {
        chunk_text("abc", 0);
    }

    #[tokio::test]
    async fn empty_transcript_never_reaches_the_model() {
        let mut mock = MockSummarizer::new();
        mock.expect_summarize_chunk().times(0);

        let assembler = SummaryAssembler::new(Arc::new(mock), 1000);
        assert_eq!(assembler.summarize("").await.unwrap(), "");
    }

    #[tokio::test]
    async fn short_transcript_is_summarized_in_one_call() {
        let text = "a short transcript";

        let mut mock = MockSummarizer::new();
        mock.expect_summarize_chunk()
            .withf(|chunk| chunk == "a short transcript")
            .times(1)
            .returning(|_| Ok("short".to_string()));

        let assembler = SummaryAssembler::new(Arc::new(mock), 1000);
        assert_eq!(assembler.summarize(text).await.unwrap(), "short");
    }

    #[tokio::test]
    async fn long_transcript_is_split_on_fixed_boundaries() {
        let text = format!("{}{}{}", "a".repeat(1000), "b".repeat(1000), "c".repeat(500));

        let mut mock = MockSummarizer::new();
        mock.expect_summarize_chunk()
            .withf(|chunk| chunk == "a".repeat(1000))
            .times(1)
            .returning(|_| Ok("first".to_string()));
        mock.expect_summarize_chunk()
            .withf(|chunk| chunk == "b".repeat(1000))
            .times(1)
            .returning(|_| Ok("second".to_string()));
        mock.expect_summarize_chunk()
            .withf(|chunk| chunk == "c".repeat(500))
            .times(1)
            .returning(|_| Ok("third".to_string()));

        let assembler = SummaryAssembler::new(Arc::new(mock), 1000);
        let summary = assembler.summarize(&text).await.unwrap();

        // Partial summaries keep chunk order and are space-joined.
        assert_eq!(summary, "first second third");
    }

    #[tokio::test]
    async fn model_failure_aborts_with_the_original_cause() {
        let mut mock = MockSummarizer::new();
        mock.expect_summarize_chunk()
            .returning(|_| Err(anyhow::anyhow!("model warming up")));

        let assembler = SummaryAssembler::new(Arc::new(mock), 1000);
        let err = assembler.summarize("some transcript").await.unwrap_err();

        match err {
            DigestError::Summarization(message) => {
                assert!(message.contains("model warming up"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn final_summary_is_trimmed() {
        let mut mock = MockSummarizer::new();
        mock.expect_summarize_chunk()
            .times(1)
            .returning(|_| Ok("  padded summary  ".to_string()));

        let assembler = SummaryAssembler::new(Arc::new(mock), 1000);
        let summary = assembler.summarize("text").await.unwrap();
        assert_eq!(summary, "padded summary");
    }
}
