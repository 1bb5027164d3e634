//! Trait definitions for the two remote collaborators of a practice session.
//!
//! Implemented over HTTP by `vocabdrill-client` and by [`MockService`] in
//! tests.
//!
//! [`MockService`]: crate::mock::MockService

use async_trait::async_trait;

use crate::model::{SentenceSubmission, ValidationResult, Word};

/// Source of vocabulary words.
#[async_trait]
pub trait WordService: Send + Sync {
    /// Fetch the next word to practice.
    async fn fetch_word(&self) -> anyhow::Result<Word>;
}

/// Remote scorer for learner sentences.
#[async_trait]
pub trait ValidationService: Send + Sync {
    /// Score a sentence written for the given word.
    async fn validate_sentence(
        &self,
        submission: &SentenceSubmission,
    ) -> anyhow::Result<ValidationResult>;
}
