//! Scripted service double for testing.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::error::ServiceError;
use crate::model::{SentenceSubmission, ValidationResult, Word};
use crate::traits::{ValidationService, WordService};

struct Scripted<T> {
    reply: Result<T, ServiceError>,
    gate: Option<oneshot::Receiver<()>>,
}

/// A word and validation service that replays queued responses in order.
///
/// Responses can be gated: the call suspends until the returned sender fires
/// (or is dropped), which lets tests interleave overlapping requests.
#[derive(Default)]
pub struct MockService {
    words: Mutex<VecDeque<Scripted<Word>>>,
    validations: Mutex<VecDeque<Scripted<ValidationResult>>>,
    word_calls: AtomicU32,
    validate_calls: AtomicU32,
    last_submission: Mutex<Option<SentenceSubmission>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_word(&self, word: Word) {
        push(&self.words, Ok(word), None);
    }

    pub fn push_word_error(&self, error: ServiceError) {
        push(&self.words, Err(error), None);
    }

    /// Queue a word that is only delivered once the returned sender fires.
    pub fn push_word_gated(&self, word: Word) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        push(&self.words, Ok(word), Some(rx));
        tx
    }

    pub fn push_validation(&self, result: ValidationResult) {
        push(&self.validations, Ok(result), None);
    }

    pub fn push_validation_error(&self, error: ServiceError) {
        push(&self.validations, Err(error), None);
    }

    pub fn push_validation_gated(&self, result: ValidationResult) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        push(&self.validations, Ok(result), Some(rx));
        tx
    }

    pub fn word_calls(&self) -> u32 {
        self.word_calls.load(Ordering::Relaxed)
    }

    pub fn validate_calls(&self) -> u32 {
        self.validate_calls.load(Ordering::Relaxed)
    }

    pub fn last_submission(&self) -> Option<SentenceSubmission> {
        self.last_submission
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

fn push<T>(
    queue: &Mutex<VecDeque<Scripted<T>>>,
    reply: Result<T, ServiceError>,
    gate: Option<oneshot::Receiver<()>>,
) {
    queue
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .push_back(Scripted { reply, gate });
}

async fn replay<T>(queue: &Mutex<VecDeque<Scripted<T>>>, what: &str) -> anyhow::Result<T> {
    let next = queue.lock().unwrap_or_else(|e| e.into_inner()).pop_front();
    let Some(scripted) = next else {
        return Err(ServiceError::NetworkError(format!("no scripted {what} response")).into());
    };
    if let Some(gate) = scripted.gate {
        // A dropped sender releases the gate as well.
        let _ = gate.await;
    }
    Ok(scripted.reply?)
}

#[async_trait]
impl WordService for MockService {
    async fn fetch_word(&self) -> anyhow::Result<Word> {
        self.word_calls.fetch_add(1, Ordering::Relaxed);
        replay(&self.words, "word").await
    }
}

#[async_trait]
impl ValidationService for MockService {
    async fn validate_sentence(
        &self,
        submission: &SentenceSubmission,
    ) -> anyhow::Result<ValidationResult> {
        self.validate_calls.fetch_add(1, Ordering::Relaxed);
        *self.last_submission.lock().unwrap_or_else(|e| e.into_inner()) =
            Some(submission.clone());
        replay(&self.validations, "validation").await
    }
}
