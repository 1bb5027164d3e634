//! The practice session value type and its transitions.
//!
//! A [`Session`] is plain data. Every mutation goes through one of the
//! transition methods below, which the controller calls around its network
//! requests. Requests are tagged with a sequence number when issued; a
//! completion whose tag is no longer pending is reported as
//! [`Transition::Stale`] and leaves the session untouched.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::error::SessionError;
use crate::model::{SentenceSubmission, ValidationResult, Word};

/// Identifies one issued request. Tags increase monotonically per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTag(u64);

impl RequestTag {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Outcome of applying a completion to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The completion was current and the session changed.
    Applied,
    /// The completion belongs to a superseded request and was dropped.
    Stale,
}

/// Coarse state of the session, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No word has been loaded yet.
    Empty,
    /// A word is loaded and no result is shown.
    WordReady,
    /// A sentence is being validated.
    Submitting,
    /// A result for the current word is shown.
    Resulted,
}

/// Why a submission was refused without issuing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no word is loaded")]
    NoWord,
    #[error("the sentence is empty")]
    EmptyDraft,
    #[error("a sentence is already being validated")]
    SubmissionInFlight,
    #[error("a new word is still loading")]
    WordLoading,
}

/// Transient client-side state for one practice run.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    word: Option<Word>,
    draft: String,
    result: Option<ValidationResult>,
    submitted: bool,
    error: Option<SessionError>,
    last_tag: u64,
    pending_word: Option<RequestTag>,
    pending_submission: Option<RequestTag>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            word: None,
            draft: String::new(),
            result: None,
            submitted: false,
            error: None,
            last_tag: 0,
            pending_word: None,
            pending_submission: None,
        }
    }

    fn issue_tag(&mut self) -> RequestTag {
        self.last_tag += 1;
        RequestTag(self.last_tag)
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Clear everything tied to the current word and register a new word
    /// request. Any pending word request or submission is superseded.
    pub fn begin_word_request(&mut self) -> RequestTag {
        self.error = None;
        self.result = None;
        self.submitted = false;
        self.draft.clear();
        self.pending_submission = None;

        let tag = self.issue_tag();
        self.pending_word = Some(tag);
        tag
    }

    /// Replace the current word with a freshly loaded one.
    pub fn apply_word_loaded(&mut self, tag: RequestTag, word: Word) -> Transition {
        if self.pending_word != Some(tag) {
            return Transition::Stale;
        }
        self.pending_word = None;
        self.word = Some(word);
        Transition::Applied
    }

    /// Replace the draft. Never rejected.
    pub fn apply_draft_change(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Check the submission preconditions and, if they hold, mark the session
    /// busy and return the payload to send.
    pub fn begin_submission(&mut self) -> Result<(RequestTag, SentenceSubmission), Rejection> {
        let word_id = self.submittable_word()?.id;

        self.error = None;
        let tag = self.issue_tag();
        self.pending_submission = Some(tag);

        Ok((
            tag,
            SentenceSubmission {
                word_id,
                sentence: self.draft.clone(),
            },
        ))
    }

    /// Store the result of a submission.
    pub fn apply_validation_result(
        &mut self,
        tag: RequestTag,
        result: ValidationResult,
    ) -> Transition {
        if self.pending_submission != Some(tag) {
            return Transition::Stale;
        }
        self.pending_submission = None;
        self.result = Some(result);
        self.submitted = true;
        Transition::Applied
    }

    /// Record a failed request. Word, draft, and any earlier result are kept.
    pub fn apply_error(&mut self, tag: RequestTag, error: SessionError) -> Transition {
        if self.pending_word == Some(tag) {
            self.pending_word = None;
        } else if self.pending_submission == Some(tag) {
            self.pending_submission = None;
        } else {
            return Transition::Stale;
        }
        self.error = Some(error);
        Transition::Applied
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn word(&self) -> Option<&Word> {
        self.word.as_ref()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn result(&self) -> Option<&ValidationResult> {
        self.result.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    /// True while a submission is awaiting its result.
    pub fn is_busy(&self) -> bool {
        self.pending_submission.is_some()
    }

    pub fn is_loading_word(&self) -> bool {
        self.pending_word.is_some()
    }

    pub fn check_submittable(&self) -> Result<(), Rejection> {
        self.submittable_word().map(|_| ())
    }

    fn submittable_word(&self) -> Result<&Word, Rejection> {
        let Some(word) = &self.word else {
            return Err(Rejection::NoWord);
        };
        if self.draft.trim().is_empty() {
            return Err(Rejection::EmptyDraft);
        }
        if self.pending_submission.is_some() {
            return Err(Rejection::SubmissionInFlight);
        }
        if self.pending_word.is_some() {
            return Err(Rejection::WordLoading);
        }
        Ok(word)
    }

    pub fn can_submit(&self) -> bool {
        self.check_submittable().is_ok()
    }

    pub fn phase(&self) -> Phase {
        if self.is_busy() {
            Phase::Submitting
        } else if self.word.is_none() {
            Phase::Empty
        } else if self.submitted && self.result.is_some() {
            Phase::Resulted
        } else {
            Phase::WordReady
        }
    }
}
