//! Session controller.
//!
//! Owns the practice [`Session`], issues the word and validation requests,
//! and applies their completions. The session lock is only held for the
//! synchronous transition steps, never across a request, so operations may
//! overlap; request tagging decides which completions still apply.

use std::sync::{Arc, Mutex};

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::error::SessionError;
use crate::session::{Rejection, Session, Transition};
use crate::traits::{ValidationService, WordService};
use crate::view::SessionView;

/// Receives the view model after every applied state change.
///
/// Called with the session locked, so views arrive in the order the changes
/// were applied. Implementations must not call back into the controller.
pub trait SessionObserver: Send + Sync {
    fn on_change(&self, view: &SessionView);
}

/// Observer that ignores all changes.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {
    fn on_change(&self, _: &SessionView) {}
}

/// What an operation did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The request succeeded and its result was applied.
    Applied,
    /// The request failed; the error is now the session's error.
    Failed(SessionError),
    /// A newer request replaced this one before it completed.
    Superseded,
    /// The operation was refused without issuing a request.
    Rejected(Rejection),
}

pub struct SessionController {
    words: Arc<dyn WordService>,
    validator: Arc<dyn ValidationService>,
    observer: Arc<dyn SessionObserver>,
    session: Mutex<Session>,
    session_id: Uuid,
}

impl SessionController {
    pub fn new(words: Arc<dyn WordService>, validator: Arc<dyn ValidationService>) -> Self {
        let session = Session::new();
        Self {
            words,
            validator,
            observer: Arc::new(NoopObserver),
            session_id: session.id(),
            session: Mutex::new(session),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn SessionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// A copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.lock().clone()
    }

    pub fn view(&self) -> SessionView {
        SessionView::from(&*self.lock())
    }

    /// Clear the word-bound state and load a new word.
    #[instrument(skip(self), fields(session = %self.session_id))]
    pub async fn request_new_word(&self) -> Outcome {
        let tag = self.mutate(Session::begin_word_request, |_| true);
        debug!(tag = tag.value(), "requesting word");

        match self.words.fetch_word().await {
            Ok(word) => {
                let (word_id, surface) = (word.id, word.word.clone());
                let transition = self.mutate(|s| s.apply_word_loaded(tag, word), applied);
                if transition == Transition::Applied {
                    info!(word_id, word = %surface, "word loaded");
                }
                self.settle(transition, Outcome::Applied)
            }
            Err(e) => {
                let error = SessionError::word_load(&e);
                let transition = self.mutate(|s| s.apply_error(tag, error.clone()), applied);
                if transition == Transition::Applied {
                    warn!(error = %format!("{e:#}"), "failed to load word");
                }
                self.settle(transition, Outcome::Failed(error))
            }
        }
    }

    /// Replace the draft sentence.
    pub fn update_draft(&self, text: impl Into<String>) {
        let text = text.into();
        self.mutate(|s| s.apply_draft_change(text), |_| true);
    }

    /// Submit the draft for the current word. A no-op when there is no word,
    /// the draft is blank, or another request makes the result ambiguous.
    #[instrument(skip(self), fields(session = %self.session_id))]
    pub async fn submit_sentence(&self) -> Outcome {
        let begun = self.mutate(Session::begin_submission, Result::is_ok);
        let (tag, submission) = match begun {
            Ok(pair) => pair,
            Err(rejection) => {
                debug!(%rejection, "submission rejected");
                return Outcome::Rejected(rejection);
            }
        };
        debug!(tag = tag.value(), word_id = submission.word_id, "submitting sentence");

        match self.validator.validate_sentence(&submission).await {
            Ok(result) => {
                let score = result.score;
                let transition = self.mutate(|s| s.apply_validation_result(tag, result), applied);
                if transition == Transition::Applied {
                    info!(word_id = submission.word_id, score, "sentence scored");
                }
                self.settle(transition, Outcome::Applied)
            }
            Err(e) => {
                let error = SessionError::validation(&e);
                let transition = self.mutate(|s| s.apply_error(tag, error.clone()), applied);
                if transition == Transition::Applied {
                    warn!(error = %format!("{e:#}"), "failed to validate sentence");
                }
                self.settle(transition, Outcome::Failed(error))
            }
        }
    }

    fn settle(&self, transition: Transition, outcome: Outcome) -> Outcome {
        match transition {
            Transition::Applied => outcome,
            Transition::Stale => {
                debug!("discarding superseded completion");
                Outcome::Superseded
            }
        }
    }

    /// Run a transition and, when `changed` accepts its output, notify the
    /// observer before the lock is released.
    fn mutate<R>(
        &self,
        f: impl FnOnce(&mut Session) -> R,
        changed: impl FnOnce(&R) -> bool,
    ) -> R {
        let mut session = self.lock();
        let out = f(&mut session);
        if changed(&out) {
            self.observer.on_change(&SessionView::from(&*session));
        }
        out
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn applied(transition: &Transition) -> bool {
    *transition == Transition::Applied
}
