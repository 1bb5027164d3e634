//! Render-time view model derived from a [`Session`].

use serde::Serialize;

use crate::model::{SeverityBand, ValidationResult, Word};
use crate::session::{Phase, Session};

pub const SUBMIT_LABEL: &str = "Validate Sentence";
pub const SUBMIT_BUSY_LABEL: &str = "Checking...";

/// Everything a renderer needs, with no access to the session itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub phase: Phase,
    pub word: Option<WordCard>,
    pub draft: String,
    pub busy: bool,
    pub loading_word: bool,
    pub submitted: bool,
    pub can_submit: bool,
    pub submit_label: &'static str,
    pub error: Option<String>,
    /// Present only once the current word has a result.
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCard {
    pub id: i64,
    pub word: String,
    pub definition: Option<String>,
    pub difficulty_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub score: f64,
    /// e.g. `"9.2 / 10 (advanced)"`.
    pub score_label: String,
    pub band: SeverityBand,
    pub suggestion: String,
    pub corrected_sentence: String,
}

impl From<&Word> for WordCard {
    fn from(word: &Word) -> Self {
        Self {
            id: word.id,
            word: word.word.clone(),
            definition: word.definition.clone(),
            difficulty_level: word.difficulty_level.clone(),
        }
    }
}

impl From<&ValidationResult> for ResultView {
    fn from(result: &ValidationResult) -> Self {
        // `{:.1}` rounds ties to even; scores are shown with ties away from zero.
        let shown = (result.score * 10.0).round() / 10.0;
        Self {
            score: result.score,
            score_label: format!("{shown:.1} / 10 ({})", result.level),
            band: SeverityBand::from_score(result.score),
            suggestion: result.suggestion.clone(),
            corrected_sentence: result.corrected_sentence.clone(),
        }
    }
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        let result = if session.is_submitted() {
            session.result().map(ResultView::from)
        } else {
            None
        };

        Self {
            phase: session.phase(),
            word: session.word().map(WordCard::from),
            draft: session.draft().to_string(),
            busy: session.is_busy(),
            loading_word: session.is_loading_word(),
            submitted: session.is_submitted(),
            can_submit: session.can_submit(),
            submit_label: if session.is_busy() {
                SUBMIT_BUSY_LABEL
            } else {
                SUBMIT_LABEL
            },
            error: session.error().map(ToString::to_string),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_label_rounds_to_one_decimal() {
        let label = |score: f64| {
            ResultView::from(&ValidationResult {
                score,
                level: "intermediate".into(),
                suggestion: String::new(),
                corrected_sentence: String::new(),
            })
            .score_label
        };
        assert_eq!(label(7.26), "7.3 / 10 (intermediate)");
        assert_eq!(label(8.25), "8.3 / 10 (intermediate)");
        assert_eq!(label(6.45), "6.5 / 10 (intermediate)");
        assert_eq!(label(9.0), "9.0 / 10 (intermediate)");
    }

    #[test]
    fn result_view_keeps_raw_score_for_banding() {
        let view = ResultView::from(&ValidationResult {
            score: 7.96,
            level: "intermediate".into(),
            suggestion: String::new(),
            corrected_sentence: String::new(),
        });
        assert_eq!(view.score_label, "8.0 / 10 (intermediate)");
        assert_eq!(view.band, SeverityBand::Medium);
    }

    #[test]
    fn empty_session_view() {
        let view = SessionView::from(&Session::new());
        assert_eq!(view.phase, Phase::Empty);
        assert!(view.word.is_none());
        assert!(view.result.is_none());
        assert!(!view.can_submit);
        assert_eq!(view.submit_label, SUBMIT_LABEL);
    }

    #[test]
    fn busy_view_uses_checking_label() {
        let mut session = Session::new();
        let tag = session.begin_word_request();
        session.apply_word_loaded(
            tag,
            Word {
                id: 3,
                word: "terse".into(),
                definition: None,
                difficulty_level: "beginner".into(),
            },
        );
        session.apply_draft_change("Be terse.");
        session.begin_submission().unwrap();

        let view = SessionView::from(&session);
        assert!(view.busy);
        assert!(!view.can_submit);
        assert_eq!(view.submit_label, SUBMIT_BUSY_LABEL);
        assert_eq!(view.word.unwrap().definition, None);
    }
}
