//! Terminal rendering of the session view.

use std::sync::Mutex;

use comfy_table::{Cell, Table};

use vocabdrill_core::view::{ResultView, WordCard};
use vocabdrill_core::{SessionObserver, SessionView};

pub fn word_table(card: &WordCard) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Word", "Meaning", "Level"]);
    table.add_row(vec![
        Cell::new(&card.word),
        Cell::new(card.definition.as_deref().unwrap_or("-")),
        Cell::new(&card.difficulty_level),
    ]);
    table
}

pub fn result_table(result: &ResultView) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Score", "Band"]);
    table.add_row(vec![
        Cell::new(&result.score_label),
        Cell::new(result.band.to_string()),
    ]);
    table.add_row(vec![Cell::new("Suggestion"), Cell::new(&result.suggestion)]);
    table.add_row(vec![
        Cell::new("Corrected sentence"),
        Cell::new(&result.corrected_sentence),
    ]);
    table
}

/// Prints whatever changed since the previous view.
#[derive(Default)]
pub struct ConsoleObserver {
    last: Mutex<Option<SessionView>>,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionObserver for ConsoleObserver {
    fn on_change(&self, view: &SessionView) {
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        let prev = last.as_ref();

        if view.loading_word && !prev.is_some_and(|p| p.loading_word) {
            println!("Loading word...");
        }
        if view.word.is_some() && prev.map(|p| &p.word) != Some(&view.word) {
            if let Some(card) = &view.word {
                println!("{}", word_table(card));
            }
        }
        if view.busy && !prev.is_some_and(|p| p.busy) {
            println!("{}", view.submit_label);
        }
        // A resubmission can return an identical result, so a finished
        // submission counts as a change on its own.
        let scored = prev.is_some_and(|p| p.busy) && !view.busy && view.error.is_none();
        if view.result.is_some() && (scored || prev.map(|p| &p.result) != Some(&view.result)) {
            if let Some(result) = &view.result {
                println!("{}", result_table(result));
            }
        }
        if view.error.is_some() && prev.map(|p| &p.error) != Some(&view.error) {
            if let Some(error) = &view.error {
                println!("Error: {error}");
            }
        }

        *last = Some(view.clone());
    }
}
