//! The `vocabdrill practice` command.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use vocabdrill_core::{Outcome, SessionController};

use crate::render::ConsoleObserver;

const HELP: &str = "Type a sentence using the word and press Enter to have it scored.
  :new   load another word
  :help  show this help
  :quit  end the session";

/// Scores collected over one practice run.
#[derive(Debug, Default)]
struct Tally {
    scores: Vec<f64>,
}

impl Tally {
    fn record(&mut self, score: f64) {
        self.scores.push(score);
    }

    fn average(&self) -> Option<f64> {
        if self.scores.is_empty() {
            None
        } else {
            Some(self.scores.iter().sum::<f64>() / self.scores.len() as f64)
        }
    }
}

pub async fn execute(api_url: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let controller =
        super::build_controller(api_url, config_path)?.with_observer(Arc::new(ConsoleObserver::new()));

    println!("vocabdrill practice (:help for commands)");
    controller.request_new_word().await;

    let mut tally = Tally::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        match line.trim() {
            ":quit" | ":q" => break,
            ":new" | ":n" => {
                controller.request_new_word().await;
            }
            ":help" | ":h" => println!("{HELP}"),
            _ => submit(&controller, line, &mut tally).await,
        }
    }

    print_summary(&controller, &tally);
    Ok(())
}

async fn submit(controller: &SessionController, line: String, tally: &mut Tally) {
    controller.update_draft(line);
    match controller.submit_sentence().await {
        Outcome::Applied => {
            if let Some(result) = controller.view().result {
                tally.record(result.score);
            }
        }
        Outcome::Rejected(reason) => println!("Nothing submitted: {reason}."),
        Outcome::Failed(_) | Outcome::Superseded => {}
    }
}

fn print_summary(controller: &SessionController, tally: &Tally) {
    let session = controller.snapshot();
    let elapsed = chrono::Utc::now() - session.started_at();

    let average = tally
        .average()
        .map(|avg| format!(", average {avg:.1} / 10"))
        .unwrap_or_default();
    println!(
        "Session {}: {} sentence(s) scored{average} in {}s",
        session.id(),
        tally.scores.len(),
        elapsed.num_seconds()
    );
}
