//! The `vocabdrill word` command.

use std::path::PathBuf;

use anyhow::Result;

use vocabdrill_core::Outcome;

use crate::render::word_table;

pub async fn execute(
    api_url: Option<String>,
    config_path: Option<PathBuf>,
    format: String,
) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json"),
        "unknown format '{format}' (expected text or json)"
    );

    let controller = super::build_controller(api_url, config_path)?;

    if let Outcome::Failed(e) = controller.request_new_word().await {
        anyhow::bail!("{e}");
    }

    let view = controller.view();
    let Some(card) = view.word else {
        anyhow::bail!("no word returned");
    };

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        println!("{}", word_table(&card));
    }

    Ok(())
}
