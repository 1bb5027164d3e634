//! The `vocabdrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("vocabdrill.toml").exists() {
        println!("vocabdrill.toml already exists, skipping.");
    } else {
        std::fs::write("vocabdrill.toml", SAMPLE_CONFIG)?;
        println!("Created vocabdrill.toml");
    }

    println!("\nNext steps:");
    println!("  1. Point api_base_url at your vocabulary API");
    println!("  2. Run: vocabdrill word");
    println!("  3. Run: vocabdrill practice");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# vocabdrill configuration

# Base URL serving /api/word and /api/validate-sentence.
# ${VAR} references are expanded from the environment.
api_base_url = "http://localhost:8000"

# Seconds before a request is abandoned.
request_timeout_secs = 30
"#;
