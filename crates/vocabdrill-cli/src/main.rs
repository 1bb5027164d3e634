//! vocabdrill CLI — practice vocabulary against the sentence validation API.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(
    name = "vocabdrill",
    version,
    about = "Vocabulary practice: write a sentence, get it scored"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive practice session
    Practice {
        /// API base URL (overrides config and VOCABDRILL_API_URL)
        #[arg(long)]
        api_url: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Fetch a single word and print it
    Word {
        /// API base URL (overrides config and VOCABDRILL_API_URL)
        #[arg(long)]
        api_url: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vocabdrill=warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Practice { api_url, config } => {
            commands::practice::execute(api_url, config).await
        }
        Commands::Word {
            api_url,
            config,
            format,
        } => commands::word::execute(api_url, config, format).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
