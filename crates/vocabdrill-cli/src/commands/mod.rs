pub mod init;
pub mod practice;
pub mod word;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use vocabdrill_client::config::load_config_from;
use vocabdrill_client::create_client;
use vocabdrill_core::SessionController;

/// Build a session controller backed by the HTTP client.
pub(crate) fn build_controller(
    api_url: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<SessionController> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(url) = api_url {
        config.api_base_url = url;
    }
    tracing::debug!(api = %config.api_base_url, "using API");

    let client = Arc::new(create_client(&config)?);
    Ok(SessionController::new(client.clone(), client))
}
