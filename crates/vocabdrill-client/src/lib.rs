//! vocabdrill-client — HTTP access to the vocabulary practice API.
//!
//! Implements the `WordService` and `ValidationService` traits over reqwest,
//! and loads the client configuration.

pub mod config;
pub mod http;

pub use config::{create_client, load_config, load_config_from, VocabdrillConfig};
pub use http::HttpVocabClient;
