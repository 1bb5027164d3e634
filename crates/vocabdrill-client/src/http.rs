//! HTTP implementation of the word and validation services.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::instrument;

use vocabdrill_core::error::ServiceError;
use vocabdrill_core::model::{SentenceSubmission, ValidationResult, Word};
use vocabdrill_core::traits::{ValidationService, WordService};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const WORD_PATH: &str = "/api/word";
const VALIDATE_PATH: &str = "/api/validate-sentence";

/// Client for the vocabulary practice API.
pub struct HttpVocabClient {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpVocabClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base = if base_url.trim().is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url.trim().trim_end_matches('/')
        };

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            base_url: base.to_string(),
            timeout_secs: timeout.as_secs(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transport_error(&self, e: reqwest::Error) -> ServiceError {
        if e.is_timeout() {
            ServiceError::Timeout(self.timeout_secs)
        } else if e.is_connect() {
            ServiceError::NetworkError(format!(
                "API not reachable at {}. Is the server running?",
                self.base_url
            ))
        } else {
            ServiceError::NetworkError(e.to_string())
        }
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ServiceError> {
        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::ApiError {
                status,
                message: body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        serde_json::from_slice(&body).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl WordService for HttpVocabClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_word(&self) -> anyhow::Result<Word> {
        let response = self
            .client
            .get(format!("{}{WORD_PATH}", self.base_url))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        Ok(self.read_json(response).await?)
    }
}

#[async_trait]
impl ValidationService for HttpVocabClient {
    #[instrument(skip(self, submission), fields(base_url = %self.base_url, word_id = submission.word_id))]
    async fn validate_sentence(
        &self,
        submission: &SentenceSubmission,
    ) -> anyhow::Result<ValidationResult> {
        let response = self
            .client
            .post(format!("{}{VALIDATE_PATH}", self.base_url))
            .header("content-type", "application/json")
            .json(submission)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        Ok(self.read_json(response).await?)
    }
}
