use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::quiz::Question;

/// Client side of the portfolio backend. A trait so the submission flow
/// can run against fakes in tests.
#[async_trait]
pub trait PortfolioBackend: Send + Sync {
    /// Registers a visit and returns the backend-issued visitor id.
    async fn record_visit(&self, report: &VisitReport) -> Result<String, ApiError>;

    /// Stores one answered question for the visitor.
    async fn record_response(
        &self,
        fingerprint: &str,
        question: &str,
        answer: &str,
    ) -> Result<(), ApiError>;

    /// Asks the backend to generate the follow-up question.
    async fn next_question(&self, request: &NextQuestionRequest) -> Result<Question, ApiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitReport {
    pub fingerprint: String,
    pub user_agent: String,
    pub ip_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextQuestionRequest {
    pub content: String,
    pub fingerprint: String,
    pub user_agent: String,
    pub ip_address: Option<String>,
}

/// The backend hands out visitor ids as bare row numbers; tolerate both
/// numbers and strings on the wire.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VisitorIdValue {
    Number(u64),
    Text(String),
}

impl VisitorIdValue {
    fn into_string(self) -> String {
        match self {
            VisitorIdValue::Number(id) => id.to_string(),
            VisitorIdValue::Text(id) => id,
        }
    }
}

#[derive(Debug, Deserialize)]
struct VisitAck {
    visitor_id: VisitorIdValue,
}

pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl PortfolioBackend for BackendClient {
    async fn record_visit(&self, report: &VisitReport) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/api/record-visit"))
            .json(report)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let ack: VisitAck = response.json().await?;
        Ok(ack.visitor_id.into_string())
    }

    async fn record_response(
        &self,
        fingerprint: &str,
        question: &str,
        answer: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.endpoint("/api/record-response"))
            .json(&serde_json::json!({
                "fingerprint": fingerprint,
                "question": question,
                "answer": answer,
            }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        // The acknowledgement body has no fixed shape.
        let ack: serde_json::Value = response.json().await?;
        log::debug!("Answer recorded: {}", ack);
        Ok(())
    }

    async fn next_question(&self, request: &NextQuestionRequest) -> Result<Question, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/api/generate-questions"))
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}
