use std::fmt::Debug;
use std::time::Duration;

use serde_json::Value;
use tokio::runtime::Runtime;
use tracing::{info, warn};

use super::domain::{FieldName, SubmittedApplication};
use super::rules::visible_fields;
use crate::config::TransportConfig;

/// Form-encoded body sent to the collection endpoint.
///
/// Mirrors what the rendered form would post: hidden conditional fields are
/// left out and every selected skill is its own `additionalSkills` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    pairs: Vec<(&'static str, String)>,
}

impl SubmissionPayload {
    pub fn from_submission(submission: &SubmittedApplication) -> Self {
        let application = submission.application();
        let mut pairs = Vec::new();
        for field in visible_fields(application.position) {
            if field == FieldName::AdditionalSkills {
                pairs.extend(
                    application
                        .additional_skills
                        .iter()
                        .map(|skill| (field.key(), skill.name().to_string())),
                );
            } else if let Some(value) = application.text(field) {
                pairs.push((field.key(), value.to_string()));
            }
        }
        Self { pairs }
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// All values sent under `key`, in order.
    pub fn values(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("submission request failed: {0}")]
    Request(String),
    #[error("submission endpoint returned status {0}")]
    Status(u16),
    #[error("submission response was not valid JSON: {0}")]
    Decode(String),
    #[error("submission runtime unavailable: {0}")]
    Runtime(String),
}

/// Outbound hook receiving the payload of each accepted application.
pub trait SubmissionTransport: Debug {
    fn send(&self, payload: &SubmissionPayload) -> Result<Value, TransportError>;
}

impl<T> SubmissionTransport for Box<T>
where
    T: SubmissionTransport + ?Sized,
{
    fn send(&self, payload: &SubmissionPayload) -> Result<Value, TransportError> {
        (**self).send(payload)
    }
}

/// POSTs payloads to a fixed endpoint, hiding the async client behind a
/// synchronous gateway.
pub struct HttpSubmissionClient {
    endpoint: String,
    client: reqwest::Client,
    runtime: Runtime,
}

impl HttpSubmissionClient {
    pub fn new(endpoint: impl Into<String>, client: reqwest::Client, runtime: Runtime) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
            runtime,
        }
    }

    pub fn from_config(config: &TransportConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| TransportError::Request(err.to_string()))?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| TransportError::Runtime(err.to_string()))?;
        Ok(Self::new(config.endpoint.clone(), client, runtime))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Debug for HttpSubmissionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSubmissionClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl SubmissionTransport for HttpSubmissionClient {
    fn send(&self, payload: &SubmissionPayload) -> Result<Value, TransportError> {
        self.runtime.block_on(async {
            let response = self
                .client
                .post(&self.endpoint)
                .form(payload.pairs())
                .send()
                .await
                .map_err(|err| TransportError::Request(err.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(TransportError::Status(status.as_u16()));
            }

            response
                .json::<Value>()
                .await
                .map_err(|err| TransportError::Decode(err.to_string()))
        })
    }
}

/// Transport used when submissions should not leave the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledTransport;

impl SubmissionTransport for DisabledTransport {
    fn send(&self, payload: &SubmissionPayload) -> Result<Value, TransportError> {
        info!(fields = payload.pairs().len(), "transport disabled, payload not sent");
        Ok(Value::Null)
    }
}

/// Send an accepted application on a best-effort basis.
///
/// Failures are logged and dropped; the caller never learns the outcome.
pub fn dispatch_best_effort(
    transport: &dyn SubmissionTransport,
    submission: &SubmittedApplication,
) {
    let payload = SubmissionPayload::from_submission(submission);
    match transport.send(&payload) {
        Ok(body) => info!(response = %body, "application delivered"),
        Err(err) => warn!(error = %err, "application delivery failed"),
    }
}
