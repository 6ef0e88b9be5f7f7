//! Linguistic annotator client.
//!
//! The annotator turns raw text into a dependency parse with named
//! entities. It is the only I/O on the understanding path; a failure here
//! is a hard error, never a validation code, and is not retried.

use async_trait::async_trait;
use cb_treequery::AnnotatedSentence;
use serde::{Deserialize, Serialize};

use crate::error::{NluError, NluResult};

/// Produces an annotated sentence for raw query text.
#[async_trait]
pub trait Annotator: Send + Sync {
    async fn annotate(&self, text: &str) -> NluResult<AnnotatedSentence>;
}

/// Configuration for the HTTP annotation service.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotatorConfig {
    /// Service base URL; requests go to `{url}/annotate`.
    #[serde(default = "default_url")]
    pub url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    "http://localhost:8090".into()
}
fn default_timeout_secs() -> u64 {
    5
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Serialize)]
struct AnnotateRequest<'a> {
    text: &'a str,
}

/// Client for an annotation service speaking JSON over HTTP.
pub struct HttpAnnotator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAnnotator {
    pub fn new(config: &AnnotatorConfig) -> NluResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NluError::Annotation(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: format!("{}/annotate", config.url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl Annotator for HttpAnnotator {
    async fn annotate(&self, text: &str) -> NluResult<AnnotatedSentence> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnnotateRequest { text })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, endpoint = %self.endpoint, "annotator request failed");
                NluError::Annotation(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "annotator returned non-200");
            return Err(NluError::AnnotatorStatus {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<AnnotatedSentence>().await.map_err(|e| {
            tracing::warn!(error = %e, "failed to parse annotator response body");
            NluError::Annotation(e.to_string())
        })
    }
}
