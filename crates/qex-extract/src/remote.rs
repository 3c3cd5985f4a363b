//! HTTP-backed recognizer and tagger clients
//!
//! Both services speak a small JSON protocol and run as sidecars on the
//! same host as the pipeline, so the recognizer is handed a local image
//! path rather than the image bytes.
//!
//! Neither client applies a request timeout by default: the base contract
//! is to block until the service answers or fails. Passing a timeout is
//! the documented hardening option for production deployments.

use crate::error::{ExtractError, Result};
use crate::services::{SpanTagger, TaggedSpan, TextRecognizer};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

// ============================================================================
// Text Recognizer
// ============================================================================

#[derive(Serialize)]
struct ReadTextRequest<'a> {
    path: &'a str,
}

#[derive(Deserialize)]
struct ReadTextResponse {
    fragments: Vec<String>,
}

/// Client for a text recognition service (`POST {base}/read`).
pub struct RemoteRecognizer {
    client: Client,
    base_url: String,
}

impl RemoteRecognizer {
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url,
        })
    }
}

#[async_trait]
impl TextRecognizer for RemoteRecognizer {
    async fn read_text(&self, image: &Path) -> Result<Vec<String>> {
        let url = format!("{}/read", self.base_url);
        let request = ReadTextRequest {
            path: &image.to_string_lossy(),
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(ExtractError::recognizer(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        let body: ReadTextResponse = response.json().await?;
        Ok(body.fragments)
    }
}

// ============================================================================
// Entity Span Tagger
// ============================================================================

#[derive(Serialize)]
struct TagRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct TagResponse {
    spans: Vec<TaggedSpan>,
}

/// Client for a span tagging service (`POST {base}/tag`).
pub struct RemoteTagger {
    client: Client,
    base_url: String,
}

impl RemoteTagger {
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url,
        })
    }
}

#[async_trait]
impl SpanTagger for RemoteTagger {
    async fn tag_spans(&self, text: &str) -> Result<Vec<TaggedSpan>> {
        let url = format!("{}/tag", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&TagRequest { text })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ExtractError::tagger(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        let body: TagResponse = response.json().await?;
        Ok(body.spans)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_recognizer_reads_fragments() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/read"))
            .and(body_json(json!({ "path": "./images/img1.jpg" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "fragments": ["Super Widget", "12.5 cm wide"]
            })))
            .mount(&server)
            .await;

        let recognizer = RemoteRecognizer::new(server.uri(), None).unwrap();
        let fragments = recognizer
            .read_text(Path::new("./images/img1.jpg"))
            .await
            .unwrap();

        assert_eq!(fragments, vec!["Super Widget", "12.5 cm wide"]);
    }

    #[tokio::test]
    async fn test_recognizer_failure_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/read"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let recognizer = RemoteRecognizer::new(server.uri(), None).unwrap();
        let err = recognizer
            .read_text(Path::new("./images/img1.jpg"))
            .await
            .unwrap_err();

        assert!(matches!(err, ExtractError::Recognizer(_)));
    }

    #[tokio::test]
    async fn test_tagger_returns_labeled_spans() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tag"))
            .and(body_json(json!({ "text": "Super Widget 12.5 cm wide" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "spans": [
                    { "text": "12.5 cm", "label": "QUANTITY" },
                    { "text": "Super Widget", "label": "PRODUCT" }
                ]
            })))
            .mount(&server)
            .await;

        let tagger = RemoteTagger::new(server.uri(), None).unwrap();
        let spans = tagger.tag_spans("Super Widget 12.5 cm wide").await.unwrap();

        assert_eq!(spans.len(), 2);
        assert!(spans[0].is_quantity());
        assert!(!spans[1].is_quantity());
    }

    #[tokio::test]
    async fn test_tagger_failure_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tag"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let tagger = RemoteTagger::new(server.uri(), None).unwrap();
        let err = tagger.tag_spans("anything").await.unwrap_err();

        assert!(matches!(err, ExtractError::Tagger(_)));
    }
}
