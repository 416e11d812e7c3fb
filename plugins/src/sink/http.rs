use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use snipcheck_core::api::{AnalysisResponse, ResultSink, SinkError};

const RESULTS_PATH: &str = "/results";
const MAX_BODY_SNIPPET: usize = 512;

/// Posts every response as JSON to `<base_url>/results`. Any 2xx is success.
pub struct HttpResultSink {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpResultSink {
    pub fn new(base_url: &str, api_key: &str, timeout_ms: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .user_agent(concat!("snipcheck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let api_key = Some(api_key.trim())
            .filter(|k| !k.is_empty())
            .map(str::to_string);

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), RESULTS_PATH),
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ResultSink for HttpResultSink {
    fn name(&self) -> &str {
        "storage_service"
    }

    async fn persist(&self, response: &AnalysisResponse) -> Result<(), SinkError> {
        let body = serde_json::to_vec(response).map_err(SinkError::Encode)?;

        tracing::info!(
            request_id = %response.request_id,
            url = %self.endpoint,
            "saving analysis result to storage service"
        );

        let mut req = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(key) = &self.api_key {
            req = req.header(AUTHORIZATION, format!("Bearer {key}"));
        }

        let resp = req
            .send()
            .await
            .map_err(|e| SinkError::Network(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "storage service accepted result");
            return Ok(());
        }

        let mut body = resp.text().await.unwrap_or_default();
        if body.len() > MAX_BODY_SNIPPET {
            let mut cut = MAX_BODY_SNIPPET;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }
        Err(SinkError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
