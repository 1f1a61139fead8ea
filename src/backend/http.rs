use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{BackendError, BackendResult, ChatBackend};
use crate::session::LeadForm;

#[derive(Debug, Serialize)]
struct AnswerRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnswerResponse {
    #[serde(default)]
    answer: Option<String>,
}

/// Client for the assistant service REST endpoints
pub struct HttpBackend {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: &str, http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Reads the body and maps a non-2xx status to [`BackendError::Http`]
    async fn read_body(response: reqwest::Response) -> BackendResult<String> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(BackendError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn fetch_products(&self) -> BackendResult<serde_json::Value> {
        let url = self.endpoint("get_products");
        log::info!("📡 Fetching products from {}", url);

        let response = self.http_client.get(&url).send().await?;
        log::debug!("get_products status: {}", response.status());
        let text = Self::read_body(response).await?;

        serde_json::from_str(&text).map_err(|e| BackendError::Malformed(e.to_string()))
    }

    async fn fetch_answer(&self, query: &str) -> BackendResult<Option<String>> {
        let response = self
            .http_client
            .post(self.endpoint("get_answer"))
            .header("Content-Type", "application/json")
            .json(&AnswerRequest { query })
            .send()
            .await?;

        let text = Self::read_body(response).await?;
        let parsed: AnswerResponse =
            serde_json::from_str(&text).map_err(|e| BackendError::Malformed(e.to_string()))?;

        Ok(parsed.answer)
    }

    async fn save_lead(&self, lead: &LeadForm) -> BackendResult<()> {
        let response = self
            .http_client
            .post(self.endpoint("save_lead"))
            .header("Content-Type", "application/json")
            .json(lead)
            .send()
            .await?;

        // Only the status matters, the body is not inspected
        Self::read_body(response).await.map(|_| ())
    }
}
