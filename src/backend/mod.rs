pub mod http;

pub use http::HttpBackend;

use async_trait::async_trait;
use crate::session::LeadForm;

/// Failures of a single call to the assistant service
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("malformed response: {0}")]
    Malformed(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

/// The three calls the widget makes to the remote assistant service.
///
/// Implemented over HTTP by [`HttpBackend`]; tests plug in a scripted fake.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Raw product listing body, normalised by [`crate::session::ProductCatalog`]
    async fn fetch_products(&self) -> BackendResult<serde_json::Value>;

    /// Answer for a free-text query; `None` when the service sent no answer
    async fn fetch_answer(&self, query: &str) -> BackendResult<Option<String>>;

    async fn save_lead(&self, lead: &LeadForm) -> BackendResult<()>;
}
