use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::HttpResponse;

/// Executes a single GET request, following redirects.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute_get(&self, request_url: &str) -> Result<HttpResponse>;
}
