use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

use crate::core::interfaces::adapters::HttpTransport;
use crate::core::models::HttpResponse;

/// reqwest-backed transport. Follows redirects (reqwest's default policy)
/// and reports the final resolved URL alongside status and body.
pub struct ReqwestHttpTransport {
    client: Client,
}

impl ReqwestHttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Build from a preconfigured client, for callers that want timeouts
    /// or a custom redirect policy.
    pub fn build_with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestHttpTransport {
    async fn execute_get(&self, request_url: &str) -> Result<HttpResponse> {
        log::debug!("[HTTP] GET {}", request_url);

        let response = self.client.get(request_url).send().await?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = response.text().await?;

        log::debug!("[HTTP] {} resolved to {} ({})", request_url, final_url, status);

        Ok(HttpResponse {
            status,
            final_url,
            body,
        })
    }
}
