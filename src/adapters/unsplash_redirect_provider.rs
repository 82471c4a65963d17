use std::sync::Arc;

use async_trait::async_trait;

use crate::core::interfaces::adapters::{HttpTransport, RandomImageProvider};
use crate::core::models::{ImageUrl, SearchRequest};
use crate::errors::{FetchError, FetchResult};
use crate::global_constants;

/// Redirect-based provider: the endpoint picks the image server-side and
/// redirects, so the fetched URL is whatever the redirect chain ends at.
pub struct UnsplashRedirectProvider {
    http_transport: Arc<dyn HttpTransport>,
    endpoint_url_template: String,
}

impl UnsplashRedirectProvider {
    pub fn new(http_transport: Arc<dyn HttpTransport>) -> Self {
        Self::build_with_endpoint(
            http_transport,
            global_constants::UNSPLASH_FEATURED_URL_TEMPLATE.to_string(),
        )
    }

    pub fn build_with_endpoint(
        http_transport: Arc<dyn HttpTransport>,
        endpoint_url_template: String,
    ) -> Self {
        Self {
            http_transport,
            endpoint_url_template,
        }
    }

    fn construct_request_url(&self, term: &str) -> String {
        let encoded_term = urlencoding::encode(term.trim());
        self.endpoint_url_template.replace("{}", &encoded_term)
    }
}

#[async_trait]
impl RandomImageProvider for UnsplashRedirectProvider {
    fn name(&self) -> &str {
        global_constants::PROVIDER_NAME_UNSPLASH_REDIRECT
    }

    async fn fetch_random_image_url(&self, request: &SearchRequest) -> FetchResult<ImageUrl> {
        let request_url = self.construct_request_url(&request.term);

        log::info!("[UNSPLASH] fetching random image for '{}'", request.term);
        log::debug!("[UNSPLASH] Request URL: {}", request_url);

        let response = self
            .http_transport
            .execute_get(&request_url)
            .await
            .map_err(|transport_error| {
                log::error!("[UNSPLASH] request failed: {}", transport_error);
                FetchError::Network(transport_error)
            })?;

        if !response.is_success() {
            log::error!(
                "[UNSPLASH] request returned status {}: {}",
                response.status,
                response.body
            );
            return Err(FetchError::ApiStatus {
                status: response.status,
                body: response.body,
            });
        }

        // The endpoint is only useful if it redirected us somewhere.
        if response.final_url == request_url {
            log::error!("[UNSPLASH] no redirect occurred for {}", request_url);
            return Err(FetchError::NoRedirect { url: request_url });
        }

        log::info!("[UNSPLASH] resolved image URL: {}", response.final_url);
        Ok(response.final_url)
    }
}
