use std::sync::Arc;

use async_trait::async_trait;

use crate::core::interfaces::adapters::{HttpTransport, RandomImageProvider, RandomIndexProvider};
use crate::core::models::{ImageSearchResponse, ImageUrl, SearchRequest};
use crate::errors::{FetchError, FetchResult};
use crate::global_constants;

/// Keyed-search provider: asks the search API for a page of photo results
/// and picks one hit uniformly at random.
pub struct PixabaySearchProvider {
    http_transport: Arc<dyn HttpTransport>,
    index_provider: Arc<dyn RandomIndexProvider>,
    api_base_url: String,
}

impl PixabaySearchProvider {
    pub fn new(
        http_transport: Arc<dyn HttpTransport>,
        index_provider: Arc<dyn RandomIndexProvider>,
    ) -> Self {
        Self::build_with_api_base(
            http_transport,
            index_provider,
            global_constants::PIXABAY_API_URL.to_string(),
        )
    }

    pub fn build_with_api_base(
        http_transport: Arc<dyn HttpTransport>,
        index_provider: Arc<dyn RandomIndexProvider>,
        api_base_url: String,
    ) -> Self {
        Self {
            http_transport,
            index_provider,
            api_base_url,
        }
    }

    fn construct_search_url(&self, term: &str, api_credential: &str) -> String {
        let encoded_term = urlencoding::encode(term.trim());
        format!(
            "{}?key={}&q={}&image_type={}&per_page={}",
            self.api_base_url,
            api_credential,
            encoded_term,
            global_constants::PIXABAY_IMAGE_TYPE,
            global_constants::PIXABAY_RESULTS_PER_PAGE
        )
    }
}

#[async_trait]
impl RandomImageProvider for PixabaySearchProvider {
    fn name(&self) -> &str {
        global_constants::PROVIDER_NAME_PIXABAY_SEARCH
    }

    async fn fetch_random_image_url(&self, request: &SearchRequest) -> FetchResult<ImageUrl> {
        if !request.has_credential() {
            log::error!("[PIXABAY] no API credential supplied, refusing to call the API");
            return Err(FetchError::MissingCredential {
                provider: global_constants::PROVIDER_NAME_PIXABAY_SEARCH,
            });
        }

        let api_credential = request.credential.as_deref().unwrap_or_default();
        let search_url = self.construct_search_url(&request.term, api_credential);

        log::info!("[PIXABAY] searching images for '{}'", request.term);

        let response = self
            .http_transport
            .execute_get(&search_url)
            .await
            .map_err(|transport_error| {
                log::error!("[PIXABAY] request failed: {}", transport_error);
                FetchError::Network(transport_error)
            })?;

        if !response.is_success() {
            log::error!(
                "[PIXABAY] API returned status {}: {}",
                response.status,
                response.body
            );
            return Err(FetchError::ApiStatus {
                status: response.status,
                body: response.body,
            });
        }

        let search_response: ImageSearchResponse = serde_json::from_str(&response.body)?;

        if search_response.hits.is_empty() {
            log::info!("[PIXABAY] no images found for '{}'", request.term);
            return Err(FetchError::NoResults {
                term: request.term.clone(),
            });
        }

        // An index provider that overshoots its bound is clamped to the
        // last hit rather than faulting.
        let hit_count = search_response.hits.len();
        let picked_index = self.index_provider.pick_index(hit_count).min(hit_count - 1);
        let image_url = search_response.hits[picked_index].webformat_url.clone();

        log::info!(
            "[PIXABAY] picked hit {} of {}: {}",
            picked_index,
            search_response.hits.len(),
            image_url
        );

        Ok(image_url)
    }
}
