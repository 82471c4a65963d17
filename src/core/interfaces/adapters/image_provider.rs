use async_trait::async_trait;

use crate::core::models::{ImageUrl, SearchRequest};
use crate::errors::FetchResult;

/// A strategy that resolves a search term to one random image URL.
///
/// Each call issues exactly one outbound request; there is no caching and
/// no retry, so a failed attempt is terminal for that call.
#[async_trait]
pub trait RandomImageProvider: Send + Sync {
    /// Get the name of this provider
    fn name(&self) -> &str;

    /// Fetch one random image URL for the request's term
    async fn fetch_random_image_url(&self, request: &SearchRequest) -> FetchResult<ImageUrl>;
}
