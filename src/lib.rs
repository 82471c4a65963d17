//! Fetch a random donut image URL from an image search service.
//!
//! Two provider strategies are available behind [`RandomImageProvider`]:
//! a redirect endpoint that picks the image server-side
//! ([`UnsplashRedirectProvider`]) and a keyed search API that returns a
//! page of candidates to pick from ([`PixabaySearchProvider`]). The
//! convenience functions below wire up the default reqwest transport.

mod adapters;
mod core;
mod errors;
mod global_constants;

use std::sync::Arc;

pub use crate::adapters::{
    PixabaySearchProvider, ReqwestHttpTransport, ThreadRngIndexProvider, UnsplashRedirectProvider,
};
pub use crate::core::interfaces::adapters::{
    HttpTransport, RandomImageProvider, RandomIndexProvider,
};
pub use crate::core::models::{
    HttpResponse, ImageHit, ImageSearchResponse, ImageUrl, SearchRequest,
};
pub use crate::errors::{FetchError, FetchResult};
pub use crate::global_constants::DEFAULT_SEARCH_TERM;

/// Fetch a random donut image URL via the redirect endpoint.
pub async fn fetch_random_donut_image_url() -> FetchResult<ImageUrl> {
    let provider = UnsplashRedirectProvider::new(Arc::new(ReqwestHttpTransport::new()));
    provider
        .fetch_random_image_url(&SearchRequest::build_for_term(
            global_constants::DEFAULT_SEARCH_TERM,
        ))
        .await
}

/// Fetch a random donut image URL via the keyed search API.
pub async fn fetch_random_donut_image_url_with_credential(
    api_credential: &str,
) -> FetchResult<ImageUrl> {
    let provider = PixabaySearchProvider::new(
        Arc::new(ReqwestHttpTransport::new()),
        Arc::new(ThreadRngIndexProvider::new()),
    );
    provider
        .fetch_random_image_url(&SearchRequest::build_with_credential(
            global_constants::DEFAULT_SEARCH_TERM,
            api_credential,
        ))
        .await
}
