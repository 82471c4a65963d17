mod http_exchange;
mod search_request;
mod search_response;

pub use http_exchange::HttpResponse;
pub use search_request::SearchRequest;
pub use search_response::{ImageHit, ImageSearchResponse};

/// A resolved image URL, the sole output of a fetch
pub type ImageUrl = String;
