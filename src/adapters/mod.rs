mod pixabay_search_provider;
mod reqwest_http_transport;
mod thread_rng_index_provider;
mod unsplash_redirect_provider;

pub use pixabay_search_provider::PixabaySearchProvider;
pub use reqwest_http_transport::ReqwestHttpTransport;
pub use thread_rng_index_provider::ThreadRngIndexProvider;
pub use unsplash_redirect_provider::UnsplashRedirectProvider;
