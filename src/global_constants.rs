#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "Donut Image Fetcher";

pub const DEFAULT_SEARCH_TERM: &str = "donut";

pub const UNSPLASH_FEATURED_URL_TEMPLATE: &str = "https://source.unsplash.com/featured/?{}";
pub const PIXABAY_API_URL: &str = "https://pixabay.com/api/";

pub const PIXABAY_RESULTS_PER_PAGE: u32 = 50;
pub const PIXABAY_IMAGE_TYPE: &str = "photo";

pub const PROVIDER_NAME_UNSPLASH_REDIRECT: &str = "unsplash-redirect";
pub const PROVIDER_NAME_PIXABAY_SEARCH: &str = "pixabay-search";
