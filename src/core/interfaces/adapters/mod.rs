mod http_transport;
mod image_provider;
mod random_index;

pub use http_transport::HttpTransport;
pub use image_provider::RandomImageProvider;
pub use random_index::RandomIndexProvider;
