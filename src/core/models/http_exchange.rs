/// The transport's view of one completed GET request.
///
/// Carries both the final resolved URL (after any redirects) and the raw
/// response body, so redirect-based and body-based providers can share one
/// transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub final_url: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
