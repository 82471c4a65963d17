use serde::{Deserialize, Serialize};

/// A single candidate image returned by the keyed search API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageHit {
    /// The medium-resolution image URL
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    /// The full-resolution image URL (if available)
    #[serde(rename = "largeImageURL", skip_serializing_if = "Option::is_none")]
    pub large_image_url: Option<String>,
    /// The page hosting the image (if available)
    #[serde(rename = "pageURL", skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
    /// Comma-separated tags describing the image (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

/// The keyed search API's response envelope
///
/// `hits` defaults to an empty list so a response of an unexpected shape
/// surfaces as a no-results outcome instead of an index fault.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSearchResponse {
    /// Total number of matching images reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// The candidate images
    #[serde(default)]
    pub hits: Vec<ImageHit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_pixabay_shaped_response() {
        let json = r#"{
            "total": 2,
            "totalHits": 2,
            "hits": [
                {
                    "webformatURL": "https://cdn.example.com/donut_640.jpg",
                    "largeImageURL": "https://cdn.example.com/donut_1280.jpg",
                    "pageURL": "https://example.com/photos/donut-1",
                    "tags": "donut, pastry, food"
                },
                {
                    "webformatURL": "https://cdn.example.com/glazed_640.jpg"
                }
            ]
        }"#;

        let response: ImageSearchResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.total, Some(2));
        assert_eq!(response.hits.len(), 2);
        assert_eq!(
            response.hits[0].webformat_url,
            "https://cdn.example.com/donut_640.jpg"
        );
        assert_eq!(response.hits[1].large_image_url, None);
    }

    #[test]
    fn test_missing_hits_field_defaults_to_empty_list() {
        let json = r#"{"total": 0}"#;

        let response: ImageSearchResponse = serde_json::from_str(json).unwrap();

        assert!(response.hits.is_empty());
    }

    #[test]
    fn test_hit_without_webformat_url_is_a_parse_failure() {
        let json = r#"{"hits": [{"pageURL": "https://example.com/photos/1"}]}"#;

        let result: Result<ImageSearchResponse, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }
}
