#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub term: String,
    pub credential: Option<String>,
}

impl SearchRequest {
    pub fn build_for_term(search_term: &str) -> Self {
        Self {
            term: search_term.to_string(),
            credential: None,
        }
    }

    pub fn build_with_credential(search_term: &str, api_credential: &str) -> Self {
        Self {
            term: search_term.to_string(),
            credential: Some(api_credential.to_string()),
        }
    }

    /// A credential that is absent or blank counts as missing.
    pub fn has_credential(&self) -> bool {
        self.credential
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}
