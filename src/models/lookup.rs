use serde::{Deserialize, Serialize};

/// Upper bound on web hits returned per search
pub const MAX_WEB_HITS: usize = 5;

/// A movie-name search request
#[derive(Debug, Clone, Deserialize)]
pub struct LookupQuery {
    pub title: String,
}

impl LookupQuery {
    /// Returns the trimmed title, or None when the input is empty or
    /// whitespace-only and no lookup should be attempted.
    pub fn normalized(&self) -> Option<&str> {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

/// One web search result in provider order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Composite result of one search interaction
///
/// Every field is optional or empty on partial failure; absence of both
/// summary and web hits is the "no results" signal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupResult {
    pub summary: Option<String>,
    pub source_url: Option<String>,
    pub poster_url: Option<String>,
    pub web_hits: Vec<WebHit>,
}

impl LookupResult {
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.web_hits.is_empty()
    }
}
