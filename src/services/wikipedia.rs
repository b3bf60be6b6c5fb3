/// Wikipedia encyclopedia lookup
///
/// Resolves a free-text movie title against the Wikipedia Action API: a
/// search request first (the fuzzy "did you mean" step), then one page
/// request that fetches a five-sentence plain-text summary, the canonical
/// page URL, and enough metadata to recognize disambiguation pages.
///
/// This path is best-effort: ambiguity is the only outcome reported
/// distinctly, every other failure collapses into `NotFound` and never
/// aborts the overall search action.
use std::collections::HashMap;

use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::{config::Config, error::AppResult};

const SUMMARY_SENTENCES: &str = "5";
const MAX_SUGGESTIONS: usize = 3;

/// Outcome of one encyclopedia lookup
#[derive(Debug, Clone, PartialEq)]
pub enum WikiLookup {
    /// The title resolved to a single article
    Found {
        summary: String,
        url: Option<String>,
    },
    /// The title matched a disambiguation page; up to the first three
    /// alternative titles are carried for user guidance
    Ambiguous { options: Vec<String> },
    /// Nothing usable, for any reason
    NotFound,
}

#[derive(Clone)]
pub struct WikipediaClient {
    http_client: HttpClient,
    api_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchMatch>,
}

#[derive(Debug, Deserialize)]
struct SearchMatch {
    title: String,
}

#[derive(Debug, Deserialize)]
struct PageResponse {
    #[serde(default)]
    query: Option<PageQuery>,
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    #[serde(default)]
    pages: HashMap<String, Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    missing: Option<serde_json::Value>,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    fullurl: Option<String>,
    #[serde(default)]
    pageprops: Option<PageProps>,
    #[serde(default)]
    links: Option<Vec<PageLink>>,
}

#[derive(Debug, Deserialize)]
struct PageProps {
    #[serde(default)]
    disambiguation: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct PageLink {
    ns: i32,
    title: String,
}

impl WikipediaClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url: config.wikipedia_api_url.clone(),
        }
    }

    /// Best-effort lookup: failures are logged and absorbed into `NotFound`
    pub async fn lookup(&self, title: &str) -> WikiLookup {
        match self.try_lookup(title).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(title = %title, error = %e, "Wikipedia lookup failed");
                WikiLookup::NotFound
            }
        }
    }

    async fn try_lookup(&self, title: &str) -> AppResult<WikiLookup> {
        let resolved = match self.resolve_title(title).await? {
            Some(resolved) => resolved,
            None => return Ok(WikiLookup::NotFound),
        };

        self.fetch_page(&resolved).await
    }

    /// Fuzzy title resolution via the search endpoint; returns the best
    /// matching article title, if any
    async fn resolve_title(&self, title: &str) -> AppResult<Option<String>> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", title),
                ("srlimit", "1"),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let search: SearchResponse = response.json().await?;
        let best = search
            .query
            .and_then(|q| q.search.into_iter().next())
            .map(|m| m.title);

        Ok(best)
    }

    /// Fetches summary, canonical URL, disambiguation flag, and candidate
    /// links for the resolved title in one request, following redirects
    async fn fetch_page(&self, title: &str) -> AppResult<WikiLookup> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("titles", title),
                ("redirects", "1"),
                ("prop", "extracts|info|pageprops|links"),
                ("exsentences", SUMMARY_SENTENCES),
                ("explaintext", "1"),
                ("inprop", "url"),
                ("plnamespace", "0"),
                ("pllimit", "10"),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let page_response: PageResponse = response.json().await?;
        Ok(Self::interpret_page(page_response))
    }

    fn interpret_page(response: PageResponse) -> WikiLookup {
        let page = match response
            .query
            .and_then(|q| q.pages.into_values().next())
            .filter(|p| p.missing.is_none())
        {
            Some(page) => page,
            None => return WikiLookup::NotFound,
        };

        let is_disambiguation = page
            .pageprops
            .as_ref()
            .is_some_and(|props| props.disambiguation.is_some());

        if is_disambiguation {
            let options: Vec<String> = page
                .links
                .unwrap_or_default()
                .into_iter()
                .filter(|link| link.ns == 0)
                .take(MAX_SUGGESTIONS)
                .map(|link| link.title)
                .collect();
            return WikiLookup::Ambiguous { options };
        }

        match page.extract.filter(|extract| !extract.trim().is_empty()) {
            Some(summary) => WikiLookup::Found {
                summary,
                url: page.fullurl,
            },
            None => WikiLookup::NotFound,
        }
    }
}
