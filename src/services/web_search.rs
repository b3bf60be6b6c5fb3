/// DuckDuckGo web search client
///
/// Two sub-calls per search interaction: a text search against the HTML
/// endpoint (top 5 hits, provider order preserved) and an image search via
/// the vqd-token JSON endpoint (top 1 hit, used as the movie poster). Both
/// queries carry a fixed Bollywood-movie qualifier. Best-effort throughout:
/// a failed sub-call yields an empty hit list or absent poster, never an
/// error.
use regex::Regex;
use reqwest::Client as HttpClient;
use scraper::{Html, Selector};
use serde::Deserialize;
use url::Url;

use crate::{
    config::Config,
    error::AppResult,
    models::{WebHit, MAX_WEB_HITS},
};

const TEXT_QUERY_SUFFIX: &str = " bollywood movie";
const IMAGE_QUERY_SUFFIX: &str = " bollywood movie poster";
const USER_AGENT: &str = "Mozilla/5.0 (compatible; CineMatch/0.1)";
const VQD_PATTERN: &str = r#"vqd=['"]?([\d-]+)"#;

/// Merged outcome of the text and image sub-calls
#[derive(Debug, Clone, Default)]
pub struct WebSearchOutcome {
    pub web_hits: Vec<WebHit>,
    pub poster_url: Option<String>,
}

#[derive(Clone)]
pub struct SearchClient {
    http_client: HttpClient,
    base_url: String,
    vqd_pattern: Regex,
}

#[derive(Debug, Deserialize)]
struct ImageSearchResponse {
    #[serde(default)]
    results: Vec<ImageResult>,
}

#[derive(Debug, Deserialize)]
struct ImageResult {
    image: String,
}

impl SearchClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: config.search_base_url.trim_end_matches('/').to_string(),
            vqd_pattern: Regex::new(VQD_PATTERN).expect("vqd pattern is valid"),
        }
    }

    /// Runs both sub-calls for the given movie title, suppressing failures
    pub async fn search(&self, title: &str) -> WebSearchOutcome {
        let text_query = format!("{}{}", title, TEXT_QUERY_SUFFIX);
        let image_query = format!("{}{}", title, IMAGE_QUERY_SUFFIX);

        let (text, image) = tokio::join!(
            self.text_search(&text_query),
            self.image_search(&image_query)
        );

        let web_hits = match text {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!(query = %text_query, error = %e, "Text search failed");
                Vec::new()
            }
        };

        let poster_url = match image {
            Ok(poster) => poster,
            Err(e) => {
                tracing::warn!(query = %image_query, error = %e, "Image search failed");
                None
            }
        };

        WebSearchOutcome {
            web_hits,
            poster_url,
        }
    }

    /// Text search against the HTML endpoint, parsed into ranked hits
    async fn text_search(&self, query: &str) -> AppResult<Vec<WebHit>> {
        let url = format!("{}/html/", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()?;

        let html = response.text().await?;
        Ok(Self::parse_text_results(&html))
    }

    /// Image search: bootstrap a vqd token from the search page, then hit
    /// the JSON endpoint and take the first image URL
    async fn image_search(&self, query: &str) -> AppResult<Option<String>> {
        let bootstrap = self
            .http_client
            .get(&self.base_url)
            .header("User-Agent", USER_AGENT)
            .query(&[("q", query), ("iax", "images"), ("ia", "images")])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let vqd = match self.extract_vqd(&bootstrap) {
            Some(vqd) => vqd,
            None => {
                tracing::debug!(query = %query, "No vqd token in image search page");
                return Ok(None);
            }
        };

        let url = format!("{}/i.js", self.base_url);
        let images: ImageSearchResponse = self
            .http_client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .query(&[("l", "us-en"), ("o", "json"), ("q", query), ("vqd", vqd.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(images.results.into_iter().next().map(|r| r.image))
    }

    fn extract_vqd(&self, html: &str) -> Option<String> {
        self.vqd_pattern
            .captures(html)
            .map(|captures| captures[1].to_string())
    }

    fn parse_text_results(html: &str) -> Vec<WebHit> {
        let document = Html::parse_document(html);
        let (Ok(result_sel), Ok(title_sel), Ok(snippet_sel)) = (
            Selector::parse(".result"),
            Selector::parse(".result__title a"),
            Selector::parse(".result__snippet"),
        ) else {
            return Vec::new();
        };

        let mut hits = Vec::new();
        for result in document.select(&result_sel) {
            if hits.len() == MAX_WEB_HITS {
                break;
            }

            let Some(title_elem) = result.select(&title_sel).next() else {
                continue;
            };
            let title = title_elem.text().collect::<String>().trim().to_string();
            let href = title_elem.value().attr("href").unwrap_or("");

            let Some(url) = Self::normalize_hit_url(href) else {
                continue;
            };
            if title.is_empty() {
                continue;
            }

            let snippet = result
                .select(&snippet_sel)
                .next()
                .map(|elem| elem.text().collect::<String>().trim().to_string())
                .unwrap_or_default();

            hits.push(WebHit {
                title,
                url,
                snippet,
            });
        }

        hits
    }

    /// Resolves a result link to its target URL: protocol-relative links
    /// get a scheme, and DuckDuckGo /l/ redirect links are unwrapped to
    /// their uddg destination
    fn normalize_hit_url(href: &str) -> Option<String> {
        let absolute = if href.starts_with("//") {
            format!("https:{}", href)
        } else {
            href.to_string()
        };

        if !absolute.starts_with("http") {
            return None;
        }

        let parsed = Url::parse(&absolute).ok()?;
        if parsed.path() == "/l/" {
            if let Some((_, target)) = parsed.query_pairs().find(|(key, _)| key == "uddg") {
                return Some(target.into_owned());
            }
        }

        Some(absolute)
    }
}
