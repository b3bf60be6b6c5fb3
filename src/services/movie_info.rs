/// Composite movie info search
///
/// Runs the encyclopedia lookup and the web search concurrently and merges
/// their independent outcomes into one `LookupResult`. The two sources
/// write to disjoint fields, so one source failing never suppresses the
/// other's success.
use crate::{
    config::Config,
    models::LookupResult,
    services::{
        web_search::{SearchClient, WebSearchOutcome},
        wikipedia::{WikiLookup, WikipediaClient},
    },
};

/// Looks up information about a named movie from external sources
#[async_trait::async_trait]
pub trait MovieInfoSource: Send + Sync {
    async fn search(&self, title: &str) -> LookupResult;
}

pub struct MovieInfo {
    wikipedia: WikipediaClient,
    web_search: SearchClient,
}

impl MovieInfo {
    pub fn new(config: &Config) -> Self {
        Self {
            wikipedia: WikipediaClient::new(config),
            web_search: SearchClient::new(config),
        }
    }

    fn merge(wiki: WikiLookup, web: WebSearchOutcome) -> LookupResult {
        let (summary, source_url) = match wiki {
            WikiLookup::Found { summary, url } => (Some(summary), url),
            WikiLookup::Ambiguous { options } => (Some(format_disambiguation(&options)), None),
            WikiLookup::NotFound => (None, None),
        };

        LookupResult {
            summary,
            source_url,
            poster_url: web.poster_url,
            web_hits: web.web_hits,
        }
    }
}

#[async_trait::async_trait]
impl MovieInfoSource for MovieInfo {
    async fn search(&self, title: &str) -> LookupResult {
        let (wiki, web) = tokio::join!(self.wikipedia.lookup(title), self.web_search.search(title));

        let result = Self::merge(wiki, web);
        tracing::info!(
            title = %title,
            has_summary = result.summary.is_some(),
            has_poster = result.poster_url.is_some(),
            web_hits = result.web_hits.len(),
            "Movie info search completed"
        );

        result
    }
}

/// Guidance text for ambiguous titles, naming up to three alternatives
fn format_disambiguation(options: &[String]) -> String {
    format!(
        "Disambiguation: try being more specific. Suggestions: {}",
        options.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WebHit;

    #[test]
    fn test_merge_found_with_hits() {
        let wiki = WikiLookup::Found {
            summary: "Sholay is a 1975 Indian action film.".to_string(),
            url: Some("https://en.wikipedia.org/wiki/Sholay".to_string()),
        };
        let web = WebSearchOutcome {
            web_hits: vec![WebHit {
                title: "Sholay (1975)".to_string(),
                url: "https://example.com".to_string(),
                snippet: "A curry western.".to_string(),
            }],
            poster_url: Some("https://example.com/poster.jpg".to_string()),
        };

        let result = MovieInfo::merge(wiki, web);

        assert_eq!(
            result.summary.as_deref(),
            Some("Sholay is a 1975 Indian action film.")
        );
        assert_eq!(
            result.source_url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Sholay")
        );
        assert_eq!(
            result.poster_url.as_deref(),
            Some("https://example.com/poster.jpg")
        );
        assert_eq!(result.web_hits.len(), 1);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_merge_ambiguous_has_guidance_and_no_source_url() {
        let wiki = WikiLookup::Ambiguous {
            options: vec![
                "Don (1978 film)".to_string(),
                "Don (2006 film)".to_string(),
                "Don (2022 film)".to_string(),
            ],
        };

        let result = MovieInfo::merge(wiki, WebSearchOutcome::default());

        assert_eq!(
            result.summary.as_deref(),
            Some(
                "Disambiguation: try being more specific. Suggestions: \
                 Don (1978 film), Don (2006 film), Don (2022 film)"
            )
        );
        assert!(result.source_url.is_none());
    }

    #[test]
    fn test_merge_one_source_failing_keeps_the_other() {
        let web = WebSearchOutcome {
            web_hits: vec![WebHit {
                title: "Hit".to_string(),
                url: "https://example.com".to_string(),
                snippet: String::new(),
            }],
            poster_url: None,
        };

        let result = MovieInfo::merge(WikiLookup::NotFound, web);

        assert!(result.summary.is_none());
        assert_eq!(result.web_hits.len(), 1);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_merge_both_empty_is_no_results() {
        let result = MovieInfo::merge(WikiLookup::NotFound, WebSearchOutcome::default());
        assert!(result.is_empty());
    }
}
