use serde::Deserialize;

/// Application configuration loaded from environment variables
///
/// The four Azure OpenAI values are passed through as-is: a missing
/// credential becomes an empty string and fails at the network boundary,
/// not at load time.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Azure OpenAI API key
    #[serde(default)]
    pub azure_openai_api_key: String,

    /// Azure OpenAI resource endpoint (e.g. https://my-resource.openai.azure.com)
    #[serde(default)]
    pub azure_openai_api_base: String,

    /// Azure OpenAI deployment name
    #[serde(default)]
    pub azure_openai_deployment_name: String,

    /// Azure OpenAI API version (e.g. 2024-05-01-preview)
    #[serde(default)]
    pub azure_openai_api_version: String,

    /// Wikipedia Action API endpoint
    #[serde(default = "default_wikipedia_api_url")]
    pub wikipedia_api_url: String,

    /// DuckDuckGo base URL (HTML search and image search live under it)
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_wikipedia_api_url() -> String {
    "https://en.wikipedia.org/w/api.php".to_string()
}

fn default_search_base_url() -> String {
    "https://duckduckgo.com".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
