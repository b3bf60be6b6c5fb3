/// Azure OpenAI recommendation client
///
/// Wraps a single chat-completion call against a deployment-scoped Azure
/// endpoint. The prompt template and generation parameters are fixed; the
/// completion text is returned unparsed. This path is fail-loud: any error
/// propagates to the handler and surfaces as a failed interaction.
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::PreferenceSelection,
};

const MODEL_NAME: &str = "gpt-4o";
const TEMPERATURE: f32 = 0.8;
const MAX_TOKENS: u32 = 500;
const TOP_P: f32 = 0.9;

/// Generates free-text movie recommendations from a preference selection
#[async_trait::async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, selection: &PreferenceSelection) -> AppResult<String>;
}

#[derive(Clone)]
pub struct RecommendationClient {
    http_client: HttpClient,
    api_key: String,
    api_base: String,
    deployment_name: String,
    api_version: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Request payload for the Azure OpenAI chat completions endpoint
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl RecommendationClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: config.azure_openai_api_key.clone(),
            api_base: config.azure_openai_api_base.clone(),
            deployment_name: config.azure_openai_deployment_name.clone(),
            api_version: config.azure_openai_api_version.clone(),
        }
    }

    /// Fills the six template slots with the selection's values, verbatim
    fn build_prompt(selection: &PreferenceSelection) -> String {
        format!(
            "Recommend 5 top Bollywood movies based on:\n\
             - Genre: {}\n\
             - Favorite Actor: {}\n\
             - Favorite Actress: {}\n\
             - Director: {}\n\
             - Release Year: Between {} and {}\n\
             \n\
             Give a brief reason for each recommendation.",
            selection.genre,
            selection.actor,
            selection.actress,
            selection.director,
            selection.year_start,
            selection.year_end,
        )
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions",
            self.api_base.trim_end_matches('/'),
            self.deployment_name
        )
    }
}

#[async_trait::async_trait]
impl Recommender for RecommendationClient {
    async fn recommend(&self, selection: &PreferenceSelection) -> AppResult<String> {
        let prompt = Self::build_prompt(selection);

        let body = ChatRequest {
            model: MODEL_NAME,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
        };

        let response = self
            .http_client
            .post(self.completions_url())
            .query(&[("api-version", self.api_version.as_str())])
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Chat completion API returned status {}: {}",
                status, body
            )));
        }

        let completion: ChatResponse = response.json().await?;
        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::ExternalApi("Chat completion response had no content".to_string())
            })?;

        tracing::info!(
            genre = %selection.genre,
            chars = text.len(),
            "Recommendation generated"
        );

        Ok(text)
    }
}
