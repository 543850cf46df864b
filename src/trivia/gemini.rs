use async_trait::async_trait;
use chipp_http::{HttpClient, HttpMethod, NoInterceptor};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::trivia::error::{Error, Result};
use crate::trivia::lookup::TriviaProvider;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Trivia from Gemini's `generateContent` endpoint. One attempt per number.
pub struct GeminiProvider {
    http_client: HttpClient<NoInterceptor>,
    api_base: String,
    api_key: String,
    model: String,
    language: String,
}

impl GeminiProvider {
    pub fn new(api_base: &str, api_key: &str, model: &str, language: &str) -> Result<Self> {
        let api_base = api_base.trim_end_matches('/');
        let http_client = HttpClient::new(api_base)
            .map_err(|_| Error::InvalidBaseUrl(api_base.to_string()))?;

        Ok(GeminiProvider {
            http_client,
            api_base: api_base.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            language: language.to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, self.model, self.api_key
        )
    }
}

#[async_trait]
impl TriviaProvider for GeminiProvider {
    async fn generate(&self, number: i64) -> Result<String> {
        let body = GenerateContentRequest::from_prompt(prompt(number, &self.language));

        let mut request = self.http_client.new_request_with_url(self.endpoint())?;
        request.set_json_body(&body);
        request.set_method(HttpMethod::Post);

        debug!("requesting trivia for {number} from {}", self.model);

        let response: GenerateContentResponse = self
            .http_client
            .perform_request(request, chipp_http::json::parse_json)
            .await?;

        trace!("trivia response: {:?}", response);

        match response.text() {
            Some(text) => Ok(text),
            None => {
                debug!("no trivia text for {number}");
                Ok(String::new())
            }
        }
    }
}

/// Instruction sent to the model for `number`.
pub fn prompt(number: i64, language: &str) -> String {
    format!(
        "Write one short, interesting and fun sentence (at most 20 words) about the number {number}. \
         It can be a mathematical or historical curiosity, or a lucky message. \
         Answer in {language}."
    )
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: String) -> Self {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt) }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate, concatenated.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
