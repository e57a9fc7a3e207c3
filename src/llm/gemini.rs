use reqwest::Client as HttpClient;
use serde::{ Deserialize, Serialize };
use std::time::Duration;
use log::debug;

/// Fixed production endpoint. Tests swap in a stub via `AppConfig::api_url`.
pub const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Conversation role as Gemini spells it: the assistant side is "model".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    pub text: String,
}

/// One turn of the upstream-formatted conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: String) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part { text }],
        }
    }

    pub fn model(text: String) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part { text }],
        }
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
}

// Response decoding is deliberately lenient: a 200 with any segment of the
// candidates[0].content.parts[0].text path missing must yield None, never a
// decode failure.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Reply text of the first candidate, if the response carries one.
    pub fn reply_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: HttpClient,
    api_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(
        api_url: String,
        api_key: String,
        timeout: Duration
    ) -> Result<Self, reqwest::Error> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self { http, api_url, api_key })
    }

    /// One generateContent call. The key travels as a query parameter, never
    /// in the body. Non-2xx statuses and network failures surface as
    /// `reqwest::Error`; so does a 2xx body that is not JSON.
    pub async fn generate(
        &self,
        contents: &[Content]
    ) -> Result<GenerateContentResponse, reqwest::Error> {
        debug!("POST {} ({} turn(s))", self.api_url, contents.len());
        let resp = self.http
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest { contents })
            .send().await?
            .error_for_status()?;
        resp.json::<GenerateContentResponse>().await
    }
}
