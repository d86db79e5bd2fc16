use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MODEL: &str = "command";
pub const MAX_TOKENS: u32 = 250;
pub const TEMPERATURE: f32 = 0.7;
pub const STOP_SEQUENCES: [&str; 1] = ["User:"];

const GENERATE_URL: &str = "https://api.cohere.ai/v1/generate";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generation service returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("generation service returned no completions")]
    Empty,
}

/// Seam between the orchestrator and the hosted generation service.
pub trait Generate {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
    stop_sequences: &'a [&'a str],
}

#[derive(Deserialize)]
struct GenerateResponse {
    generations: Vec<Generation>,
}

#[derive(Deserialize)]
struct Generation {
    text: String,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Blocking client for the Cohere generate endpoint. One attempt per
/// call: no retry, no backoff, transport-default timeout.
pub struct CohereClient {
    http: Client,
    api_key: String,
}

impl CohereClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
        }
    }
}

impl Generate for CohereClient {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let request = GenerateRequest {
            model: MODEL,
            prompt,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            stop_sequences: &STOP_SEQUENCES,
        };

        let response = self
            .http
            .post(GENERATE_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .map(|body| body.message)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            return Err(GenerateError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response.json()?;
        let first = body.generations.first().ok_or(GenerateError::Empty)?;
        Ok(first.text.trim().to_string())
    }
}
