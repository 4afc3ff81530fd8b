use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::TextGenerator;
use crate::error::{upstream_error, Error};

#[derive(Clone, Debug)]
pub struct OllamaConfig {
    pub api_base: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:11434".into(),
            model: "llama3.2".into(),
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Non-streaming client for an Ollama server's `/api/generate`.
#[derive(Debug)]
pub struct Ollama {
    client: reqwest::Client,
    config: OllamaConfig,
}

impl Ollama {
    pub fn new(config: OllamaConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl TextGenerator for Ollama {
    #[tracing::instrument(skip(self, prompt), fields(model = %self.config.model, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String, Error> {
        let url = format!("{}/api/generate", self.config.api_base.trim_end_matches('/'));

        let res = self
            .client
            .post(url)
            .json(&GenerateRequest {
                model: &self.config.model,
                prompt,
                stream: false,
            })
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::warn!("ollama responded with {}", res.status());
            return Err(upstream_error());
        }

        let data: GenerateResponse = res.json().await?;

        Ok(data.response)
    }
}
