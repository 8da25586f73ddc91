use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ImageModel, ImageModelError};
use crate::presentation::config::ImageSettings;

/// Client for the ModelsLab realtime text2img endpoint. The service takes
/// its API key in the request body and its dimensions as strings.
pub struct ModelsLabClient {
    client: Client,
    api_url: String,
    api_key: String,
    negative_prompt: String,
    width: u32,
    height: u32,
    samples: u32,
    safety_checker: bool,
    timeout: Duration,
}

#[derive(Serialize)]
struct Text2ImgRequest {
    key: String,
    prompt: String,
    negative_prompt: String,
    width: String,
    height: String,
    safety_checker: bool,
    seed: Option<i64>,
    samples: u32,
    base64: bool,
    webhook: Option<String>,
    track_id: Option<String>,
}

#[derive(Deserialize)]
struct Text2ImgResponse {
    status: String,
    #[serde(default)]
    output: Vec<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ModelsLabClient {
    pub fn new(settings: &ImageSettings) -> Self {
        Self {
            client: Client::new(),
            api_url: settings.api_url.clone(),
            api_key: settings.api_key.clone(),
            negative_prompt: settings.negative_prompt.clone(),
            width: settings.width,
            height: settings.height,
            samples: settings.samples,
            safety_checker: settings.safety_checker,
            timeout: Duration::from_secs(settings.timeout_seconds),
        }
    }
}

#[async_trait]
impl ImageModel for ModelsLabClient {
    async fn generate(&self, prompt: &str) -> Result<String, ImageModelError> {
        let request_body = Text2ImgRequest {
            key: self.api_key.clone(),
            prompt: prompt.to_string(),
            negative_prompt: self.negative_prompt.clone(),
            width: self.width.to_string(),
            height: self.height.to_string(),
            safety_checker: self.safety_checker,
            seed: None,
            samples: self.samples,
            base64: false,
            webhook: None,
            track_id: None,
        };

        let response = self
            .client
            .post(&self.api_url)
            .timeout(self.timeout)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ImageModelError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ImageModelError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ImageModelError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let body: Text2ImgResponse = response
            .json()
            .await
            .map_err(|e| ImageModelError::InvalidResponse(e.to_string()))?;

        if body.status != "success" {
            let detail = body.message.unwrap_or_default();
            return Err(ImageModelError::ApiRequestFailed(format!(
                "status {}: {}",
                body.status, detail
            )));
        }

        body.output
            .into_iter()
            .find(|url| !url.trim().is_empty())
            .ok_or_else(|| ImageModelError::InvalidResponse("no output url".to_string()))
    }
}
