use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::FanoutPolicy;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub chat: ChatSettings,
    pub image: ImageSettings,
    #[serde(default)]
    pub generation: GenerationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layered load: optional `appsettings.{environment}` file, then
    /// `APP`-prefixed environment variables (`APP_CHAT__API_KEY` maps to
    /// `chat.api_key`). Only the two API keys have no default.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatSettings {
    #[serde(default = "default_chat_api_url")]
    pub api_url: String,
    pub api_key: String,
    #[serde(default = "default_chat_model")]
    pub model: String,
    #[serde(default = "default_chat_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageSettings {
    #[serde(default = "default_image_api_url")]
    pub api_url: String,
    pub api_key: String,
    #[serde(default = "default_negative_prompt")]
    pub negative_prompt: String,
    #[serde(default = "default_image_dimension")]
    pub width: u32,
    #[serde(default = "default_image_dimension")]
    pub height: u32,
    #[serde(default = "default_samples")]
    pub samples: u32,
    #[serde(default)]
    pub safety_checker: bool,
    #[serde(default = "default_image_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    #[serde(default = "default_variant_count")]
    pub variant_count: usize,
    #[serde(default)]
    pub fanout: FanoutPolicy,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            variant_count: default_variant_count(),
            fanout: FanoutPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_directives")]
    pub level: String,
    #[serde(default)]
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_directives(),
            enable_json: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_chat_api_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_chat_model() -> String {
    "llama3-8b-8192".to_string()
}

fn default_chat_timeout_seconds() -> u64 {
    30
}

fn default_image_api_url() -> String {
    "https://modelslab.com/api/v6/realtime/text2img".to_string()
}

fn default_negative_prompt() -> String {
    "bad quality".to_string()
}

fn default_image_dimension() -> u32 {
    512
}

fn default_samples() -> u32 {
    1
}

fn default_image_timeout_seconds() -> u64 {
    60
}

fn default_variant_count() -> usize {
    3
}

fn default_log_directives() -> String {
    "info,atelier=debug,tower_http=debug".to_string()
}
