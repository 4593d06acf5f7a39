//! LLM credentials and model selection.

use std::path::Path;

use ghostwriter_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::LLMProvider;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
pub const DEFAULT_GROQ_MODEL: &str = "llama3-8b-8192";

/// LLM configuration, optionally read from llm-config.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default)]
    pub groq_api_key: Option<String>,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    #[serde(default = "default_groq_model")]
    pub groq_model: String,
}

fn default_openai_model() -> String {
    DEFAULT_OPENAI_MODEL.into()
}
fn default_groq_model() -> String {
    DEFAULT_GROQ_MODEL.into()
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            groq_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.into(),
            groq_model: DEFAULT_GROQ_MODEL.into(),
        }
    }
}

impl LLMConfig {
    /// Keys from `OPENAI_API_KEY` / `GROQ_API_KEY`, default models.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.fill_from_env();
        config
    }

    /// Load config from file; keys the file leaves out come from env vars.
    pub fn load(config_path: &Path) -> Self {
        let parsed: Option<LLMConfig> = std::fs::read_to_string(config_path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok());

        match parsed {
            Some(mut config) => {
                config.fill_from_env();
                config
            }
            None => {
                debug!("No usable LLM config at {}", config_path.display());
                Self::from_env()
            }
        }
    }

    fn fill_from_env(&mut self) {
        if self.openai_api_key.is_none() {
            self.openai_api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        if self.groq_api_key.is_none() {
            self.groq_api_key = std::env::var("GROQ_API_KEY").ok();
        }
    }

    /// Model and API key for a provider, or a config error if the key is missing.
    pub fn credentials(&self, provider: LLMProvider) -> Result<(String, String)> {
        let (key, model, var) = match provider {
            LLMProvider::OpenAI => (&self.openai_api_key, &self.openai_model, "OPENAI_API_KEY"),
            LLMProvider::Groq => (&self.groq_api_key, &self.groq_model, "GROQ_API_KEY"),
        };
        match key {
            Some(k) if !k.trim().is_empty() => Ok((model.clone(), k.clone())),
            _ => Err(Error::Config(format!("{} not set", var))),
        }
    }
}
