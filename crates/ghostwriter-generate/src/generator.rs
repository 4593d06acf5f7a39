//! Post generation: prompt → single completion call → trimmed text.

use std::sync::Arc;

use ghostwriter_chat::{CompletionClient, CompletionRequest};
use ghostwriter_core::{Error, Language, LengthBucket, Result};
use ghostwriter_corpus::Corpus;
use tracing::{debug, info};

use crate::prompt::{build_prompt, PromptStyle};

/// Sampling parameters for generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    /// Overrides the client's default model when set.
    pub model: Option<String>,
    pub temperature: f64,
    pub max_tokens: usize,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: None,
            temperature: 0.5,
            max_tokens: 2000,
        }
    }
}

/// Writes new posts in the corpus author's voice.
pub struct PostGenerator {
    client: Arc<dyn CompletionClient>,
    corpus: Corpus,
    style: PromptStyle,
    settings: GenerationSettings,
}

impl PostGenerator {
    pub fn new(
        client: Arc<dyn CompletionClient>,
        corpus: Corpus,
        style: PromptStyle,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            client,
            corpus,
            style,
            settings,
        }
    }

    /// The exact prompt `generate` would send.
    pub fn prompt_for(&self, length: LengthBucket, language: Language, tag: &str) -> String {
        build_prompt(&self.corpus, length, language, tag, &self.style)
    }

    /// Generate one post. Service failures are returned, never retried.
    pub async fn generate(
        &self,
        length: LengthBucket,
        language: Language,
        tag: &str,
    ) -> Result<String> {
        let prompt = self.prompt_for(length, language, tag);
        let model = self
            .settings
            .model
            .clone()
            .unwrap_or_else(|| self.client.model().to_string());

        debug!("Generating {} {} post on {:?} with {}", length, language, tag, model);

        let request = CompletionRequest::user(
            model,
            prompt,
            self.settings.temperature,
            self.settings.max_tokens,
        );
        let response = self
            .client
            .complete(&request)
            .await
            .map_err(|e| Error::Generation(e.to_string()))?;

        let post = response.trim().to_string();
        info!("Generated post ({} lines)", post.lines().count());
        Ok(post)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingClient {
        reply: std::result::Result<String, String>,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl RecordingClient {
        fn replying(reply: std::result::Result<&str, &str>) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.map(str::to_string).map_err(str::to_string),
                requests: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionClient for RecordingClient {
        async fn complete(&self, request: &CompletionRequest) -> Result<String> {
            self.requests.lock().unwrap().push(request.clone());
            self.reply.clone().map_err(Error::Http)
        }

        fn model(&self) -> &str {
            "gpt-4o"
        }
    }

    fn corpus() -> Corpus {
        Corpus::from_json_str(
            r#"{"posts": [{"text": "Saving money is hard.\nBut I did it anyway.", "line_count": 2,
                "language": "English", "tags": ["Financial Planning"]}]}"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_generate_sends_single_user_message() {
        let client = RecordingClient::replying(Ok("\n\n  Start small.\nStay consistent.  \n"));
        let generator = PostGenerator::new(
            client.clone(),
            corpus(),
            PromptStyle::default(),
            GenerationSettings::default(),
        );

        let post = generator
            .generate(LengthBucket::Short, Language::English, "Financial Planning")
            .await
            .unwrap();
        assert_eq!(post, "Start small.\nStay consistent.");

        let requests = client.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.model, "gpt-4o");
        assert_eq!(req.temperature, 0.5);
        assert_eq!(req.max_tokens, 2000);
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.messages[0].role, "user");
        assert!(req.messages[0].content.contains("Example 1:\n\nSaving money is hard."));
    }

    #[tokio::test]
    async fn test_generate_propagates_service_error() {
        let client = RecordingClient::replying(Err("API error 500"));
        let generator = PostGenerator::new(
            client,
            corpus(),
            PromptStyle::default(),
            GenerationSettings::default(),
        );

        let err = generator
            .generate(LengthBucket::Medium, Language::Urduish, "Investment")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Generation(ref msg) if msg.contains("API error 500")));
    }

    #[tokio::test]
    async fn test_model_override() {
        let client = RecordingClient::replying(Ok("ok"));
        let generator = PostGenerator::new(
            client.clone(),
            Corpus::default(),
            PromptStyle::default(),
            GenerationSettings {
                model: Some("gpt-4o-mini".into()),
                ..Default::default()
            },
        );

        generator
            .generate(LengthBucket::Long, Language::English, "Leadership")
            .await
            .unwrap();
        assert_eq!(client.requests.lock().unwrap()[0].model, "gpt-4o-mini");
    }
}
