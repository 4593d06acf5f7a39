//! LLM topic classification with keyword fallback.

use std::sync::Arc;

use ghostwriter_chat::{CompletionClient, CompletionRequest};
use ghostwriter_core::{Error, Result};
use tracing::{debug, warn};

use crate::tags::{extract_tag_fallback, TagAccumulator};

/// Outcome of asking the model for a tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Raw tag as returned by the model.
    Tag(String),
    /// The call failed or returned nothing usable.
    Failed(String),
}

/// Build the single-tag classification prompt for a post.
pub fn classification_prompt(text: &str) -> String {
    format!(
        r#"Analyze the following LinkedIn post and extract ONLY 1 most relevant professional topic tag.

Guidelines:
- Return only 1 tag that represents the MAIN professional topic
- Use 1-2 words maximum (e.g., "Career Development", "Investment", "Technology")
- Focus on professional/business themes, NOT locations or personal details
- Avoid vague terms like "General", "Content", "Post"
- Avoid location names like "Pakistan", "Karachi", "Lahore"
- Choose the most specific professional category
- Make it broad enough to be reusable across similar posts

Examples of good tags: "Investment", "Career Development", "Entrepreneurship", "Technology", "Marketing"
Examples of bad tags: "Pakistan", "Karachi", "Personal", "General", "Content"

Post text: "{text}"

Return only 1 tag, nothing else."#
    )
}

/// First non-empty line of a model response, without surrounding quotes.
fn extract_raw_tag(response: &str) -> Option<String> {
    response
        .lines()
        .map(|l| l.trim().trim_matches('"').trim_matches('\'').trim())
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

/// Asks a completion service for one topic tag per post.
pub struct TagClassifier {
    client: Arc<dyn CompletionClient>,
    pub temperature: f64,
    pub max_tokens: usize,
}

impl TagClassifier {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            temperature: 0.1,
            max_tokens: 20,
        }
    }

    async fn request_tag(&self, text: &str) -> Result<String> {
        let request = CompletionRequest::user(
            self.client.model(),
            classification_prompt(text),
            self.temperature,
            self.max_tokens,
        );
        let response = self.client.complete(&request).await?;
        extract_raw_tag(&response)
            .ok_or_else(|| Error::Classification("empty response".into()))
    }

    /// Classify a post. Never errors; failures come back as `Failed`.
    pub async fn classify(&self, text: &str) -> Classification {
        match self.request_tag(text).await {
            Ok(tag) => Classification::Tag(tag),
            Err(e) => Classification::Failed(e.to_string()),
        }
    }

    /// Classify a post and normalize the result into the accumulator.
    ///
    /// The keyword heuristic stands in only when classification failed.
    pub async fn discover_tag(&self, text: &str, tags: &mut TagAccumulator) -> String {
        match self.classify(text).await {
            Classification::Tag(raw) => {
                let tag = tags.assign(&raw);
                debug!("Classified as {:?} → {:?}", raw, tag);
                tag
            }
            Classification::Failed(reason) => {
                warn!("Tag classification failed, using keyword fallback: {}", reason);
                tags.assign(extract_tag_fallback(text))
            }
        }
    }
}
