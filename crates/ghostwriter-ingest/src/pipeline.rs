//! Batch pre-processing of scraped posts.

use std::sync::Arc;

use ghostwriter_chat::CompletionClient;
use ghostwriter_core::{PostRecord, Result};
use serde_json::Value;
use tracing::{info, warn};

use crate::classify::TagClassifier;
use crate::clean::{calculate_engagement, clean_text, count_lines, RawPost};
use crate::language::detect_language;
use crate::tags::TagAccumulator;

/// Result of one batch run.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Processed posts, in input order.
    pub posts: Vec<PostRecord>,
    /// Tag state at the end of the run.
    pub tags: TagAccumulator,
    /// Posts dropped for having no text.
    pub skipped: usize,
    /// Posts dropped because processing failed.
    pub failed: usize,
}

/// Cleans and tags scraped posts one at a time.
pub struct PostCleaner {
    classifier: TagClassifier,
    max_tags: usize,
}

impl PostCleaner {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            classifier: TagClassifier::new(client),
            max_tags: crate::tags::MAX_TAGS,
        }
    }

    /// Override the per-run tag cap.
    pub fn with_max_tags(mut self, max_tags: usize) -> Self {
        self.max_tags = max_tags;
        self
    }

    /// Clean, measure and tag one raw post.
    ///
    /// Returns `Ok(None)` when the post has no text after cleaning.
    pub async fn process_single_post(
        &self,
        raw: &Value,
        tags: &mut TagAccumulator,
    ) -> Result<Option<PostRecord>> {
        let post: RawPost = serde_json::from_value(raw.clone())?;

        let text = clean_text(post.text.as_deref().unwrap_or(""));
        if text.is_empty() {
            return Ok(None);
        }

        let engagement = calculate_engagement(&post);
        let line_count = count_lines(&text);
        let language = detect_language(&text);
        let tag = self.classifier.discover_tag(&text, tags).await;

        Ok(Some(PostRecord {
            text,
            engagement,
            line_count,
            language,
            tags: vec![tag],
        }))
    }

    /// Process every raw post in order. A failing post is logged and skipped.
    pub async fn process_posts(&self, raws: &[Value]) -> BatchOutcome {
        let total = raws.len();
        let mut tags = TagAccumulator::with_capacity(self.max_tags);
        let mut posts = Vec::with_capacity(total);
        let mut skipped = 0;
        let mut failed = 0;

        for (i, raw) in raws.iter().enumerate() {
            info!("Processing post {}/{}...", i + 1, total);
            match self.process_single_post(raw, &mut tags).await {
                Ok(Some(post)) => posts.push(post),
                Ok(None) => {
                    info!("Skipped post {} (empty or invalid)", i + 1);
                    skipped += 1;
                }
                Err(e) => {
                    warn!("Error processing post {}: {}", i + 1, e);
                    failed += 1;
                }
            }
        }

        info!(
            "Processed {} of {} posts (skipped={}, failed={}, tags={})",
            posts.len(),
            total,
            skipped,
            failed,
            tags.len()
        );

        BatchOutcome {
            posts,
            tags,
            skipped,
            failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ghostwriter_chat::CompletionRequest;
    use ghostwriter_core::{Error, Language};
    use serde_json::json;

    /// Tags every post with the first word of the post body.
    struct EchoClassifier;

    #[async_trait]
    impl CompletionClient for EchoClassifier {
        async fn complete(&self, request: &CompletionRequest) -> Result<String> {
            let content = &request.messages[0].content;
            let body = content
                .split("Post text: \"")
                .nth(1)
                .ok_or_else(|| Error::Http("bad prompt".into()))?;
            Ok(body.split_whitespace().next().unwrap_or("").to_string())
        }

        fn model(&self) -> &str {
            "echo"
        }
    }

    struct DownClient;

    #[async_trait]
    impl CompletionClient for DownClient {
        async fn complete(&self, _request: &CompletionRequest) -> Result<String> {
            Err(Error::Http("Request failed: connection refused".into()))
        }

        fn model(&self) -> &str {
            "down"
        }
    }

    #[tokio::test]
    async fn test_single_post_record() {
        let cleaner = PostCleaner::new(Arc::new(EchoClassifier));
        let mut tags = TagAccumulator::new();
        let raw = json!({
            "text": "  Budgeting  tips\n\n\n\nyeh mera plan hai  ",
            "reactions": [1, 2, 3],
            "comments": [{"text": "nice"}, {"text": "great"}],
            "url": "https://example.com/post/1"
        });

        let post = cleaner
            .process_single_post(&raw, &mut tags)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(post.text, "Budgeting  tips\n\nyeh mera plan hai");
        assert_eq!(post.engagement, 5);
        assert_eq!(post.line_count, 3);
        assert_eq!(post.language, Language::Urduish);
        assert_eq!(post.tags, vec!["Financial Planning".to_string()]);
    }

    #[tokio::test]
    async fn test_blank_post_is_skipped() {
        let cleaner = PostCleaner::new(Arc::new(EchoClassifier));
        let mut tags = TagAccumulator::new();
        let outcome = cleaner
            .process_single_post(&json!({"text": "  \n\n "}), &mut tags)
            .await
            .unwrap();
        assert!(outcome.is_none());
        assert!(tags.is_empty());
    }

    #[tokio::test]
    async fn test_batch_survives_bad_records() {
        let cleaner = PostCleaner::new(Arc::new(EchoClassifier));
        let raws = vec![
            json!({"text": "Poetry keeps me sane"}),
            json!({"text": ""}),
            json!({"text": 42}),
            json!("not an object"),
            json!({"text": "Cooking for the team", "reactions": [1]}),
        ];

        let outcome = cleaner.process_posts(&raws).await;
        assert_eq!(outcome.posts.len(), 2);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.failed, 2);
        assert_eq!(outcome.posts[0].tags, vec!["Poetry".to_string()]);
        assert_eq!(outcome.posts[1].tags, vec!["Cooking".to_string()]);
        assert_eq!(outcome.posts[1].engagement, 1);
    }

    #[tokio::test]
    async fn test_empty_non_list_engagement_is_kept() {
        let cleaner = PostCleaner::new(Arc::new(EchoClassifier));
        let raws = vec![json!({"text": "Poetry again", "reactions": {}, "comments": ""})];

        let outcome = cleaner.process_posts(&raws).await;
        assert_eq!(outcome.failed, 0);
        assert_eq!(outcome.posts.len(), 1);
        assert_eq!(outcome.posts[0].engagement, 0);
    }

    #[tokio::test]
    async fn test_batch_with_service_down_uses_fallback() {
        let cleaner = PostCleaner::new(Arc::new(DownClient));
        let raws = vec![json!({"text": "Our sales team closed a deal with a new client"})];

        let outcome = cleaner.process_posts(&raws).await;
        assert_eq!(outcome.posts.len(), 1);
        assert_eq!(outcome.posts[0].tags, vec!["Sales".to_string()]);
        assert_eq!(outcome.failed, 0);
    }

    #[tokio::test]
    async fn test_batch_respects_tag_cap() {
        let cleaner = PostCleaner::new(Arc::new(EchoClassifier)).with_max_tags(2);
        let raws = vec![
            json!({"text": "Poetry one"}),
            json!({"text": "Cooking two"}),
            json!({"text": "Gardening three"}),
        ];

        let outcome = cleaner.process_posts(&raws).await;
        assert_eq!(outcome.tags.len(), 2);
        assert_eq!(outcome.posts[2].tags, vec!["Poetry".to_string()]);
    }
}
