//! In-memory corpus of cleaned posts used as few-shot examples.

use std::collections::HashSet;
use std::path::Path;

use ghostwriter_core::{Error, LengthBucket, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Post as stored in the corpus file.
#[derive(Debug, Deserialize)]
struct StoredPost {
    text: String,
    #[serde(default)]
    engagement: Option<u64>,
    line_count: usize,
    language: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CorpusFile {
    posts: Vec<StoredPost>,
}

/// A loaded post with its derived length bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusPost {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement: Option<u64>,
    pub line_count: usize,
    pub language: String,
    pub tags: Vec<String>,
    /// Recomputed from `line_count` on every load.
    pub length: LengthBucket,
}

impl From<StoredPost> for CorpusPost {
    fn from(p: StoredPost) -> Self {
        Self {
            length: LengthBucket::from_line_count(p.line_count),
            text: p.text,
            engagement: p.engagement,
            line_count: p.line_count,
            language: p.language,
            tags: p.tags,
        }
    }
}

/// Queryable collection of example posts.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    posts: Vec<CorpusPost>,
    unique_tags: Vec<String>,
}

impl Corpus {
    /// Load a corpus file of the form `{ "posts": [...] }`.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Load(format!("{}: {}", path.display(), e)))?;
        let corpus = Self::parse(&data)
            .map_err(|e| Error::Load(format!("{}: {}", path.display(), e)))?;

        info!(
            "Loaded {} posts ({} unique tags) from {}",
            corpus.posts.len(),
            corpus.unique_tags.len(),
            path.display()
        );
        Ok(corpus)
    }

    /// Parse a corpus from a JSON string.
    pub fn from_json_str(data: &str) -> Result<Self> {
        Self::parse(data).map_err(|e| Error::Load(e.to_string()))
    }

    fn parse(data: &str) -> std::result::Result<Self, serde_json::Error> {
        let file: CorpusFile = serde_json::from_str(data)?;
        Ok(Self::from_posts(file.posts.into_iter().map(CorpusPost::from).collect()))
    }

    fn from_posts(posts: Vec<CorpusPost>) -> Self {
        let mut seen = HashSet::new();
        let mut unique_tags = Vec::new();
        for tag in posts.iter().flat_map(|p| p.tags.iter()) {
            let stripped = strip_quotes(tag);
            if seen.insert(stripped.to_string()) {
                unique_tags.push(stripped.to_string());
            }
        }
        Self { posts, unique_tags }
    }

    /// Posts matching a length bucket, language and tag, in load order.
    ///
    /// Language is compared case-sensitively; the tag must appear verbatim in
    /// the post's tag list.
    pub fn filter(&self, length: LengthBucket, language: &str, tag: &str) -> Vec<&CorpusPost> {
        self.posts
            .iter()
            .filter(|p| p.tags.iter().any(|t| t == tag))
            .filter(|p| p.language == language)
            .filter(|p| p.length == length)
            .collect()
    }

    /// Distinct tags with stray quote characters removed, in first-seen order.
    pub fn unique_tags(&self) -> &[String] {
        &self.unique_tags
    }

    pub fn posts(&self) -> &[CorpusPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Strip surrounding `"` then `'` characters from a tag token.
fn strip_quotes(tag: &str) -> &str {
    tag.trim_matches('"').trim_matches('\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Corpus {
        Corpus::from_json_str(
            r#"{
                "posts": [
                    {"text": "a\nb", "line_count": 2, "language": "English", "tags": ["Investment"]},
                    {"text": "paisa bachao", "line_count": 6, "language": "Urduish", "tags": ["Investment"]},
                    {"text": "c\nd\ne", "line_count": 3, "language": "English", "tags": ["\"Technology\""]},
                    {"text": "second short", "line_count": 1, "language": "English", "tags": ["Investment"], "engagement": 12},
                    {"text": "long one", "line_count": 11, "language": "English", "tags": ["'Investment'"]}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_length_is_derived() {
        let corpus = sample();
        let lengths: Vec<LengthBucket> = corpus.posts().iter().map(|p| p.length).collect();
        assert_eq!(
            lengths,
            vec![
                LengthBucket::Short,
                LengthBucket::Medium,
                LengthBucket::Short,
                LengthBucket::Short,
                LengthBucket::Long,
            ]
        );
    }

    #[test]
    fn test_filter_matches_all_predicates_in_order() {
        let corpus = sample();
        let hits = corpus.filter(LengthBucket::Short, "English", "Investment");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].text, "a\nb");
        assert_eq!(hits[1].text, "second short");
        assert_eq!(hits[1].engagement, Some(12));
    }

    #[test]
    fn test_filter_language_is_case_sensitive() {
        let corpus = sample();
        assert!(corpus.filter(LengthBucket::Short, "english", "Investment").is_empty());
    }

    #[test]
    fn test_filter_unknown_tag_is_empty() {
        let corpus = sample();
        assert!(corpus.filter(LengthBucket::Short, "English", "Gardening").is_empty());
    }

    #[test]
    fn test_filter_uses_raw_tags() {
        let corpus = sample();
        // Quote-wrapped tags only match verbatim
        assert!(corpus.filter(LengthBucket::Short, "English", "Technology").is_empty());
        assert_eq!(corpus.filter(LengthBucket::Short, "English", "\"Technology\"").len(), 1);
    }

    #[test]
    fn test_unique_tags_strip_quotes() {
        let corpus = sample();
        assert_eq!(corpus.unique_tags(), &["Investment".to_string(), "Technology".to_string()]);
    }

    #[test]
    fn test_missing_posts_key_fails() {
        let err = Corpus::from_json_str(r#"{"items": []}"#).unwrap_err();
        assert!(matches!(err, Error::Load(_)));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Corpus::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::Load(ref msg) if msg.contains("nope.json")));
    }

    #[test]
    fn test_load_single_post_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaned.json");
        std::fs::write(
            &path,
            r#"{"posts": [{"text": "Saving money is hard.\nBut I did it anyway.", "line_count": 2,
                "language": "English", "tags": ["Financial Planning"]}]}"#,
        )
        .unwrap();

        let corpus = Corpus::load(&path).unwrap();
        let hits = corpus.filter(LengthBucket::Short, "English", "Financial Planning");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].length, LengthBucket::Short);
        assert_eq!(hits[0].text, "Saving money is hard.\nBut I did it anyway.");
    }
}
