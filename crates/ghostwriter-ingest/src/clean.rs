//! Text cleanup and per-post metrics.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

static BLANK_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// A scraped post. Only the fields pre-processing reads are typed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPost {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub reactions: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub comments: Vec<Value>,
}

/// Scrapers emit `{}`, `""` or `null` for posts without reactions.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => Vec::new(),
    })
}

/// Trim every line, collapse runs of 3+ newlines to one blank line, trim.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let joined = text
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");

    BLANK_RUN_RE.replace_all(&joined, "\n\n").trim().to_string()
}

/// Number of newline-separated segments; 0 for blank text.
pub fn count_lines(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }
    text.split('\n').count()
}

/// Reactions plus comments. Absent, null or non-list fields count as zero.
pub fn calculate_engagement(post: &RawPost) -> u64 {
    (post.reactions.len() + post.comments.len()) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_clean_trims_lines() {
        assert_eq!(clean_text("  hello  \n   world\t"), "hello\nworld");
    }

    #[test]
    fn test_clean_collapses_blank_runs() {
        assert_eq!(clean_text("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(clean_text("a\n  \n \t \n\nb"), "a\n\nb");
        assert_eq!(clean_text("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_clean_handpicked_inputs_are_idempotent() {
        let inputs = [
            "",
            "   ",
            "\n\n\nstart",
            "one\r\ntwo\r\n\r\n\r\n\r\nthree",
            "  Lead line  \n\n\n\n  • bullet \n   \n  end  ",
            "x\n \n \n \n \ny",
        ];
        for input in inputs {
            let once = clean_text(input);
            assert_eq!(clean_text(&once), once, "not idempotent for {:?}", input);
            assert!(!once.contains("\n\n\n"));
        }
    }

    #[test]
    fn test_clean_blank_is_empty() {
        assert_eq!(clean_text(" \n \n\t"), "");
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("  \n "), 0);
        assert_eq!(count_lines("one"), 1);
        assert_eq!(count_lines("one\ntwo\n\nfour"), 4);
    }

    #[test]
    fn test_engagement() {
        let post: RawPost = serde_json::from_value(json!({
            "text": "hi",
            "reactions": [{"type": "like"}, {"type": "like"}, {"type": "praise"}],
            "comments": [{"text": "nice"}, {"text": "agreed"}]
        }))
        .unwrap();
        assert_eq!(calculate_engagement(&post), 5);
    }

    #[test]
    fn test_engagement_missing_fields() {
        let post: RawPost = serde_json::from_value(json!({"text": "hi"})).unwrap();
        assert_eq!(calculate_engagement(&post), 0);

        let post: RawPost =
            serde_json::from_value(json!({"text": "hi", "reactions": null, "comments": []})).unwrap();
        assert_eq!(calculate_engagement(&post), 0);
    }

    #[test]
    fn test_engagement_non_list_fields() {
        let post: RawPost = serde_json::from_value(json!({
            "text": "hi",
            "reactions": {},
            "comments": ""
        }))
        .unwrap();
        assert_eq!(calculate_engagement(&post), 0);

        let post: RawPost = serde_json::from_value(json!({
            "text": "hi",
            "reactions": [{"type": "like"}],
            "comments": {"count": 4}
        }))
        .unwrap();
        assert_eq!(calculate_engagement(&post), 1);
    }

    proptest! {
        #[test]
        fn prop_clean_is_idempotent(input in "\\PC*|[ \t\r\na-z]{0,40}") {
            let once = clean_text(&input);
            prop_assert_eq!(clean_text(&once), once.clone());
            prop_assert!(!once.contains("\n\n\n"));
        }
    }
}
