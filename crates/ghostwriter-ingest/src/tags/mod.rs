//! Topic tag normalization with a per-run accumulator.
//!
//! Raw tags (from the classifier or the keyword fallback) are title-cased,
//! folded into canonical tags by [`rules::MERGE_RULES`], and admitted into a
//! set capped at [`MAX_TAGS`]. Once the set is full, new tags are mapped onto
//! the most similar accepted tag instead.

pub mod fallback;
pub mod rules;

use std::collections::BTreeMap;

use tracing::debug;

pub use fallback::extract_tag_fallback;
pub use rules::{find_rule, MergeRule, MERGE_RULES};

/// Maximum number of distinct tags accepted per run.
pub const MAX_TAGS: usize = 15;

/// Preferred landing tags when a new tag resembles nothing accepted.
pub const GENERIC_FALLBACKS: &[&str] =
    &["Business", "Technology", "Career Development", "Personal Growth"];

/// Tag used when nothing has been accepted yet.
pub const GENERAL_TAG: &str = "General";

/// Title-case a tag: each letter following a non-letter is upper-cased, the
/// rest lower-cased.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = c.is_lowercase() || c.is_uppercase();
    }
    out
}

/// Accepted tags and merge history for one pre-processing run.
#[derive(Debug, Clone)]
pub struct TagAccumulator {
    max_tags: usize,
    /// Insertion-ordered, unique.
    discovered: Vec<String>,
    /// Raw (title-cased) tag → tag it was merged into.
    synonyms: BTreeMap<String, String>,
}

impl Default for TagAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl TagAccumulator {
    pub fn new() -> Self {
        Self::with_capacity(MAX_TAGS)
    }

    /// Accumulator with a custom cap (at least one tag).
    pub fn with_capacity(max_tags: usize) -> Self {
        Self {
            max_tags: max_tags.max(1),
            discovered: Vec::new(),
            synonyms: BTreeMap::new(),
        }
    }

    /// Normalize a raw tag into the tag it should become.
    ///
    /// Records a synonym when a merge rule applies. Does not admit the result
    /// into the accepted set; see [`TagAccumulator::assign`].
    pub fn normalize_and_merge(&mut self, raw: &str) -> String {
        let tag = title_case(raw.trim());

        if let Some(rule) = find_rule(&tag) {
            debug!("Merged tag {:?} into {:?}", tag, rule.canonical);
            self.synonyms.insert(tag, rule.canonical.to_string());
            return rule.canonical.to_string();
        }

        if self.discovered.len() < self.max_tags {
            tag
        } else {
            self.find_most_similar_existing(&tag)
        }
    }

    /// Closest accepted tag for a tag that cannot be admitted.
    ///
    /// Word overlap first, then a generic fallback that is already accepted,
    /// then the earliest accepted tag. Iteration is in insertion order so the
    /// choice is reproducible.
    pub fn find_most_similar_existing(&self, tag: &str) -> String {
        let tag_lower = tag.to_lowercase();
        let words: Vec<&str> = tag_lower.split_whitespace().collect();

        for existing in &self.discovered {
            let existing_lower = existing.to_lowercase();
            if existing_lower.split_whitespace().any(|w| words.contains(&w)) {
                return existing.clone();
            }
        }

        for generic in GENERIC_FALLBACKS {
            if self.contains(generic) {
                return generic.to_string();
            }
        }

        self.discovered
            .first()
            .cloned()
            .unwrap_or_else(|| GENERAL_TAG.to_string())
    }

    /// Normalize a raw tag and admit it, returning the tag to store on the post.
    ///
    /// The returned tag is always a member of the accepted set.
    pub fn assign(&mut self, raw: &str) -> String {
        let key = title_case(raw.trim());
        let candidate = self.normalize_and_merge(raw);
        let assigned = self.admit(candidate);

        // A merged tag redirected by the cap points at where it actually landed
        if let Some(target) = self.synonyms.get_mut(&key) {
            if *target != assigned {
                *target = assigned.clone();
            }
        }
        assigned
    }

    fn admit(&mut self, tag: String) -> String {
        if self.contains(&tag) {
            return tag;
        }
        if self.discovered.len() < self.max_tags {
            self.discovered.push(tag.clone());
            return tag;
        }
        let redirected = self.find_most_similar_existing(&tag);
        debug!("Tag cap reached, {:?} mapped to {:?}", tag, redirected);
        redirected
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.discovered.iter().any(|t| t == tag)
    }

    /// Accepted tags in insertion order.
    pub fn discovered(&self) -> &[String] {
        &self.discovered
    }

    pub fn synonyms(&self) -> &BTreeMap<String, String> {
        &self.synonyms
    }

    pub fn max_tags(&self) -> usize {
        self.max_tags
    }

    pub fn len(&self) -> usize {
        self.discovered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discovered.is_empty()
    }

    /// Accepted tags sorted alphabetically, truncated to the cap.
    pub fn final_tags(&self) -> Vec<String> {
        let mut tags = self.discovered.clone();
        tags.sort();
        tags.truncate(self.max_tags);
        tags
    }
}
