//! Raw input loading and cleaned corpus output.

use std::collections::BTreeMap;
use std::path::Path;

use ghostwriter_core::{Error, PostRecord, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::pipeline::BatchOutcome;

/// The cleaned corpus document written at the end of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedCorpus {
    pub posts: Vec<PostRecord>,
    /// Alphabetical, at most the run's tag cap.
    pub discovered_tags: Vec<String>,
    pub tag_synonyms: BTreeMap<String, String>,
    pub total_posts: usize,
    pub total_unique_tags: usize,
}

impl CleanedCorpus {
    pub fn from_outcome(outcome: &BatchOutcome) -> Self {
        let discovered_tags = outcome.tags.final_tags();
        Self {
            posts: outcome.posts.clone(),
            total_posts: outcome.posts.len(),
            total_unique_tags: discovered_tags.len(),
            discovered_tags,
            tag_synonyms: outcome.tags.synonyms().clone(),
        }
    }
}

/// Load scraped posts: a JSON array, or a single object treated as one post.
pub fn load_raw_posts(path: &Path) -> Result<Vec<Value>> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| Error::Load(format!("{}: {}", path.display(), e)))?;
    let value: Value = serde_json::from_str(&data)
        .map_err(|e| Error::Load(format!("{}: {}", path.display(), e)))?;

    let posts = match value {
        Value::Array(items) => items,
        other => vec![other],
    };
    info!("Loaded {} posts from {}", posts.len(), path.display());
    Ok(posts)
}

/// Write the cleaned corpus for a finished run.
pub fn save_results(path: &Path, outcome: &BatchOutcome) -> Result<CleanedCorpus> {
    let corpus = CleanedCorpus::from_outcome(outcome);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(&corpus)?;
    std::fs::write(path, json)?;

    info!("Results saved to {}", path.display());
    info!(
        "Discovered {} unique tags from {} posts: {:?}",
        corpus.total_unique_tags, corpus.total_posts, corpus.discovered_tags
    );
    if !corpus.tag_synonyms.is_empty() {
        info!("Merged tags: {:?}", corpus.tag_synonyms);
    }

    Ok(corpus)
}
