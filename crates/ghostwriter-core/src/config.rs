//! Data directory layout.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths to the Ghostwriter data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Raw scraped posts (`data/linkedin_posts.json`).
    pub raw_posts: PathBuf,
    /// Cleaned, tagged corpus (`data/cleaned_linkedin_posts.json`).
    pub corpus: PathBuf,
    /// LLM configuration (`data/llm-config.json`).
    pub llm_config_file: PathBuf,
}

impl DataPaths {
    /// Lay out data paths under a root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            raw_posts: root.join("linkedin_posts.json"),
            corpus: root.join("cleaned_linkedin_posts.json"),
            llm_config_file: root.join("llm-config.json"),
            root,
        }
    }

    /// Resolve the root from `GHOSTWRITER_DATA_DIR`, defaulting to `data`.
    pub fn from_env() -> Self {
        let root = std::env::var("GHOSTWRITER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));
        Self::new(root)
    }
}
