//! Post record model shared by the pre-processing and generation pipelines.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Writing language of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    /// Roman Urdu mixed with English, or Urdu script.
    Urduish,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Urduish => "Urduish",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "English" => Ok(Language::English),
            "Urduish" => Ok(Language::Urduish),
            other => Err(Error::InvalidLanguage(other.to_string())),
        }
    }
}

/// Coarse post length derived from the line count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthBucket {
    Short,
    Medium,
    Long,
}

impl LengthBucket {
    /// Bucket a line count: under 5 is short, 5 through 10 medium, above 10 long.
    pub fn from_line_count(line_count: usize) -> Self {
        match line_count {
            0..=4 => LengthBucket::Short,
            5..=10 => LengthBucket::Medium,
            _ => LengthBucket::Long,
        }
    }

    /// Line range requested from the model for this bucket.
    pub fn human_range(&self) -> &'static str {
        match self {
            LengthBucket::Short => "1 to 5 lines",
            LengthBucket::Medium => "6 to 10 lines",
            LengthBucket::Long => "11 to 15 lines",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LengthBucket::Short => "Short",
            LengthBucket::Medium => "Medium",
            LengthBucket::Long => "Long",
        }
    }
}

impl std::fmt::Display for LengthBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthBucket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Short" => Ok(LengthBucket::Short),
            "Medium" => Ok(LengthBucket::Medium),
            "Long" => Ok(LengthBucket::Long),
            other => Err(Error::InvalidLength(other.to_string())),
        }
    }
}

/// A cleaned, tagged post as written by pre-processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub text: String,
    /// Reactions plus comments on the scraped post.
    pub engagement: u64,
    pub line_count: usize,
    pub language: Language,
    /// Always a single canonical tag.
    pub tags: Vec<String>,
}
