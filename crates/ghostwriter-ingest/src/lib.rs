//! Ghostwriter Ingest — turns raw scraped posts into the tagged corpus.
//!
//! Each post is cleaned, measured (engagement, line count), assigned a
//! language, and classified into one topic tag. Tags are merged against a
//! fixed synonym table and capped at 15 distinct values per run.

pub mod classify;
pub mod clean;
pub mod language;
pub mod output;
pub mod pipeline;
pub mod tags;

pub use classify::{Classification, TagClassifier};
pub use clean::{calculate_engagement, clean_text, count_lines, RawPost};
pub use language::detect_language;
pub use output::{load_raw_posts, save_results, CleanedCorpus};
pub use pipeline::{BatchOutcome, PostCleaner};
pub use tags::{TagAccumulator, MAX_TAGS};
