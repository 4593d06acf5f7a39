//! Ghostwriter Corpus — cleaned posts loaded for few-shot retrieval.

pub mod corpus;

pub use corpus::{Corpus, CorpusPost};
