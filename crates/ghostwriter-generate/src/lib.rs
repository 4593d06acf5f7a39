//! Ghostwriter Generate — few-shot prompts and voice-matched post drafts.

pub mod generator;
pub mod prompt;

pub use generator::{GenerationSettings, PostGenerator};
pub use prompt::{build_prompt, PromptBuilder, PromptStyle};
