//! LLM access for Ghostwriter (OpenAI/Groq).
//!
//! Requests go to hosted chat completion APIs; responses are streamed over
//! SSE and collected into a single string by [`ProviderClient`].

pub mod client;
pub mod config;
pub mod providers;
pub mod types;

pub use client::{CompletionClient, ProviderClient};
pub use config::LLMConfig;
pub use types::*;
