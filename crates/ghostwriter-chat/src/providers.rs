//! Streaming chat completions from OpenAI-compatible APIs (OpenAI, Groq).
//!
//! Tokens arrive as SSE `data:` lines carrying `choices[0].delta.content`.

use std::pin::Pin;

use futures::Stream;
use reqwest::Client;
use serde_json::json;
use tokio_stream::StreamExt;
use tracing::debug;

use crate::types::{CompletionRequest, LLMProvider};

/// Boxed stream type for returning different stream implementations.
pub type BoxedStream = Pin<Box<dyn Stream<Item = StreamChunk> + Send>>;

/// A single streamed token or error.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamChunk {
    Token(String),
    Done { tokens_used: usize },
    Error(String),
}

/// One parsed SSE line.
#[derive(Debug, Clone, PartialEq)]
pub enum SseLine {
    /// Blank line, comment, or an event without content.
    Skip,
    Content(String),
    Done,
}

/// Parse a single SSE line from an OpenAI-compatible stream.
pub fn parse_sse_line(line: &str) -> SseLine {
    let line = line.trim();
    if line.is_empty() || line.starts_with(':') {
        return SseLine::Skip;
    }

    let Some(data) = line.strip_prefix("data:") else {
        return SseLine::Skip;
    };
    let data = data.trim();
    if data == "[DONE]" {
        return SseLine::Done;
    }

    match serde_json::from_str::<serde_json::Value>(data) {
        Ok(parsed) => match parsed["choices"][0]["delta"]["content"].as_str() {
            Some(content) if !content.is_empty() => SseLine::Content(content.to_string()),
            _ => SseLine::Skip,
        },
        Err(_) => SseLine::Skip,
    }
}

/// Stream tokens for a completion request from the given provider.
pub fn stream_llm(
    client: &Client,
    provider: LLMProvider,
    request: &CompletionRequest,
    api_key: &str,
) -> BoxedStream {
    Box::pin(stream_openai_compat(
        client.clone(),
        provider.completions_url(),
        request.clone(),
        api_key.to_string(),
    ))
}

fn stream_openai_compat(
    client: Client,
    url: &str,
    request: CompletionRequest,
    api_key: String,
) -> impl Stream<Item = StreamChunk> + Send + 'static {
    let url = url.to_string();
    let msgs: Vec<serde_json::Value> = request
        .messages
        .iter()
        .map(|m| json!({"role": m.role, "content": m.content}))
        .collect();

    async_stream::stream! {
        let body = json!({
            "model": request.model,
            "messages": msgs,
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
            "stream": true,
        });

        debug!("Streaming from {} with model {}", url, request.model);

        let response = match client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                yield StreamChunk::Error(format!("Request failed: {}", e));
                return;
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            yield StreamChunk::Error(format!("API error {}: {}", status, body));
            return;
        }

        let mut stream = response.bytes_stream();
        let mut buffer: Vec<u8> = Vec::new();
        let mut token_count = 0usize;

        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(b) => b,
                Err(e) => {
                    yield StreamChunk::Error(format!("Stream read error: {}", e));
                    return;
                }
            };

            // Chunks may split a multi-byte character; decode whole lines only
            buffer.extend_from_slice(&bytes);

            while let Some(line_end) = buffer.iter().position(|&b| b == b'\n') {
                let raw: Vec<u8> = buffer.drain(..=line_end).collect();
                let line = match String::from_utf8(raw) {
                    Ok(line) => line,
                    Err(e) => {
                        yield StreamChunk::Error(format!("Invalid UTF-8 in stream: {}", e));
                        return;
                    }
                };

                match parse_sse_line(&line) {
                    SseLine::Skip => {}
                    SseLine::Content(content) => {
                        token_count += 1;
                        yield StreamChunk::Token(content);
                    }
                    SseLine::Done => {
                        yield StreamChunk::Done { tokens_used: token_count };
                        return;
                    }
                }
            }
        }

        yield StreamChunk::Done { tokens_used: token_count };
    }
}
