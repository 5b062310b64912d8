//! Single-shot question to a generative-language endpoint.
//!
//! Request body: `{"contents":[{"parts":[{"text": ...}]}]}`, API key passed
//! as the `key` query parameter. The reply is the first candidate's first
//! text part.

use super::{http_agent, http_error};
use crate::config::{ChatConfig, ENV_CHAT_API_KEY};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// User question, optionally preceded by a plain-text table as context.
pub fn build_prompt(message: &str, context: Option<&str>) -> String {
    match context {
        Some(table) if !table.trim().is_empty() => format!(
            "Here is the current data:\n\n{}\n\nQuestion: {}",
            table.trim_end(),
            message.trim()
        ),
        _ => message.trim().to_string(),
    }
}

pub fn build_request(prompt: &str) -> ChatRequest {
    ChatRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
    }
}

/// `candidates[0].content.parts[0].text`
pub fn parse_reply(resp: ChatResponse) -> AppResult<String> {
    resp.candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text)
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Http("chat: response contained no text".to_string()))
}

pub fn endpoint_url(cfg: &ChatConfig) -> String {
    format!(
        "{}/{}:generateContent",
        cfg.endpoint.trim_end_matches('/'),
        cfg.model
    )
}

fn api_key(cfg: &ChatConfig) -> AppResult<&str> {
    cfg.api_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            AppError::Config(format!(
                "no chat API key: set chat.api_key or {}",
                ENV_CHAT_API_KEY
            ))
        })
}

/// Send one prompt and return the reply text. No retry.
pub fn ask(cfg: &ChatConfig, prompt: &str) -> AppResult<String> {
    let key = api_key(cfg)?;
    let body = serde_json::to_value(build_request(prompt))
        .map_err(|e| AppError::Http(format!("chat: cannot encode request: {e}")))?;

    let response = http_agent(cfg.timeout_secs)
        .post(&endpoint_url(cfg))
        .query("key", key)
        .set("Content-Type", "application/json")
        .send_json(body)
        .map_err(|e| http_error("chat", e))?;

    let parsed: ChatResponse = response
        .into_json()
        .map_err(|e| AppError::Http(format!("chat: invalid response: {e}")))?;
    parse_reply(parsed)
}
