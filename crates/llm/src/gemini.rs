//! Gemini Provider
//!
//! Implementation of the PromptProvider trait on top of Gemini's
//! `generateContent` endpoint with a JSON response schema.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::provider::{missing_api_key_error, parse_http_error, PromptProvider};
use super::types::{FetchCriteria, ProviderConfig, ProviderError, ProviderResult};
use crate::http_client::build_http_client;
use prompt_feed_core::{FacetValue, Platform, Prompt};

/// Default Gemini API base
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const SYSTEM_INSTRUCTION: &str = "You are an expert AI prompt engineer. Your task is to generate a list of creative, effective, and trending prompts for various AI models. Provide the response in a valid JSON format according to the provided schema.";

const INVALID_STRUCTURE: &str = "Invalid data structure received from AI.";

/// Gemini prompt provider
pub struct GeminiProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the given configuration
    pub fn new(config: ProviderConfig) -> ProviderResult<Self> {
        let client = build_http_client(Duration::from_secs(config.timeout_secs))?;
        Ok(Self { config, client })
    }

    /// Get the API base URL
    fn base_url(&self) -> &str {
        self.config
            .base_url
            .as_deref()
            .unwrap_or(GEMINI_API_BASE)
            .trim_end_matches('/')
    }

    fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url(), self.config.model)
    }

    fn api_key(&self) -> ProviderResult<&str> {
        self.config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| missing_api_key_error("gemini"))
    }

    /// Build the user instruction for a request.
    fn build_instruction(&self, criteria: &FetchCriteria) -> String {
        let categories = criteria
            .requested_categories()
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let mut instruction = if criteria.requested_categories().len() == 1 {
            format!(
                "Generate {} diverse AI prompts, all in the '{}' category.",
                self.config.prompt_count, categories
            )
        } else {
            format!(
                "Generate {} diverse AI prompts. Cover these categories: {}.",
                self.config.prompt_count, categories
            )
        };

        instruction.push_str(
            " For each prompt, specify a target AI model (like Midjourney, Gemini 2.5 Pro, DALL-E 3, ChatGPT-4o, etc.), a unique ID starting with 'prompt-', and up to 4 short lowercase tags.",
        );

        if criteria.is_trend_scope() {
            let platforms = Platform::ALL
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            instruction.push_str(&format!(
                " Each prompt must reflect a currently viral trend and include the platform it trends on (one of: {}), the country it trends in, and the trendingDate as YYYY-MM-DD.",
                platforms
            ));

            if let Some(refinement) = criteria.refinement {
                if let Some(country) = refinement.country {
                    instruction.push_str(&format!(
                        " Only include trends popular in {}.",
                        country.as_str()
                    ));
                }
                if let Some(range) = refinement.date_range {
                    instruction.push_str(&format!(
                        " Only include trends dated between {} and {} inclusive.",
                        range.start, range.end
                    ));
                }
            }
        }

        instruction
    }

    /// Response schema for the `prompts` payload.
    fn response_schema(trend_scope: bool) -> Value {
        let mut properties = json!({
            "id": {
                "type": "STRING",
                "description": "A unique identifier for the prompt, e.g., 'prompt-1'."
            },
            "promptText": {
                "type": "STRING",
                "description": "The full text of the AI prompt."
            },
            "category": {
                "type": "STRING",
                "description": "The category of the prompt, e.g., 'Image Generation', 'Writing', 'Code', 'Viral Trends'."
            },
            "targetModel": {
                "type": "STRING",
                "description": "The suggested AI model for this prompt, e.g., 'Midjourney v6', 'Gemini 2.5 Pro', 'DALL-E 3', 'ChatGPT-4o'."
            },
            "tags": {
                "type": "ARRAY",
                "description": "Up to 4 short labels describing the prompt.",
                "items": { "type": "STRING" }
            }
        });

        if trend_scope {
            properties["platform"] = json!({ "type": "STRING" });
            properties["country"] = json!({ "type": "STRING" });
            properties["trendingDate"] = json!({
                "type": "STRING",
                "description": "ISO date (YYYY-MM-DD) the trend peaked."
            });
        }

        json!({
            "type": "OBJECT",
            "properties": {
                "prompts": {
                    "type": "ARRAY",
                    "description": "An array of creative and effective AI prompts.",
                    "items": {
                        "type": "OBJECT",
                        "properties": properties,
                        "required": ["id", "promptText", "category", "targetModel"]
                    }
                }
            },
            "required": ["prompts"]
        })
    }

    /// Build the request body for the API
    fn build_request_body(&self, criteria: &FetchCriteria) -> Value {
        json!({
            "systemInstruction": {
                "parts": [{ "text": SYSTEM_INSTRUCTION }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": self.build_instruction(criteria) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::response_schema(criteria.is_trend_scope())
            }
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Extract the generated text from a raw `generateContent` response body.
fn extract_candidate_text(body: &str) -> ProviderResult<String> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::ParseError {
            message: format!("Failed to parse response: {}", e),
        })?;

    if let Some(reason) = response
        .prompt_feedback
        .and_then(|f| f.block_reason)
    {
        return Err(ProviderError::InvalidRequest {
            message: format!("request blocked: {}", reason),
        });
    }

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ProviderError::invalid_response(
            "response contained no candidate text",
        ));
    }
    Ok(text)
}

/// Parse the model's JSON payload into prompt records.
///
/// The payload must be an object with a `prompts` array; every element must
/// carry the four required record fields.
pub fn parse_prompt_payload(text: &str) -> ProviderResult<Vec<Prompt>> {
    let cleaned = strip_code_fence(text.trim());
    let payload: Value = serde_json::from_str(cleaned).map_err(|e| ProviderError::ParseError {
        message: format!("Failed to parse generated JSON: {}", e),
    })?;

    let items = payload
        .get("prompts")
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderError::invalid_response(INVALID_STRUCTURE))?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            serde_json::from_value::<Prompt>(item.clone()).map_err(|e| {
                ProviderError::invalid_response(format!("{} (item {}: {})", INVALID_STRUCTURE, idx, e))
            })
        })
        .collect()
}

/// Remove a surrounding Markdown code fence, if any.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[async_trait]
impl PromptProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn fetch_prompts(&self, criteria: &FetchCriteria) -> ProviderResult<Vec<Prompt>> {
        let api_key = self.api_key()?;
        let body = self.build_request_body(criteria);

        tracing::info!(
            "[Gemini] Requesting {} prompts (category: {}, model: {})",
            self.config.prompt_count,
            criteria.category,
            self.config.model
        );

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body_text = response.text().await?;

        if status != 200 {
            tracing::warn!("[Gemini] HTTP {} from generateContent", status);
            return Err(parse_http_error(status, &body_text, "gemini"));
        }

        let text = extract_candidate_text(&body_text)?;
        let prompts = parse_prompt_payload(&text)?;
        tracing::debug!("[Gemini] Parsed {} prompts", prompts.len());
        Ok(prompts)
    }
}
