use async_trait::async_trait;
use base64ct::{Base64, Encoding};
use serde_json::json;
use tracing::debug;

use crate::analysis::error::AnalysisError;
use crate::config::GeminiConfig;

const PROMPT: &str = "Extract every distinct food item visible in the image and estimate its \
calories in kcal using realistic portion assumptions when size isn't clear; return only valid \
JSON with the structure {\"items\":[{\"food_name\":string,\"estimated_calories\":number,\
\"portion_assumption\":string,\"confidence\":number}]} where confidence is 0-1.";

/// Narrow capability seam over the vision model: one image in, raw text out.
/// Tests substitute fakes returning canned payloads.
#[async_trait]
pub trait VisionClient: Send + Sync {
    async fn analyze(&self, image: &[u8], mime_type: &str) -> Result<String, AnalysisError>;
}

/// Calls the Gemini `generateContent` endpoint with a fixed JSON response
/// schema. Single attempt per request; the configured timeout is the only
/// bound. Retrying is the caller's business, and none is done here.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(cfg: &GeminiConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(cfg.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: cfg.api_key.clone(),
            model: cfg.model.clone(),
            endpoint: cfg.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// The response schema the model is held to: object with a non-empty
    /// `items` array of fully-populated food items.
    fn response_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "required": ["items"],
            "properties": {
                "items": {
                    "type": "array",
                    "minItems": 1,
                    "items": {
                        "type": "object",
                        "required": [
                            "food_name",
                            "estimated_calories",
                            "portion_assumption",
                            "confidence"
                        ],
                        "properties": {
                            "food_name": { "type": "string" },
                            "estimated_calories": { "type": "number" },
                            "portion_assumption": { "type": "string" },
                            "confidence": { "type": "number", "minimum": 0, "maximum": 1 }
                        }
                    }
                }
            }
        })
    }
}

#[async_trait]
impl VisionClient for GeminiClient {
    async fn analyze(&self, image: &[u8], mime_type: &str) -> Result<String, AnalysisError> {
        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [
                    { "inlineData": { "mimeType": mime_type, "data": Base64::encode_string(image) } },
                    { "text": PROMPT }
                ]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseJsonSchema": Self::response_schema()
            }
        });

        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::ExternalService(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AnalysisError::ExternalService(format!(
                "status {status}: {detail}"
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AnalysisError::ExternalService(e.to_string()))?;

        let text = payload["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|p| p["text"].as_str())
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AnalysisError::ExternalService(
                "model returned an empty response".into(),
            ));
        }

        debug!(model = %self.model, bytes = text.len(), "vision response received");
        Ok(text)
    }
}

/// MIME type from the uploaded file's extension; unknown extensions fall
/// back to JPEG.
pub fn mime_from_extension(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, e)| e.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "webp" => "image/webp",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "image/jpeg",
    }
}
