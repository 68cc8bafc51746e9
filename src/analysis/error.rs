use thiserror::Error;

/// Failure taxonomy for the photo-to-food pipeline. All three surface to the
/// client as the same "analysis failed" condition; they are kept apart so
/// diagnostics can tell a flaky model call from a bad payload. Nothing here
/// is retried internally and nothing is fatal to the process.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The vision model call failed, timed out, or returned no text.
    #[error("vision model call failed: {0}")]
    ExternalService(String),

    /// The sanitized response is not valid JSON.
    #[error("model response is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// Valid JSON, wrong shape: missing or empty `items`, a missing item
    /// field, or confidence outside [0, 1].
    #[error("model response has unexpected shape: {0}")]
    Schema(String),
}
