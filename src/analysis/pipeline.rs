use crate::analysis::client::VisionClient;
use crate::analysis::error::AnalysisError;
use crate::analysis::sanitize::strip_fences;
use crate::analysis::schema::{self, AnalysisItem};

/// Photo to structured food items: extract raw text from the model,
/// strip incidental fencing, parse, validate. Fails fast with the first
/// error; no best-effort partial results.
pub async fn ingest(
    vision: &dyn VisionClient,
    image: &[u8],
    mime_type: &str,
) -> Result<Vec<AnalysisItem>, AnalysisError> {
    let raw = vision.analyze(image, mime_type).await?;
    let cleaned = strip_fences(&raw);
    let value: serde_json::Value =
        serde_json::from_str(cleaned).map_err(AnalysisError::Parse)?;
    schema::validate(value)
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;
    use async_trait::async_trait;

    /// Vision client returning a canned response, or an upstream failure.
    struct Canned(Result<&'static str, &'static str>);

    #[async_trait]
    impl VisionClient for Canned {
        async fn analyze(&self, _image: &[u8], _mime: &str) -> Result<String, AnalysisError> {
            match self.0 {
                Ok(s) => Ok(s.to_string()),
                Err(e) => Err(AnalysisError::ExternalService(e.to_string())),
            }
        }
    }

    const VALID: &str = r#"{"items":[
        {"food_name":"pasta","estimated_calories":420.5,"portion_assumption":"1 plate","confidence":0.8},
        {"food_name":"salad","estimated_calories":90.0,"portion_assumption":"side bowl","confidence":0.6}
    ]}"#;

    #[tokio::test]
    async fn valid_unfenced_response_yields_items() {
        let items = ingest(&Canned(Ok(VALID)), b"img", "image/jpeg").await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].food_name, "pasta");
        assert!((0.0..=1.0).contains(&items[0].confidence));
    }

    #[tokio::test]
    async fn fenced_response_yields_same_items() {
        let fenced: &'static str = Box::leak(format!("```json\n{VALID}\n```").into_boxed_str());
        let plain = ingest(&Canned(Ok(VALID)), b"img", "image/jpeg").await.unwrap();
        let from_fence = ingest(&Canned(Ok(fenced)), b"img", "image/jpeg").await.unwrap();
        assert_eq!(plain, from_fence);
    }

    #[tokio::test]
    async fn truncated_json_is_a_parse_error() {
        let err = ingest(&Canned(Ok(r#"{"items":[{"food_name":"x""#)), b"img", "image/jpeg")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(_)));
    }

    #[tokio::test]
    async fn prose_response_is_a_parse_error() {
        let err = ingest(
            &Canned(Ok("Sorry, I cannot identify any food here.")),
            b"img",
            "image/jpeg",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(_)));
    }

    #[tokio::test]
    async fn empty_items_is_a_schema_error() {
        let err = ingest(&Canned(Ok(r#"{"items":[]}"#)), b"img", "image/jpeg")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Schema(_)));
    }

    #[tokio::test]
    async fn missing_confidence_is_a_schema_error() {
        let payload = r#"{"items":[{"food_name":"rice","estimated_calories":200,"portion_assumption":"1 cup"}]}"#;
        let err = ingest(&Canned(Ok(payload)), b"img", "image/jpeg")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Schema(_)));
    }

    #[tokio::test]
    async fn upstream_failure_passes_through() {
        let err = ingest(&Canned(Err("connection refused")), b"img", "image/jpeg")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::ExternalService(_)));
    }
}
