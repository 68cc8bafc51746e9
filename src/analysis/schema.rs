use serde::{Deserialize, Serialize};

use crate::analysis::error::AnalysisError;

/// One recognized food item. Transient: handed back to the client for
/// form pre-fill, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisItem {
    pub food_name: String,
    pub estimated_calories: f64,
    pub portion_assumption: String,
    pub confidence: f64,
}

#[derive(Debug, Deserialize)]
struct FoodScan {
    items: Vec<AnalysisItem>,
}

/// Validate parsed JSON against the food-item shape. The items come back
/// unmodified on success; any deviation is a `Schema` error, never a
/// partial list.
pub fn validate(value: serde_json::Value) -> Result<Vec<AnalysisItem>, AnalysisError> {
    let scan: FoodScan =
        serde_json::from_value(value).map_err(|e| AnalysisError::Schema(e.to_string()))?;

    if scan.items.is_empty() {
        return Err(AnalysisError::Schema("items must not be empty".into()));
    }

    for (i, item) in scan.items.iter().enumerate() {
        if !(0.0..=1.0).contains(&item.confidence) {
            return Err(AnalysisError::Schema(format!(
                "items[{i}].confidence {} outside [0, 1]",
                item.confidence
            )));
        }
    }

    Ok(scan.items)
}

#[cfg(test)]
mod schema_tests {
    use super::*;
    use serde_json::json;

    fn item(confidence: f64) -> serde_json::Value {
        json!({
            "food_name": "banana",
            "estimated_calories": 105.0,
            "portion_assumption": "1 medium",
            "confidence": confidence
        })
    }

    #[test]
    fn accepts_conforming_payload() {
        let items = validate(json!({ "items": [item(0.0), item(1.0)] })).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].food_name, "banana");
    }

    #[test]
    fn rejects_missing_items_field() {
        let err = validate(json!({ "foods": [] })).unwrap_err();
        assert!(matches!(err, AnalysisError::Schema(_)));
    }

    #[test]
    fn rejects_empty_items() {
        let err = validate(json!({ "items": [] })).unwrap_err();
        assert!(matches!(err, AnalysisError::Schema(_)));
    }

    #[test]
    fn rejects_item_missing_confidence() {
        let mut bad = item(0.5);
        bad.as_object_mut().unwrap().remove("confidence");
        let err = validate(json!({ "items": [bad] })).unwrap_err();
        assert!(matches!(err, AnalysisError::Schema(_)));
    }

    #[test]
    fn rejects_confidence_out_of_range() {
        for c in [-0.01, 1.01] {
            let err = validate(json!({ "items": [item(c)] })).unwrap_err();
            assert!(matches!(err, AnalysisError::Schema(_)));
        }
    }

    #[test]
    fn rejects_wrong_field_type() {
        let bad = json!({
            "items": [{
                "food_name": "banana",
                "estimated_calories": "many",
                "portion_assumption": "1 medium",
                "confidence": 0.5
            }]
        });
        assert!(matches!(validate(bad), Err(AnalysisError::Schema(_))));
    }
}
