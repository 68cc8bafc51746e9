use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// What the user is working towards. Stored as lowercase text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lose" => Some(Goal::Lose),
            "maintain" => Some(Goal::Maintain),
            "gain" => Some(Goal::Gain),
            _ => None,
        }
    }
}

/// Request body for creating or replacing the caller's profile.
#[derive(Debug, Deserialize)]
pub struct PutProfileRequest {
    pub age: i32,
    pub weight_kg: f64,
    pub height_cm: Option<f64>,
    pub goal: Goal,
    pub daily_calorie_intake: i32,
    pub daily_calorie_burn: i32,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub age: i32,
    pub weight_kg: f64,
    pub height_cm: Option<f64>,
    pub goal: Goal,
    pub daily_calorie_intake: i32,
    pub daily_calorie_burn: i32,
    pub updated_at: OffsetDateTime,
}

#[cfg(test)]
mod goal_tests {
    use super::*;

    #[test]
    fn parse_known_goals() {
        assert_eq!(Goal::parse("lose"), Some(Goal::Lose));
        assert_eq!(Goal::parse(" Maintain "), Some(Goal::Maintain));
        assert_eq!(Goal::parse("GAIN"), Some(Goal::Gain));
        assert_eq!(Goal::parse("bulk"), None);
    }
}
