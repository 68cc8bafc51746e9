use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// The six fixed workout categories. Entries are stored under their
/// free-text name; this lookup decides which category bucket (if any) an
/// entry lands in. Names with no mapping stay out of category views but are
/// still counted in the flat totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Walking,
    Running,
    Cycling,
    Swimming,
    Yoga,
    Weights,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 6] = [
        ActivityKind::Walking,
        ActivityKind::Running,
        ActivityKind::Cycling,
        ActivityKind::Swimming,
        ActivityKind::Yoga,
        ActivityKind::Weights,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Walking => "walking",
            ActivityKind::Running => "running",
            ActivityKind::Cycling => "cycling",
            ActivityKind::Swimming => "swimming",
            ActivityKind::Yoga => "yoga",
            ActivityKind::Weights => "weights",
        }
    }

    /// Finite name-to-category mapping, not free-text matching.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "walking" => Some(ActivityKind::Walking),
            "running" => Some(ActivityKind::Running),
            "cycling" => Some(ActivityKind::Cycling),
            "swimming" => Some(ActivityKind::Swimming),
            "yoga" => Some(ActivityKind::Yoga),
            "weights" | "weight training" => Some(ActivityKind::Weights),
            _ => None,
        }
    }

    /// Burn rate used to pre-fill calories from duration.
    pub fn kcal_per_minute(self) -> i32 {
        match self {
            ActivityKind::Walking => 4,
            ActivityKind::Running => 10,
            ActivityKind::Cycling => 8,
            ActivityKind::Swimming => 9,
            ActivityKind::Yoga => 3,
            ActivityKind::Weights => 6,
        }
    }
}

/// Request body for logging a workout. When `calories_burned` is omitted it
/// is derived from the category burn rate, or 0 for unmapped names.
#[derive(Debug, Deserialize)]
pub struct CreateActivityRequest {
    pub name: String,
    pub duration_minutes: i32,
    pub calories_burned: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub id: Uuid,
    pub name: String,
    pub kind: Option<ActivityKind>,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod kind_tests {
    use super::*;

    #[test]
    fn from_name_maps_known_activities() {
        assert_eq!(ActivityKind::from_name("Running"), Some(ActivityKind::Running));
        assert_eq!(ActivityKind::from_name(" yoga "), Some(ActivityKind::Yoga));
        assert_eq!(
            ActivityKind::from_name("Weight Training"),
            Some(ActivityKind::Weights)
        );
    }

    #[test]
    fn from_name_rejects_unknown_activities() {
        assert_eq!(ActivityKind::from_name("parkour"), None);
        assert_eq!(ActivityKind::from_name(""), None);
    }
}
