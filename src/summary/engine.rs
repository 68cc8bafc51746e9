use serde::Serialize;

use crate::activity::dto::ActivityKind;
use crate::activity::repo::ActivityEntry;
use crate::food::dto::MealType;
use crate::food::repo::FoodEntry;
use crate::profile::repo::Profile;
use crate::summary::motivation::{motivate, Motivation};

// Dashboard fallbacks for users who haven't finished onboarding.
pub const DEFAULT_CALORIE_LIMIT: i64 = 2000;
pub const DEFAULT_BURN_GOAL: i64 = 400;

#[derive(Debug, Serialize)]
pub struct MealGroup {
    pub meal_type: MealType,
    pub calories: i64,
    pub entries: usize,
}

#[derive(Debug, Serialize)]
pub struct ActivityGroup {
    pub kind: ActivityKind,
    pub minutes: i64,
    pub calories_burned: i64,
    pub entries: usize,
}

#[derive(Debug, Serialize)]
pub struct BmiReport {
    pub bmi: f64,
    pub label: &'static str,
    /// Percent position on the visual scale, bmi clamped to [14, 40].
    pub marker_position: f64,
}

/// Derived on demand from the day's entries, never persisted.
#[derive(Debug, Serialize)]
pub struct DailySummary {
    pub total_calories_consumed: i64,
    pub total_calories_burned: i64,
    pub total_active_minutes: i64,
    pub daily_calorie_limit: i64,
    pub daily_burn_goal: i64,
    /// Limit minus consumed. Negative means over budget, not an error.
    pub remaining_calories: i64,
    pub meals: Vec<MealGroup>,
    pub activities: Vec<ActivityGroup>,
    pub bmi: Option<BmiReport>,
    pub motivation: Motivation,
}

pub fn bmi_value(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    ((weight_kg / (height_m * height_m)) * 10.0).round() / 10.0
}

/// Inclusive lower bound, exclusive upper.
pub fn bmi_label(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if bmi < 25.0 {
        "Normal"
    } else if bmi < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}

pub fn bmi_marker_position(bmi: f64) -> f64 {
    const MIN: f64 = 14.0;
    const MAX: f64 = 40.0;
    let clamped = bmi.clamp(MIN, MAX);
    (clamped - MIN) / (MAX - MIN) * 100.0
}

fn bmi_report(profile: &Profile) -> Option<BmiReport> {
    // Both weight and height must be present; otherwise the BMI block is
    // omitted rather than the whole summary failing.
    let height_cm = profile.height_cm?;
    if profile.weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let bmi = bmi_value(profile.weight_kg, height_cm);
    Some(BmiReport {
        bmi,
        label: bmi_label(bmi),
        marker_position: bmi_marker_position(bmi),
    })
}

/// Turn one user's day-filtered entries and profile into the dashboard
/// summary. Pure given its inputs; the caller owns day filtering and
/// ownership scoping.
pub fn summarize(
    food: &[&FoodEntry],
    activities: &[&ActivityEntry],
    profile: Option<&Profile>,
) -> DailySummary {
    let total_calories_consumed: i64 = food.iter().map(|e| i64::from(e.calories)).sum();
    let total_calories_burned: i64 = activities.iter().map(|e| i64::from(e.calories_burned)).sum();
    let total_active_minutes: i64 = activities.iter().map(|e| i64::from(e.duration_minutes)).sum();

    let daily_calorie_limit = profile
        .map(|p| i64::from(p.daily_calorie_intake))
        .unwrap_or(DEFAULT_CALORIE_LIMIT);
    let daily_burn_goal = profile
        .map(|p| i64::from(p.daily_calorie_burn))
        .unwrap_or(DEFAULT_BURN_GOAL);

    // Fixed buckets. Entries whose meal type or activity name has no mapping
    // stay out of the groups but remain in the flat totals above.
    let meals = MealType::ALL
        .iter()
        .map(|&meal_type| {
            let in_group = food
                .iter()
                .filter(|e| MealType::parse(&e.meal_type) == Some(meal_type));
            MealGroup {
                meal_type,
                calories: in_group.clone().map(|e| i64::from(e.calories)).sum(),
                entries: in_group.count(),
            }
        })
        .collect();

    let activity_groups = ActivityKind::ALL
        .iter()
        .map(|&kind| {
            let in_group = activities
                .iter()
                .filter(|e| ActivityKind::from_name(&e.name) == Some(kind));
            ActivityGroup {
                kind,
                minutes: in_group.clone().map(|e| i64::from(e.duration_minutes)).sum(),
                calories_burned: in_group.clone().map(|e| i64::from(e.calories_burned)).sum(),
                entries: in_group.count(),
            }
        })
        .collect();

    DailySummary {
        total_calories_consumed,
        total_calories_burned,
        total_active_minutes,
        daily_calorie_limit,
        daily_burn_goal,
        remaining_calories: daily_calorie_limit - total_calories_consumed,
        meals,
        activities: activity_groups,
        bmi: profile.and_then(bmi_report),
        motivation: motivate(total_calories_consumed, total_active_minutes, daily_calorie_limit),
    }
}

#[cfg(test)]
mod engine_tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn food(meal_type: &str, calories: i32) -> FoodEntry {
        FoodEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "test food".into(),
            calories,
            meal_type: meal_type.into(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    fn activity(name: &str, minutes: i32, burned: i32) -> ActivityEntry {
        ActivityEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: name.into(),
            duration_minutes: minutes,
            calories_burned: burned,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    fn profile(weight_kg: f64, height_cm: Option<f64>, intake: i32) -> Profile {
        Profile {
            user_id: Uuid::new_v4(),
            age: 30,
            weight_kg,
            height_cm,
            goal: "maintain".into(),
            daily_calorie_intake: intake,
            daily_calorie_burn: 400,
            updated_at: OffsetDateTime::now_utc(),
        }
    }

    fn meal_total(summary: &DailySummary, meal_type: MealType) -> i64 {
        summary
            .meals
            .iter()
            .find(|g| g.meal_type == meal_type)
            .map(|g| g.calories)
            .unwrap()
    }

    #[test]
    fn groups_food_by_meal_type() {
        let entries = vec![food("breakfast", 300), food("breakfast", 150), food("lunch", 500)];
        let refs: Vec<&FoodEntry> = entries.iter().collect();
        let summary = summarize(&refs, &[], Some(&profile(70.0, Some(175.0), 2000)));

        assert_eq!(meal_total(&summary, MealType::Breakfast), 450);
        assert_eq!(meal_total(&summary, MealType::Lunch), 500);
        assert_eq!(meal_total(&summary, MealType::Dinner), 0);
        assert_eq!(summary.total_calories_consumed, 950);
    }

    #[test]
    fn remaining_calories_can_go_negative() {
        let p = profile(70.0, Some(175.0), 2000);

        let entries = vec![food("lunch", 1500)];
        let refs: Vec<&FoodEntry> = entries.iter().collect();
        assert_eq!(summarize(&refs, &[], Some(&p)).remaining_calories, 500);

        let entries = vec![food("lunch", 2200)];
        let refs: Vec<&FoodEntry> = entries.iter().collect();
        let summary = summarize(&refs, &[], Some(&p));
        assert_eq!(summary.remaining_calories, -200);
        assert!(summary.remaining_calories < 0);
    }

    #[test]
    fn unmapped_activity_counts_in_flat_totals_but_no_group() {
        let entries = vec![activity("Running", 30, 300), activity("parkour", 20, 250)];
        let refs: Vec<&ActivityEntry> = entries.iter().collect();
        let summary = summarize(&[], &refs, None);

        assert_eq!(summary.total_calories_burned, 550);
        assert_eq!(summary.total_active_minutes, 50);

        let grouped_minutes: i64 = summary.activities.iter().map(|g| g.minutes).sum();
        assert_eq!(grouped_minutes, 30);
        let running = summary
            .activities
            .iter()
            .find(|g| g.kind == ActivityKind::Running)
            .unwrap();
        assert_eq!(running.calories_burned, 300);
        assert_eq!(running.entries, 1);
    }

    #[test]
    fn bmi_classification_boundaries() {
        assert_eq!(bmi_label(18.49), "Underweight");
        assert_eq!(bmi_label(18.5), "Normal");
        assert_eq!(bmi_label(24.99), "Normal");
        assert_eq!(bmi_label(25.0), "Overweight");
        assert_eq!(bmi_label(29.99), "Overweight");
        assert_eq!(bmi_label(30.0), "Obese");
    }

    #[test]
    fn bmi_rounds_to_one_decimal() {
        // 70 / 1.75^2 = 22.857...
        assert_eq!(bmi_value(70.0, 175.0), 22.9);
    }

    #[test]
    fn bmi_marker_position_is_clamped() {
        assert_eq!(bmi_marker_position(10.0), 0.0);
        assert_eq!(bmi_marker_position(50.0), 100.0);
        assert_eq!(bmi_marker_position(27.0), 50.0);
    }

    #[test]
    fn missing_height_omits_bmi_without_failing() {
        let summary = summarize(&[], &[], Some(&profile(70.0, None, 2000)));
        assert!(summary.bmi.is_none());
        assert_eq!(summary.daily_calorie_limit, 2000);
    }

    #[test]
    fn missing_profile_falls_back_to_defaults() {
        let summary = summarize(&[], &[], None);
        assert!(summary.bmi.is_none());
        assert_eq!(summary.daily_calorie_limit, DEFAULT_CALORIE_LIMIT);
        assert_eq!(summary.daily_burn_goal, DEFAULT_BURN_GOAL);
    }
}
