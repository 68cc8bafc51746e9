use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Profile record in the database. `goal` is stored as lowercase text and
/// parsed into [`crate::profile::dto::Goal`] at the API boundary.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub user_id: Uuid,
    pub age: i32,
    pub weight_kg: f64,
    pub height_cm: Option<f64>,
    pub goal: String,
    pub daily_calorie_intake: i32,
    pub daily_calorie_burn: i32,
    pub updated_at: OffsetDateTime,
}

impl Profile {
    pub async fn find_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT user_id, age, weight_kg, height_cm, goal,
                   daily_calorie_intake, daily_calorie_burn, updated_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(profile)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn upsert(
        db: &PgPool,
        user_id: Uuid,
        age: i32,
        weight_kg: f64,
        height_cm: Option<f64>,
        goal: &str,
        daily_calorie_intake: i32,
        daily_calorie_burn: i32,
    ) -> anyhow::Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles
                (user_id, age, weight_kg, height_cm, goal,
                 daily_calorie_intake, daily_calorie_burn, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, now())
            ON CONFLICT (user_id) DO UPDATE SET
                age = EXCLUDED.age,
                weight_kg = EXCLUDED.weight_kg,
                height_cm = EXCLUDED.height_cm,
                goal = EXCLUDED.goal,
                daily_calorie_intake = EXCLUDED.daily_calorie_intake,
                daily_calorie_burn = EXCLUDED.daily_calorie_burn,
                updated_at = now()
            RETURNING user_id, age, weight_kg, height_cm, goal,
                      daily_calorie_intake, daily_calorie_burn, updated_at
            "#,
        )
        .bind(user_id)
        .bind(age)
        .bind(weight_kg)
        .bind(height_cm)
        .bind(goal)
        .bind(daily_calorie_intake)
        .bind(daily_calorie_burn)
        .fetch_one(db)
        .await?;
        Ok(profile)
    }
}
