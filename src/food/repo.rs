use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Food log record. Immutable once created; the only write after insert is
/// delete. `meal_type` is lowercase text, validated at create time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FoodEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub calories: i32,
    pub meal_type: String,
    pub created_at: OffsetDateTime,
}

impl FoodEntry {
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        name: &str,
        calories: i32,
        meal_type: &str,
    ) -> anyhow::Result<FoodEntry> {
        let entry = sqlx::query_as::<_, FoodEntry>(
            r#"
            INSERT INTO food_entries (user_id, name, calories, meal_type)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, name, calories, meal_type, created_at
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(calories)
        .bind(meal_type)
        .fetch_one(db)
        .await?;
        Ok(entry)
    }

    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<FoodEntry>> {
        let rows = sqlx::query_as::<_, FoodEntry>(
            r#"
            SELECT id, user_id, name, calories, meal_type, created_at
            FROM food_entries
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn get_owned(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
    ) -> anyhow::Result<Option<FoodEntry>> {
        let entry = sqlx::query_as::<_, FoodEntry>(
            r#"
            SELECT id, user_id, name, calories, meal_type, created_at
            FROM food_entries
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(entry)
    }

    /// Delete an entry if it belongs to the caller. Returns whether a row
    /// was removed.
    pub async fn delete_owned(db: &PgPool, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM food_entries
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
