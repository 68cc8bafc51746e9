use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Workout log record. Immutable once created except via delete.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub created_at: OffsetDateTime,
}

impl ActivityEntry {
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        name: &str,
        duration_minutes: i32,
        calories_burned: i32,
    ) -> anyhow::Result<ActivityEntry> {
        let entry = sqlx::query_as::<_, ActivityEntry>(
            r#"
            INSERT INTO activity_entries (user_id, name, duration_minutes, calories_burned)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, name, duration_minutes, calories_burned, created_at
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(duration_minutes)
        .bind(calories_burned)
        .fetch_one(db)
        .await?;
        Ok(entry)
    }

    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<ActivityEntry>> {
        let rows = sqlx::query_as::<_, ActivityEntry>(
            r#"
            SELECT id, user_id, name, duration_minutes, calories_burned, created_at
            FROM activity_entries
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
    ) -> anyhow::Result<Option<ActivityEntry>> {
        let entry = sqlx::query_as::<_, ActivityEntry>(
            r#"
            SELECT id, user_id, name, duration_minutes, calories_burned, created_at
            FROM activity_entries
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(entry)
    }

    pub async fn delete_owned(db: &PgPool, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM activity_entries
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
