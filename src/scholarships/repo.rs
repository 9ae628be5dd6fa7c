use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::scholarships::dto::NormalizedScholarship;

/// Saved-scholarship record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedScholarship {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub provider: String,
    pub deadline: String,
    pub url: String,
    pub created_at: OffsetDateTime,
}

impl SavedScholarship {
    pub async fn insert(
        db: &PgPool,
        user_id: Uuid,
        item: &NormalizedScholarship,
    ) -> anyhow::Result<SavedScholarship> {
        let rec = sqlx::query_as::<_, SavedScholarship>(
            r#"
            INSERT INTO saved_scholarships (user_id, name, provider, deadline, url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, name, provider, deadline, url, created_at
            "#,
        )
        .bind(user_id)
        .bind(&item.name)
        .bind(&item.provider)
        .bind(&item.deadline)
        .bind(&item.url)
        .fetch_one(db)
        .await?;
        Ok(rec)
    }

    /// All records owned by `user_id`, newest first.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<SavedScholarship>> {
        let rows = sqlx::query_as::<_, SavedScholarship>(
            r#"
            SELECT id, user_id, name, provider, deadline, url, created_at
            FROM saved_scholarships
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Deletes the record if it exists AND belongs to `user_id`; a record
    /// owned by someone else is indistinguishable from a missing one.
    pub async fn delete_owned(db: &PgPool, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM saved_scholarships
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
