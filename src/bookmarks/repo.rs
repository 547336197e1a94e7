use crate::bookmarks::repo_types::Bookmark;
use sqlx::PgPool;
use uuid::Uuid;

/// New bookmark fields, validated by the handler.
#[derive(Debug)]
pub struct NewBookmark {
    pub title: String,
    pub link: String,
    pub description: Option<String>,
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

impl Bookmark {
    /// Insert a bookmark owned by `user_id`.
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        new: NewBookmark,
    ) -> anyhow::Result<Bookmark> {
        let bookmark = sqlx::query_as::<_, Bookmark>(
            r#"
            INSERT INTO bookmarks (user_id, title, link, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, title, link, description, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(new.title)
        .bind(new.link)
        .bind(new.description)
        .fetch_one(db)
        .await?;
        Ok(bookmark)
    }

    /// All bookmarks owned by `user_id`, oldest first.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Bookmark>> {
        let rows = sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, user_id, title, link, description, created_at, updated_at
            FROM bookmarks
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// A single bookmark, only if owned by `user_id`.
    pub async fn find_by_id(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
    ) -> anyhow::Result<Option<Bookmark>> {
        let bookmark = sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, user_id, title, link, description, created_at, updated_at
            FROM bookmarks
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(bookmark)
    }

    /// Partial update scoped to the owner; `None` means not-owned or absent.
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        patch: BookmarkPatch,
    ) -> anyhow::Result<Option<Bookmark>> {
        let bookmark = sqlx::query_as::<_, Bookmark>(
            r#"
            UPDATE bookmarks
            SET title = COALESCE($3, title),
                link = COALESCE($4, link),
                description = COALESCE($5, description),
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, link, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(patch.title)
        .bind(patch.link)
        .bind(patch.description)
        .fetch_optional(db)
        .await?;
        Ok(bookmark)
    }

    /// Delete scoped to the owner; returns whether a row was removed.
    pub async fn delete(db: &PgPool, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM bookmarks
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
