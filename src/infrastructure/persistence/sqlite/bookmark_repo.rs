//! SQLite Bookmark Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{BookmarkRepository, RepositoryError};
use crate::domain::reading::{Bookmark, Locator, Progression, PublicationId};

/// SQLite Bookmark Repository
pub struct SqliteBookmarkRepository {
    pool: DbPool,
}

impl SqliteBookmarkRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct BookmarkRow {
    id: String,
    publication_id: String,
    resource_index: i64,
    href: String,
    progression: Option<f64>,
    created_at: String,
}

impl TryFrom<BookmarkRow> for Bookmark {
    type Error = RepositoryError;

    fn try_from(row: BookmarkRow) -> Result<Self, Self::Error> {
        let progression = row
            .progression
            .map(Progression::new)
            .transpose()
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        Ok(Bookmark {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            publication_id: PublicationId::new(row.publication_id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            resource_index: row.resource_index as usize,
            locator: Locator::new(row.href, progression),
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl BookmarkRepository for SqliteBookmarkRepository {
    async fn save(&self, bookmark: &Bookmark) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO bookmarks (id, publication_id, resource_index, href, progression, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(bookmark.id.to_string())
        .bind(bookmark.publication_id.as_str())
        .bind(bookmark.resource_index as i64)
        .bind(&bookmark.locator.href)
        .bind(bookmark.locator.progression.map(|p| p.as_f64()))
        .bind(bookmark.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bookmark>, RepositoryError> {
        let row: Option<BookmarkRow> = sqlx::query_as(
            "SELECT id, publication_id, resource_index, href, progression, created_at FROM bookmarks WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(Bookmark::try_from).transpose()
    }

    async fn find_by_publication(
        &self,
        publication_id: &PublicationId,
    ) -> Result<Vec<Bookmark>, RepositoryError> {
        let rows: Vec<BookmarkRow> = sqlx::query_as(
            "SELECT id, publication_id, resource_index, href, progression, created_at FROM bookmarks WHERE publication_id = ? ORDER BY created_at ASC",
        )
        .bind(publication_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Bookmark::try_from).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM bookmarks WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn repo() -> SqliteBookmarkRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteBookmarkRepository::new(pool)
    }

    fn bookmark(publication: &str, index: usize, progression: Option<f64>) -> Bookmark {
        Bookmark::new(
            PublicationId::new(publication).unwrap(),
            index,
            Locator::new(
                format!("chapter-{}.xhtml", index),
                progression.map(|p| Progression::new(p).unwrap()),
            ),
        )
    }

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let repo = repo().await;
        let bm = bookmark("book-1", 2, Some(0.4));

        repo.save(&bm).await.unwrap();

        let found = repo.find_by_id(bm.id).await.unwrap().unwrap();
        assert_eq!(found, bm);
        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_publication_filters_and_orders() {
        let repo = repo().await;
        let first = bookmark("book-1", 0, None);
        let second = bookmark("book-1", 3, Some(0.9));
        let other = bookmark("book-2", 1, None);

        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();
        repo.save(&other).await.unwrap();

        let found = repo
            .find_by_publication(&PublicationId::new("book-1").unwrap())
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|b| b.publication_id.as_str() == "book-1"));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = repo().await;
        let bm = bookmark("book-1", 1, None);

        repo.save(&bm).await.unwrap();
        repo.delete(bm.id).await.unwrap();

        assert!(repo.find_by_id(bm.id).await.unwrap().is_none());
    }
}
