//! Repository Ports - 出站端口
//!
//! 定义书签持久化的抽象接口，具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::reading::{Bookmark, PublicationId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Bookmark Repository Port
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// 保存书签
    async fn save(&self, bookmark: &Bookmark) -> Result<(), RepositoryError>;

    /// 根据 ID 查找书签
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bookmark>, RepositoryError>;

    /// 获取某出版物的所有书签（按创建时间升序）
    async fn find_by_publication(
        &self,
        publication_id: &PublicationId,
    ) -> Result<Vec<Bookmark>, RepositoryError>;

    /// 删除书签
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
