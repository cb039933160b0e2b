//! Reading Context - 书签实体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{Locator, PublicationId};

/// 书签
///
/// `resource_index` 是创建时 Locator 的 href 在阅读顺序中的下标，
/// 回跳时直接按下标显示，避免再次解析 href。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: Uuid,
    pub publication_id: PublicationId,
    pub resource_index: usize,
    pub locator: Locator,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(publication_id: PublicationId, resource_index: usize, locator: Locator) -> Self {
        Self {
            id: Uuid::new_v4(),
            publication_id,
            resource_index,
            locator,
            created_at: Utc::now(),
        }
    }
}
