//! Reading Context - 出版物

use serde::{Deserialize, Serialize};

use super::value_objects::PublicationId;

/// 出版物元数据
///
/// `identifier` 可能缺失：没有标识的出版物无法持久化阅读位置，
/// 相关操作静默跳过而不是报错。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicationMetadata {
    pub identifier: Option<PublicationId>,
    pub title: Option<String>,
}

/// 阅读顺序条目（spine item）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingOrderItem {
    pub href: String,
}

impl ReadingOrderItem {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// 出版物
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Publication {
    pub metadata: PublicationMetadata,
    pub reading_order: Vec<ReadingOrderItem>,
}

impl Publication {
    pub fn new(metadata: PublicationMetadata, reading_order: Vec<ReadingOrderItem>) -> Self {
        Self {
            metadata,
            reading_order,
        }
    }

    pub fn identifier(&self) -> Option<&PublicationId> {
        self.metadata.identifier.as_ref()
    }

    /// 根据 href 解析阅读顺序下标
    pub fn resource_index_for_href(&self, href: &str) -> Option<usize> {
        self.reading_order.iter().position(|item| item.href == href)
    }
}
