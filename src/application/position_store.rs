//! Reading Position Store - 阅读位置持久化服务
//!
//! 按出版物标识保存/恢复最后阅读位置。持久化是尽力而为的：
//! 丢一个书签位置对阅读不致命，存储故障只记日志、不向上传播。
//!
//! 键布局（沿用通用偏好存储的两键形式）：
//! - `"<identifier>-document"` → 文档下标（整数）
//! - `"<identifier>-documentProgression"` → 文档内进度（浮点，缺失时为 null）

use std::sync::Arc;

use serde_json::Value;

use crate::domain::reading::{Progression, PublicationId, ReadingPosition};

use super::ports::{PreferenceError, PreferenceStore};

/// 阅读位置存储
pub struct ReadingPositionStore {
    preferences: Arc<dyn PreferenceStore>,
}

impl ReadingPositionStore {
    pub fn new(preferences: Arc<dyn PreferenceStore>) -> Self {
        Self { preferences }
    }

    fn document_key(id: &PublicationId) -> String {
        format!("{}-document", id)
    }

    fn progression_key(id: &PublicationId) -> String {
        format!("{}-documentProgression", id)
    }

    /// 保存阅读位置，覆盖该标识下的已有记录（last-write-wins）
    ///
    /// 永不失败：底层存储不可用时本次调用等价于 no-op。
    pub async fn save(&self, id: &PublicationId, position: &ReadingPosition) {
        if let Err(err) = self.try_save(id, position).await {
            tracing::warn!(
                publication_id = %id,
                error = %err,
                "failed to persist reading position"
            );
        }
    }

    /// 读取阅读位置
    ///
    /// 无记录时返回出版物开头 `{document_index: 0, progression: None}`，
    /// 这是初始状态而不是错误；存储异常同样回退到开头。
    pub async fn load(&self, id: &PublicationId) -> ReadingPosition {
        match self.try_load(id).await {
            Ok(position) => position,
            Err(err) => {
                tracing::warn!(
                    publication_id = %id,
                    error = %err,
                    "failed to read stored reading position, starting from beginning"
                );
                ReadingPosition::start()
            }
        }
    }

    async fn try_save(
        &self,
        id: &PublicationId,
        position: &ReadingPosition,
    ) -> Result<(), PreferenceError> {
        self.preferences
            .set(
                &Self::document_key(id),
                Value::from(position.document_index as u64),
            )
            .await?;

        let progression = match position.progression {
            Some(p) => Value::from(p.as_f64()),
            None => Value::Null,
        };
        self.preferences
            .set(&Self::progression_key(id), progression)
            .await?;

        tracing::debug!(
            publication_id = %id,
            document_index = position.document_index,
            progression = ?position.progression,
            "reading position saved"
        );
        Ok(())
    }

    async fn try_load(&self, id: &PublicationId) -> Result<ReadingPosition, PreferenceError> {
        let document_index = match self.preferences.get(&Self::document_key(id)).await? {
            Some(value) => value.as_u64().unwrap_or(0) as usize,
            None => return Ok(ReadingPosition::start()),
        };

        let progression = match self.preferences.get(&Self::progression_key(id)).await? {
            Some(Value::Number(n)) => {
                let raw = n.as_f64().unwrap_or(0.0);
                match Progression::new(raw) {
                    Ok(p) => Some(p),
                    Err(_) => {
                        // 存量数据越界：按文档开头处理
                        tracing::warn!(
                            publication_id = %id,
                            progression = raw,
                            "stored progression out of range, ignoring"
                        );
                        None
                    }
                }
            }
            _ => None,
        };

        Ok(ReadingPosition::new(document_index, progression))
    }
}
