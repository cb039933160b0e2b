//! Preference Store Port - 偏好键值存储
//!
//! 定义进程级键值偏好存储的抽象接口，
//! 具体实现在 infrastructure 层（Sled 持久化 / 内存实现）

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Preference Store 错误
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Preference Store Port
///
/// 标量值以 JSON Value 表示，`Value::Null` 表示"显式缺失"。
/// 存储生命周期与应用安装一致，组件本身不提供删除路径。
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// 读取键对应的值，键不存在时返回 None
    async fn get(&self, key: &str) -> Result<Option<Value>, PreferenceError>;

    /// 写入键值，覆盖已有值
    async fn set(&self, key: &str, value: Value) -> Result<(), PreferenceError>;
}
