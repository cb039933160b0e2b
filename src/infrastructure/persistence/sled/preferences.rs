//! Sled-based Preference Store Implementation
//!
//! 进程重启后仍然可用的键值存储。值以 JSON 字节存放，
//! `Value::Null` 同样落盘（表示"显式缺失"的标量）。

use async_trait::async_trait;
use serde_json::Value;
use sled::Db;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{PreferenceError, PreferenceStore};

/// Sled 偏好存储配置
#[derive(Debug, Clone)]
pub struct SledPreferenceConfig {
    /// 数据库路径
    pub db_path: String,
}

impl Default for SledPreferenceConfig {
    fn default() -> Self {
        Self {
            db_path: "data/preferences.sled".to_string(),
        }
    }
}

/// Sled 偏好存储
pub struct SledPreferenceStore {
    db: Db,
}

impl SledPreferenceStore {
    pub fn new(config: &SledPreferenceConfig) -> Result<Self, PreferenceError> {
        let db = sled::open(&config.db_path)
            .map_err(|e| PreferenceError::Storage(e.to_string()))?;

        tracing::info!(
            db_path = %config.db_path,
            entries = db.len(),
            "SledPreferenceStore initialized"
        );

        Ok(Self { db })
    }

    /// 打开指定路径上的存储
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PreferenceError> {
        let config = SledPreferenceConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
        };
        Self::new(&config)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 刷新到磁盘
    ///
    /// sled 自己会周期性刷盘；宿主在退出前可显式调用。
    pub fn flush(&self) -> Result<(), PreferenceError> {
        self.db
            .flush()
            .map_err(|e| PreferenceError::Storage(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for SledPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, PreferenceError> {
        match self.db.get(key) {
            Ok(Some(bytes)) => {
                let value = serde_json::from_slice(&bytes)
                    .map_err(|e| PreferenceError::Serialization(e.to_string()))?;
                Ok(Some(value))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(PreferenceError::Storage(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), PreferenceError> {
        let bytes = serde_json::to_vec(&value)
            .map_err(|e| PreferenceError::Serialization(e.to_string()))?;
        self.db
            .insert(key, bytes)
            .map_err(|e| PreferenceError::Storage(e.to_string()))?;

        tracing::debug!(key = %key, "preference written");
        Ok(())
    }
}
