//! In-Memory Preference Store Implementation
//!
//! 测试与不需要持久化的宿主使用；进程退出即丢失。

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;

use crate::application::ports::{PreferenceError, PreferenceStore};

/// 内存偏好存储
pub struct InMemoryPreferenceStore {
    entries: DashMap<String, Value>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for InMemoryPreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, PreferenceError> {
        Ok(self.entries.get(key).map(|v| v.clone()))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), PreferenceError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_set_overwrite() {
        let store = InMemoryPreferenceStore::new();

        assert_eq!(store.get("k").await.unwrap(), None);

        store.set("k", Value::from(3_u64)).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(Value::from(3_u64)));

        store.set("k", Value::Null).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(Value::Null));
        assert_eq!(store.len(), 1);
    }
}
