//! Navigator Event Publisher
//!
//! 按出版物维护广播通道：宿主在打开出版物时注册通道并把接收端
//! 交给 ReaderSession，Navigator 侧在关闭时发布 `Exited` 事件。

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::application::session::NavigatorEvent;
use crate::domain::reading::PublicationId;

const CHANNEL_CAPACITY: usize = 16;

/// 事件发布器
pub struct NavigatorEvents {
    /// publication identifier -> broadcast sender
    channels: DashMap<String, broadcast::Sender<NavigatorEvent>>,
}

impl NavigatorEvents {
    pub fn new() -> Self {
        Self {
            channels: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 注册出版物的事件通道，返回一个订阅
    pub fn register(&self, id: &PublicationId) -> broadcast::Receiver<NavigatorEvent> {
        if let Some(sender) = self.channels.get(id.as_str()) {
            return sender.subscribe();
        }

        let (tx, rx) = broadcast::channel(CHANNEL_CAPACITY);
        self.channels.insert(id.as_str().to_string(), tx);
        rx
    }

    /// 追加订阅已注册的通道
    pub fn subscribe(&self, id: &PublicationId) -> Option<broadcast::Receiver<NavigatorEvent>> {
        self.channels.get(id.as_str()).map(|s| s.subscribe())
    }

    /// 取消注册（出版物关闭后）
    pub fn unregister(&self, id: &PublicationId) {
        self.channels.remove(id.as_str());
    }

    /// 发布事件
    pub fn publish(&self, id: &PublicationId, event: NavigatorEvent) {
        if let Some(sender) = self.channels.get(id.as_str()) {
            if let Err(err) = sender.send(event) {
                tracing::debug!(
                    publication_id = %id,
                    error = %err,
                    "no active subscribers for navigator event"
                );
            }
        } else {
            tracing::debug!(
                publication_id = %id,
                "navigator event for unregistered publication dropped"
            );
        }
    }
}

impl Default for NavigatorEvents {
    fn default() -> Self {
        Self::new()
    }
}
