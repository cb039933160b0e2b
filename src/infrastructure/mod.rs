//! Infrastructure Layer - 基础设施层
//!
//! 端口的具体实现：
//! - persistence: Sled 偏好存储 + SQLite 书签存储
//! - memory: PreferenceStore 内存实现
//! - events: Navigator 事件发布
//! - adapters: Fake Navigator（测试用）

pub mod adapters;
pub mod events;
pub mod memory;
pub mod persistence;
