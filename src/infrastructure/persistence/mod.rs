//! Persistence - 持久化实现
//!
//! - sled: 偏好键值存储（阅读位置）
//! - sqlite: 书签存储

pub mod sled;
pub mod sqlite;
