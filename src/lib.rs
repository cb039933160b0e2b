//! Readmark - 阅读位置持久化组件
//!
//! 架构设计: Hexagonal Architecture (Ports & Adapters)
//!
//! 领域层 (domain/):
//! - Reading Context: 出版物、阅读位置、书签
//!
//! 应用层 (application/):
//! - Ports: 端口定义（PreferenceStore, BookmarkRepository, Navigator）
//! - ReadingPositionStore: 按出版物标识持久化/恢复阅读位置
//! - ReaderSession: 导航事件编排与书签用例
//!
//! 基础设施层 (infrastructure/):
//! - Persistence: Sled 偏好存储 + SQLite 书签存储
//! - Memory: PreferenceStore 内存实现
//! - Events: Navigator 事件发布
//! - Adapters: Fake Navigator（测试用）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
