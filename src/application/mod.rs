//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（PreferenceStore、BookmarkRepository、Navigator）
//! - position_store: 阅读位置持久化服务
//! - session: 阅读会话（导航事件 + 书签用例）
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod position_store;
pub mod session;

// Re-exports
pub use error::ApplicationError;
pub use ports::{
    BookmarkRepository, Navigator, PreferenceError, PreferenceStore, RepositoryError,
};
pub use position_store::ReadingPositionStore;
pub use session::{NavigatorEvent, ReaderSession};
