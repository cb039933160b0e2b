//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod navigator;
mod preferences;
mod repositories;

pub use navigator::Navigator;
pub use preferences::{PreferenceError, PreferenceStore};
pub use repositories::{BookmarkRepository, RepositoryError};
