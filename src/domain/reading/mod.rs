//! Reading Context - 阅读限界上下文
//!
//! 职责:
//! - 出版物元数据与阅读顺序（spine）
//! - 阅读位置与进度值对象
//! - 书签实体

mod bookmark;
mod errors;
mod publication;
mod value_objects;

pub use bookmark::Bookmark;
pub use errors::ReadingError;
pub use publication::{Publication, PublicationMetadata, ReadingOrderItem};
pub use value_objects::{Locator, Progression, PublicationId, ReadingPosition};
