//! Domain Layer - 领域层
//!
//! 单一限界上下文:
//! - Reading Context: 出版物元数据、阅读位置、书签

pub mod reading;
