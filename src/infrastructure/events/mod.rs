//! Events - Navigator 事件发布

mod publisher;

pub use publisher::NavigatorEvents;
