//! Navigator Port - 导航组件
//!
//! 导航/渲染引擎是外部协作方（宿主应用提供），这里只建模
//! 本组件消费的接口：读取当前位置、按坐标显示文档。

use crate::domain::reading::{Locator, Progression};

/// Navigator Port
///
/// 同步接口：导航操作在宿主 UI 的顺序流中调用。
pub trait Navigator: Send + Sync {
    /// 当前阅读位置，出版物尚未布局完成时可能为 None
    fn current_location(&self) -> Option<Locator>;

    /// 按阅读顺序下标显示文档，progression 为 None 表示文档开头
    fn display_item(&self, index: usize, progression: Option<Progression>);

    /// 按 href 显示阅读顺序条目，条目不存在时返回 false
    fn display_item_with_href(&self, href: &str) -> bool;
}
