//! Fake Navigator - 用于测试的导航组件
//!
//! 不做任何渲染：返回预设的当前位置，并记录收到的显示请求。

use std::sync::Mutex;

use crate::application::ports::Navigator;
use crate::domain::reading::{Locator, Progression};

/// Fake Navigator
pub struct FakeNavigator {
    location: Mutex<Option<Locator>>,
    spine: Vec<String>,
    displayed: Mutex<Vec<(usize, Option<Progression>)>>,
    displayed_hrefs: Mutex<Vec<String>>,
}

impl FakeNavigator {
    pub fn new() -> Self {
        Self {
            location: Mutex::new(None),
            spine: Vec::new(),
            displayed: Mutex::new(Vec::new()),
            displayed_hrefs: Mutex::new(Vec::new()),
        }
    }

    /// 预设当前位置
    pub fn with_location(self, locator: Locator) -> Self {
        *self.location.lock().unwrap() = Some(locator);
        self
    }

    /// 预设阅读顺序（href 跳转时用于判断条目是否存在）
    pub fn with_spine(mut self, hrefs: Vec<String>) -> Self {
        self.spine = hrefs;
        self
    }

    pub fn set_location(&self, locator: Option<Locator>) {
        *self.location.lock().unwrap() = locator;
    }

    /// 收到的 display_item 调用记录
    pub fn displayed(&self) -> Vec<(usize, Option<Progression>)> {
        self.displayed.lock().unwrap().clone()
    }

    /// 收到的 display_item_with_href 调用记录
    pub fn displayed_hrefs(&self) -> Vec<String> {
        self.displayed_hrefs.lock().unwrap().clone()
    }
}

impl Default for FakeNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for FakeNavigator {
    fn current_location(&self) -> Option<Locator> {
        self.location.lock().unwrap().clone()
    }

    fn display_item(&self, index: usize, progression: Option<Progression>) {
        self.displayed.lock().unwrap().push((index, progression));
    }

    fn display_item_with_href(&self, href: &str) -> bool {
        self.displayed_hrefs.lock().unwrap().push(href.to_string());
        self.spine.is_empty() || self.spine.iter().any(|h| h == href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_display_calls() {
        let navigator = FakeNavigator::new().with_spine(vec!["a.xhtml".into()]);

        navigator.display_item(1, None);
        assert!(navigator.display_item_with_href("a.xhtml"));
        assert!(!navigator.display_item_with_href("b.xhtml"));

        assert_eq!(navigator.displayed(), vec![(1, None)]);
        assert_eq!(navigator.displayed_hrefs(), vec!["a.xhtml", "b.xhtml"]);
    }
}
