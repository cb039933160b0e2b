//! Reading Context - Value Objects

use serde::{Deserialize, Serialize};

use super::errors::ReadingError;

/// 出版物唯一标识
///
/// 不透明字符串（如 EPUB package identifier），跨会话稳定。
/// 阅读位置只有与保存时的标识配对才有意义，不同出版物之间不做比较或合并。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicationId(String);

impl PublicationId {
    pub fn new(id: impl Into<String>) -> Result<Self, ReadingError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ReadingError::EmptyIdentifier);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PublicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 文档内进度
///
/// 取值范围 [0.0, 1.0]，0.0 = 文档开头，1.0 = 文档结尾。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Progression(f64);

impl Progression {
    pub const ZERO: Progression = Progression(0.0);

    pub fn new(value: f64) -> Result<Self, ReadingError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ReadingError::InvalidProgression(value));
        }
        Ok(Self(value))
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Progression {
    type Error = ReadingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progression> for f64 {
    fn from(p: Progression) -> Self {
        p.0
    }
}

/// 阅读位置
///
/// `document_index` 为阅读顺序（spine）内的文档下标；
/// `progression` 缺失表示"该文档开头"。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReadingPosition {
    pub document_index: usize,
    pub progression: Option<Progression>,
}

impl ReadingPosition {
    pub fn new(document_index: usize, progression: Option<Progression>) -> Self {
        Self {
            document_index,
            progression,
        }
    }

    /// 出版物开头（首次打开时的初始状态）
    pub fn start() -> Self {
        Self::default()
    }
}

/// Locator - 出版物内精确位置的引用
///
/// 由导航组件产生，`href` 指向阅读顺序内的资源。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locator {
    pub href: String,
    pub progression: Option<Progression>,
}

impl Locator {
    pub fn new(href: impl Into<String>, progression: Option<Progression>) -> Self {
        Self {
            href: href.into(),
            progression,
        }
    }
}
