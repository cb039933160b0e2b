//! Adapters - 外部协作方适配器

mod navigator;

pub use navigator::FakeNavigator;
