mod fake_navigator;

pub use fake_navigator::FakeNavigator;
