//! Memory - 内存实现

mod preferences;

pub use preferences::InMemoryPreferenceStore;
