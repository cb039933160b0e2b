//! Sled Persistence

mod preferences;

pub use preferences::{SledPreferenceConfig, SledPreferenceStore};
