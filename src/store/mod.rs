mod file;
mod local;
mod memory;

pub use file::JsonFileStore;
pub use local::LocalStore;
pub use memory::MemoryStore;

use crate::error::ThemeError;

/// String key-value storage shared with the rest of the page.
///
/// Implementations must not cache: every `get` reflects writes made by
/// other actors since the last call.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}
