use web_sys::Storage;
use crate::error::ThemeError;
use super::PreferenceStore;

/// `window.localStorage`, shared with every same-origin page.
#[derive(Clone, Debug)]
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn from_window() -> Result<Self, ThemeError> {
        let window = web_sys::window()
            .ok_or_else(|| ThemeError::Storage("No window available".to_string()))?;
        let storage = window
            .local_storage()?
            .ok_or_else(|| ThemeError::Storage("localStorage is disabled".to_string()))?;
        Ok(Self::new(storage))
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.storage.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        Ok(self.storage.set_item(key, value)?)
    }
}
