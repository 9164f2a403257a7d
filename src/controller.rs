use crate::adapter::SettingsAdapter;
use crate::configs::env_validate::DEFAULT_STORAGE_KEY;
use crate::error::ThemeError;
use crate::indicator::ThemeIndicator;
use crate::store::PreferenceStore;
use crate::utils::ThemePreference;

/// Single authority for reading, applying and persisting the theme.
///
/// The persisted store is the source of truth: nothing is cached between
/// calls, so `toggle` flips whatever value is stored at click time, even
/// when another script changed it after initialization.
pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
    indicator: Box<dyn ThemeIndicator>,
    adapter: Option<Box<dyn SettingsAdapter>>,
    storage_key: String,
}

impl ThemeController {
    pub fn new(
        store: Box<dyn PreferenceStore>,
        indicator: Box<dyn ThemeIndicator>,
        adapter: Option<Box<dyn SettingsAdapter>>
    ) -> Self {
        Self {
            store,
            indicator,
            adapter,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Reads the persisted preference, resolving absent or unknown values to light.
    pub fn stored(&self) -> Result<ThemePreference, ThemeError> {
        let raw = self.store.get(&self.storage_key)?;
        Ok(ThemePreference::resolve(raw.as_deref()))
    }

    /// Page-load entry point. Returns the preference that was applied.
    pub fn initialize(&self) -> Result<ThemePreference, ThemeError> {
        let theme = self.stored()?;
        log::info!("Initializing theme: {}", theme);
        self.apply(theme)?;
        Ok(theme)
    }

    pub fn apply(&self, theme: ThemePreference) -> Result<(), ThemeError> {
        if let Some(adapter) = &self.adapter {
            if let Err(e) = adapter.reinitialize(theme) {
                log::error!("Failed to reinitialize settings adapter for {}: {}", theme, e);
            }
        }

        self.indicator.render(theme);
        self.store.set(&self.storage_key, theme.as_str())?;
        log::debug!("Applied theme {}", theme);
        Ok(())
    }

    /// Click handler. Flips the currently persisted value and returns the new one.
    pub fn toggle(&self) -> Result<ThemePreference, ThemeError> {
        let current = self.stored()?;
        let next = current.opposite();
        log::debug!("Toggling theme {} -> {}", current, next);
        self.apply(next)?;
        Ok(next)
    }
}
