use std::path::PathBuf;
use crate::error::ThemeError;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_INDICATOR_ID: &str = "theme-switcher-btn";
pub const DEFAULT_SETTINGS_OPTIONS: &str = "dezSettingsOptions";
pub const DEFAULT_SETTINGS_CONSTRUCTOR: &str = "dezSettings";

/// Names the switcher needs to find its collaborators on the host page.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub indicator_id: String,
    pub adapter_options_global: String,
    pub adapter_constructor_global: String,
    /// Preference file for the desktop build; the browser uses localStorage.
    pub store_path: Option<PathBuf>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            indicator_id: DEFAULT_INDICATOR_ID.to_string(),
            adapter_options_global: DEFAULT_SETTINGS_OPTIONS.to_string(),
            adapter_constructor_global: DEFAULT_SETTINGS_CONSTRUCTOR.to_string(),
            store_path: None,
        }
    }
}

impl ThemeConfig {
    pub fn from_env() -> Result<Self, ThemeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ThemeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str, fallback: String| {
            lookup(key).unwrap_or_else(|| {
                log::debug!("{} not set, using {:?}", key, fallback);
                fallback
            })
        };

        let config = Self {
            storage_key: read("THEME_STORAGE_KEY", defaults.storage_key),
            indicator_id: read("THEME_INDICATOR_ID", defaults.indicator_id),
            adapter_options_global: read("THEME_SETTINGS_OPTIONS", defaults.adapter_options_global),
            adapter_constructor_global: read(
                "THEME_SETTINGS_CONSTRUCTOR",
                defaults.adapter_constructor_global
            ),
            store_path: lookup("THEME_STORE_PATH").filter(|p| !p.is_empty()).map(PathBuf::from),
        };
        config.validate()?;

        log::info!(
            "Theme switcher using key {:?} and indicator #{}",
            config.storage_key,
            config.indicator_id
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        let required = [
            ("THEME_STORAGE_KEY", &self.storage_key),
            ("THEME_INDICATOR_ID", &self.indicator_id),
            ("THEME_SETTINGS_OPTIONS", &self.adapter_options_global),
            ("THEME_SETTINGS_CONSTRUCTOR", &self.adapter_constructor_global),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ThemeError::Config(format!("{} must not be empty", name)));
            }
        }
        Ok(())
    }
}
