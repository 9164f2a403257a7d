//! Picks the store and settings adapter available on the current platform.

use std::path::{Path, PathBuf};
use crate::adapter::SettingsAdapter;
use crate::configs::ThemeConfig;
use crate::store::PreferenceStore;

const APP_DIR: &str = "theme_switcher";
const STORE_FILE: &str = "preferences.json";

#[cfg(target_arch = "wasm32")]
pub fn load_config() -> ThemeConfig {
    ThemeConfig::default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> ThemeConfig {
    ThemeConfig::from_env().unwrap_or_else(|e| {
        log::error!("{}, falling back to default theme settings", e);
        ThemeConfig::default()
    })
}

#[cfg(target_arch = "wasm32")]
pub fn platform_store(_config: &ThemeConfig) -> Box<dyn PreferenceStore> {
    match crate::store::LocalStore::from_window() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("{}; theme preference will not survive a reload", e);
            Box::new(crate::store::MemoryStore::new())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn platform_store(config: &ThemeConfig) -> Box<dyn PreferenceStore> {
    match store_path(config.store_path.as_deref(), dirs::config_dir()) {
        Some(path) => {
            log::info!("Storing theme preference in {}", path.display());
            Box::new(crate::store::JsonFileStore::new(path))
        }
        None => {
            log::warn!("No config directory found; theme preference will not survive a restart");
            Box::new(crate::store::MemoryStore::new())
        }
    }
}

/// An explicit `THEME_STORE_PATH` wins, otherwise a file under the user's config directory.
pub fn store_path(configured: Option<&Path>, config_dir: Option<PathBuf>) -> Option<PathBuf> {
    configured
        .map(Path::to_path_buf)
        .or_else(|| config_dir.map(|dir| dir.join(APP_DIR).join(STORE_FILE)))
}

#[cfg(target_arch = "wasm32")]
pub fn platform_adapter(config: &ThemeConfig) -> Option<Box<dyn SettingsAdapter>> {
    crate::adapter::JsSettingsAdapter::detect(
        &config.adapter_options_global,
        &config.adapter_constructor_global
    ).map(|adapter| Box::new(adapter) as Box<dyn SettingsAdapter>)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn platform_adapter(_config: &ThemeConfig) -> Option<Box<dyn SettingsAdapter>> {
    None
}
