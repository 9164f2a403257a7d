mod js;

pub use js::JsSettingsAdapter;

use crate::error::ThemeError;
use crate::utils::ThemePreference;

/// Third-party settings library that re-renders itself for a theme.
pub trait SettingsAdapter {
    fn reinitialize(&self, theme: ThemePreference) -> Result<(), ThemeError>;
}
