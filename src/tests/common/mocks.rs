use std::cell::RefCell;
use std::rc::Rc;
use crate::adapter::SettingsAdapter;
use crate::error::ThemeError;
use crate::indicator::ThemeIndicator;
use crate::store::PreferenceStore;
use crate::utils::{Glyph, ThemePreference};

#[derive(Clone, Default)]
pub struct RecordingIndicator {
    rendered: Rc<RefCell<Vec<ThemePreference>>>,
}

impl RecordingIndicator {
    pub fn renders(&self) -> Vec<ThemePreference> {
        self.rendered.borrow().clone()
    }

    pub fn glyph(&self) -> Option<Glyph> {
        self.rendered.borrow().last().copied().map(Glyph::for_theme)
    }
}

impl ThemeIndicator for RecordingIndicator {
    fn render(&self, theme: ThemePreference) {
        self.rendered.borrow_mut().push(theme);
    }
}

#[derive(Clone, Default)]
pub struct RecordingAdapter {
    versions: Rc<RefCell<Vec<ThemePreference>>>,
    fail: bool,
}

impl RecordingAdapter {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn versions(&self) -> Vec<ThemePreference> {
        self.versions.borrow().clone()
    }
}

impl SettingsAdapter for RecordingAdapter {
    fn reinitialize(&self, theme: ThemePreference) -> Result<(), ThemeError> {
        self.versions.borrow_mut().push(theme);
        if self.fail {
            return Err(ThemeError::Adapter("settings library threw".to_string()));
        }
        Ok(())
    }
}

/// Storage that reads fine but rejects writes, like a full localStorage.
#[derive(Clone, Default)]
pub struct ReadOnlyStore;

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::Storage("QuotaExceededError".to_string()))
    }
}
