use dioxus::prelude::*;
use crate::utils::ThemePreference;
use super::ThemeIndicator;

/// Publishes the applied theme to Dioxus components.
#[derive(Clone, Copy)]
pub struct SignalIndicator {
    theme: Signal<ThemePreference>,
}

impl SignalIndicator {
    pub fn new(theme: Signal<ThemePreference>) -> Self {
        Self { theme }
    }
}

impl ThemeIndicator for SignalIndicator {
    fn render(&self, theme: ThemePreference) {
        let mut signal = self.theme;
        signal.set(theme);
    }
}
