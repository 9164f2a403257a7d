mod dom;
mod signal;

pub use dom::DomIndicator;
pub use signal::SignalIndicator;

use crate::utils::ThemePreference;

/// Presentation of the applied theme. Implementations pick the glyph with
/// [`crate::utils::Glyph::for_theme`].
pub trait ThemeIndicator {
    fn render(&self, theme: ThemePreference);
}
