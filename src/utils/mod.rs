mod glyph;
mod theme_state;

pub use glyph::Glyph;
pub use theme_state::ThemePreference;
