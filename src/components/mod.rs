mod theme_switcher;

pub use theme_switcher::{use_theme_provider, ThemeSwitcher};
