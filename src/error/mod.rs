mod theme;

pub use theme::ThemeError;
pub(crate) use theme::describe_js;
