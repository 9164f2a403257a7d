use web_sys::Element;
use crate::error::describe_js;
use crate::utils::{Glyph, ThemePreference};
use super::ThemeIndicator;

/// A server-rendered button whose content is replaced in place.
#[derive(Clone, Debug)]
pub struct DomIndicator {
    element: Element,
}

impl DomIndicator {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl ThemeIndicator for DomIndicator {
    fn render(&self, theme: ThemePreference) {
        let glyph = Glyph::for_theme(theme);
        self.element.set_inner_html(glyph.markup());
        for (name, value) in label_attributes(glyph) {
            if let Err(e) = self.element.set_attribute(name, value) {
                log::warn!("Failed to set {} on theme indicator: {}", name, describe_js(&e));
            }
        }
    }
}

/// Accessible text for the indicator, refreshed with every glyph swap.
pub(crate) fn label_attributes(glyph: Glyph) -> [(&'static str, &'static str); 2] {
    [("aria-label", glyph.label()), ("title", glyph.label())]
}
