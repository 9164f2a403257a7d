use std::rc::Rc;
use dioxus::prelude::*;
use crate::configs::ThemeConfig;
use crate::controller::ThemeController;
use crate::host;
use crate::indicator::SignalIndicator;
use crate::utils::{Glyph, ThemePreference};

/// Builds the controller for this app and shares it, together with the
/// applied theme, through context. Call once from the root component.
pub fn use_theme_provider(config: ThemeConfig) -> Signal<ThemePreference> {
    let theme = use_signal(ThemePreference::default);
    use_context_provider(|| theme);

    let controller = use_context_provider(|| {
        Rc::new(
            ThemeController::new(
                host::platform_store(&config),
                Box::new(SignalIndicator::new(theme)),
                host::platform_adapter(&config)
            ).with_storage_key(config.storage_key.clone())
        )
    });
    use_context_provider(|| config);

    use_effect(move || {
        if let Err(e) = controller.initialize() {
            log::error!("Failed to initialize theme: {}", e);
        }
    });

    theme
}

#[component]
pub fn ThemeSwitcher() -> Element {
    let theme = use_context::<Signal<ThemePreference>>();
    let controller = use_context::<Rc<ThemeController>>();
    let config = use_context::<ThemeConfig>();
    let glyph = Glyph::for_theme(theme());

    rsx! {
        button {
            id: config.indicator_id.clone(),
            class: if theme().is_dark() {
                "p-2 rounded-lg bg-gray-700 hover:bg-gray-600 transition-colors"
            } else {
                "p-2 rounded-lg bg-gray-200 hover:bg-gray-300 transition-colors"
            },
            title: glyph.label(),
            "aria-label": glyph.label(),
            dangerous_inner_html: glyph.markup(),
            onclick: move |_| {
                if let Err(e) = controller.toggle() {
                    log::error!("Theme toggle failed: {}", e);
                }
            },
        }
    }
}
