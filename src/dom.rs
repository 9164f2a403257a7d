//! Binding for server-rendered pages that already contain the switcher
//! button and load this crate as a plain wasm module.

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};
use crate::configs::ThemeConfig;
use crate::controller::ThemeController;
use crate::error::{describe_js, ThemeError};
use crate::host;
use crate::indicator::DomIndicator;
use crate::store::LocalStore;

/// Wires the controller to the indicator element found in `document`.
///
/// A missing indicator is fatal: no listener is bound and the error is
/// returned to the caller.
pub fn mount(document: &Document, config: &ThemeConfig) -> Result<Rc<ThemeController>, ThemeError> {
    let element = locate_indicator(&config.indicator_id, |id| document.get_element_by_id(id))?;

    let store = LocalStore::from_window()?;
    let controller = Rc::new(
        ThemeController::new(
            Box::new(store),
            Box::new(DomIndicator::new(element.clone())),
            host::platform_adapter(config)
        ).with_storage_key(config.storage_key.clone())
    );
    controller.initialize()?;

    let on_click = {
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            if let Err(e) = controller.toggle() {
                log::error!("Theme toggle failed: {}", e);
            }
        })
    };
    element
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| ThemeError::Dom(describe_js(&e)))?;
    // The listener lives as long as the page.
    on_click.forget();

    log::info!("Theme switcher bound to #{}", config.indicator_id);
    Ok(controller)
}

/// Finds the indicator with `find`, turning its absence into the fatal error.
pub(crate) fn locate_indicator<T, F>(id: &str, find: F) -> Result<T, ThemeError>
where
    F: FnOnce(&str) -> Option<T>,
{
    find(id).ok_or_else(|| ThemeError::MissingIndicator(id.to_string()))
}

/// `document.readyState` is `"loading"` until the markup has been parsed.
pub(crate) fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

#[wasm_bindgen(js_name = startThemeSwitcher)]
pub fn start_theme_switcher() -> Result<(), JsValue> {
    let _ = console_log::init_with_level(log::Level::Info);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ThemeError::Dom("No document available".to_string()))?;
    let config = ThemeConfig::default();

    if is_parsed(&document.ready_state()) {
        mount(&document, &config)?;
        return Ok(());
    }

    let target = document.clone();
    let on_ready = Closure::once_into_js(move |_event: Event| {
        if let Err(e) = mount(&target, &config) {
            wasm_bindgen::throw_str(&e.to_string());
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .map_err(|e| ThemeError::Dom(describe_js(&e)))?;
    Ok(())
}
