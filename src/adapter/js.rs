use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use crate::error::{describe_js, ThemeError};
use crate::utils::ThemePreference;
use super::SettingsAdapter;

/// A global options object plus the constructor that consumes it,
/// e.g. `dezSettingsOptions` and `dezSettings`.
#[derive(Debug)]
pub struct JsSettingsAdapter {
    options: Object,
    constructor: Function,
}

impl JsSettingsAdapter {
    /// Looks both globals up once. Returns `None` when the page does not ship the library.
    pub fn detect(options_global: &str, constructor_global: &str) -> Option<Self> {
        let global = js_sys::global();

        let options = lookup(&global, options_global)?.dyn_into::<Object>().ok()?;
        let constructor = match lookup(&global, constructor_global)
            .and_then(|value| value.dyn_into::<Function>().ok())
        {
            Some(constructor) => constructor,
            None => {
                log::warn!(
                    "{} is defined but {} is not a constructor, skipping settings adapter",
                    options_global,
                    constructor_global
                );
                return None;
            }
        };

        log::debug!("Detected settings adapter {}", constructor_global);
        Some(Self { options, constructor })
    }
}

fn lookup(global: &Object, name: &str) -> Option<JsValue> {
    Reflect::get(global, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

impl SettingsAdapter for JsSettingsAdapter {
    fn reinitialize(&self, theme: ThemePreference) -> Result<(), ThemeError> {
        Reflect::set(&self.options, &JsValue::from_str("version"), &JsValue::from_str(theme.as_str()))
            .map_err(|e| ThemeError::Adapter(describe_js(&e)))?;
        Reflect::construct(&self.constructor, &Array::of1(&self.options))
            .map_err(|e| ThemeError::Adapter(describe_js(&e)))?;
        Ok(())
    }
}
