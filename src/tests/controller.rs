#[cfg(test)]
mod tests {
    use crate::controller::ThemeController;
    use crate::error::ThemeError;
    use crate::store::{MemoryStore, PreferenceStore};
    use crate::tests::common::{harness, setup};
    use crate::tests::common::mocks::{ReadOnlyStore, RecordingAdapter, RecordingIndicator};
    use crate::utils::{Glyph, ThemePreference};

    fn persisted(store: &MemoryStore) -> Option<String> {
        store.get("theme").unwrap()
    }

    #[test]
    fn test_initialize_empty_store_defaults_to_light() {
        let h = harness(MemoryStore::new());

        let theme = h.controller.initialize().unwrap();

        assert_eq!(theme, ThemePreference::Light);
        assert_eq!(persisted(&h.store).as_deref(), Some("light"));
        assert_eq!(h.indicator.glyph(), Some(Glyph::Moon));
    }

    #[test]
    fn test_initialize_keeps_stored_dark() {
        let h = harness(MemoryStore::with_entry("theme", "dark"));

        let theme = h.controller.initialize().unwrap();

        assert_eq!(theme, ThemePreference::Dark);
        assert_eq!(persisted(&h.store).as_deref(), Some("dark"));
        assert_eq!(h.indicator.glyph(), Some(Glyph::Sun));
    }

    #[test]
    fn test_initialize_invalid_value_resolves_to_light() {
        let h = harness(MemoryStore::with_entry("theme", "blue"));

        let theme = h.controller.initialize().unwrap();

        assert_eq!(theme, ThemePreference::Light);
        assert_eq!(persisted(&h.store).as_deref(), Some("light"));
        assert_eq!(h.indicator.glyph(), Some(Glyph::Moon));
    }

    #[test]
    fn test_apply_persists_and_renders_opposite_glyph() {
        let h = harness(MemoryStore::new());

        h.controller.apply(ThemePreference::Dark).unwrap();
        assert_eq!(persisted(&h.store).as_deref(), Some("dark"));
        assert_eq!(h.indicator.glyph(), Some(Glyph::Sun));

        h.controller.apply(ThemePreference::Light).unwrap();
        assert_eq!(persisted(&h.store).as_deref(), Some("light"));
        assert_eq!(h.indicator.glyph(), Some(Glyph::Moon));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let h = harness(MemoryStore::new());

        h.controller.apply(ThemePreference::Dark).unwrap();
        let once = (persisted(&h.store), h.indicator.glyph());
        h.controller.apply(ThemePreference::Dark).unwrap();

        assert_eq!((persisted(&h.store), h.indicator.glyph()), once);
    }

    #[test]
    fn test_click_sequence_from_empty_store() {
        let h = harness(MemoryStore::new());
        h.controller.initialize().unwrap();

        assert_eq!(h.controller.toggle().unwrap(), ThemePreference::Dark);
        assert_eq!(persisted(&h.store).as_deref(), Some("dark"));
        assert_eq!(h.indicator.glyph(), Some(Glyph::Sun));

        assert_eq!(h.controller.toggle().unwrap(), ThemePreference::Light);
        assert_eq!(persisted(&h.store).as_deref(), Some("light"));
        assert_eq!(h.indicator.glyph(), Some(Glyph::Moon));
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        for start in ["light", "dark"] {
            let h = harness(MemoryStore::with_entry("theme", start));
            h.controller.toggle().unwrap();
            h.controller.toggle().unwrap();
            assert_eq!(persisted(&h.store).as_deref(), Some(start));
        }
    }

    #[test]
    fn test_toggle_without_initialize_treats_unset_as_light() {
        let h = harness(MemoryStore::new());

        assert_eq!(h.controller.toggle().unwrap(), ThemePreference::Dark);
        assert_eq!(persisted(&h.store).as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_rereads_externally_modified_store() {
        let h = harness(MemoryStore::new());
        h.controller.initialize().unwrap();

        // Another script on the page switches to dark behind our back.
        h.store.set("theme", "dark").unwrap();

        assert_eq!(h.controller.toggle().unwrap(), ThemePreference::Light);
        assert_eq!(persisted(&h.store).as_deref(), Some("light"));
        assert_eq!(h.indicator.glyph(), Some(Glyph::Moon));
    }

    #[test]
    fn test_toggle_after_store_cleared() {
        let h = harness(MemoryStore::with_entry("theme", "dark"));
        h.controller.initialize().unwrap();

        h.store.clear();

        assert_eq!(h.controller.toggle().unwrap(), ThemePreference::Dark);
    }

    #[test]
    fn test_adapter_receives_every_applied_version() {
        let h = harness(MemoryStore::new());

        h.controller.initialize().unwrap();
        h.controller.toggle().unwrap();
        h.controller.toggle().unwrap();

        assert_eq!(
            h.adapter.versions(),
            vec![ThemePreference::Light, ThemePreference::Dark, ThemePreference::Light]
        );
        assert_eq!(h.indicator.renders(), h.adapter.versions());
    }

    #[test]
    fn test_missing_adapter_is_not_an_error() {
        setup();
        let store = MemoryStore::new();
        let indicator = RecordingIndicator::default();
        let controller = ThemeController::new(Box::new(store.clone()), Box::new(indicator.clone()), None);

        controller.initialize().unwrap();
        controller.toggle().unwrap();

        assert_eq!(persisted(&store).as_deref(), Some("dark"));
        assert_eq!(indicator.glyph(), Some(Glyph::Sun));
    }

    #[test]
    fn test_failing_adapter_does_not_block_render_or_persist() {
        setup();
        let store = MemoryStore::new();
        let indicator = RecordingIndicator::default();
        let adapter = RecordingAdapter::failing();
        let controller = ThemeController::new(
            Box::new(store.clone()),
            Box::new(indicator.clone()),
            Some(Box::new(adapter.clone()))
        );

        controller.apply(ThemePreference::Dark).unwrap();

        assert_eq!(adapter.versions(), vec![ThemePreference::Dark]);
        assert_eq!(indicator.glyph(), Some(Glyph::Sun));
        assert_eq!(persisted(&store).as_deref(), Some("dark"));
    }

    #[test]
    fn test_storage_write_failure_is_reported() {
        setup();
        let controller = ThemeController::new(
            Box::new(ReadOnlyStore),
            Box::new(RecordingIndicator::default()),
            None
        );

        let err = controller.apply(ThemePreference::Dark).unwrap_err();

        assert!(matches!(err, ThemeError::Storage(_)));
    }

    #[test]
    fn test_custom_storage_key() {
        setup();
        let store = MemoryStore::with_entry("site-theme", "dark");
        let controller = ThemeController::new(
            Box::new(store.clone()),
            Box::new(RecordingIndicator::default()),
            None
        ).with_storage_key("site-theme");

        assert_eq!(controller.storage_key(), "site-theme");
        assert_eq!(controller.toggle().unwrap(), ThemePreference::Light);
        assert_eq!(store.get("site-theme").unwrap().as_deref(), Some("light"));
        assert_eq!(store.get("theme").unwrap(), None);
    }
}
