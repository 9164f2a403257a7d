pub mod mocks;

use crate::controller::ThemeController;
use crate::store::MemoryStore;
use mocks::{RecordingAdapter, RecordingIndicator};

pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A controller plus handles on the collaborators it writes to.
pub struct Harness {
    pub controller: ThemeController,
    pub store: MemoryStore,
    pub indicator: RecordingIndicator,
    pub adapter: RecordingAdapter,
}

pub fn harness(store: MemoryStore) -> Harness {
    setup();
    let indicator = RecordingIndicator::default();
    let adapter = RecordingAdapter::default();
    let controller = ThemeController::new(
        Box::new(store.clone()),
        Box::new(indicator.clone()),
        Some(Box::new(adapter.clone()))
    );
    Harness { controller, store, indicator, adapter }
}
