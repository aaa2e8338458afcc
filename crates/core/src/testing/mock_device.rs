//! Mock device classifier and preference source for testing.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::device::{DeviceClassifier, DeviceKind, PreferenceSource};

/// Mock implementation of the DeviceClassifier trait.
///
/// Reports a configurable [`DeviceKind`] and counts classification calls.
#[derive(Debug, Clone, Default)]
pub struct MockDeviceClassifier {
    kind: Arc<RwLock<DeviceKind>>,
    calls: Arc<AtomicUsize>,
}

impl MockDeviceClassifier {
    pub fn new(kind: DeviceKind) -> Self {
        Self {
            kind: Arc::new(RwLock::new(kind)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set_kind(&self, kind: DeviceKind) {
        *self.kind.write().unwrap() = kind;
    }

    /// Get the number of classification calls.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DeviceClassifier for MockDeviceClassifier {
    fn device_kind(&self) -> DeviceKind {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.kind.read().unwrap()
    }
}

/// Mock implementation of the PreferenceSource trait.
#[derive(Debug, Clone, Default)]
pub struct MockPreferences {
    downmix_disabled: Arc<AtomicBool>,
}

impl MockPreferences {
    pub fn new(downmix_disabled: bool) -> Self {
        Self {
            downmix_disabled: Arc::new(AtomicBool::new(downmix_disabled)),
        }
    }

    pub fn set_downmix_disabled(&self, value: bool) {
        self.downmix_disabled.store(value, Ordering::SeqCst);
    }
}

impl PreferenceSource for MockPreferences {
    fn downmix_disabled(&self) -> bool {
        self.downmix_disabled.load(Ordering::SeqCst)
    }
}
