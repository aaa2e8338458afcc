//! Trait definitions for the device module.

use std::sync::Arc;

use super::types::DeviceKind;

/// Answers hardware decode-support questions.
///
/// Implementations must be side-effect free; the profile compiler may ask
/// the same question again on every compilation.
pub trait CapabilityOracle: Send + Sync {
    /// Whether any HEVC decoder is present.
    fn supports_hevc(&self) -> bool;

    /// Whether an HEVC decoder handles the Main 10 profile.
    fn supports_hevc_main10(&self) -> bool;

    /// Whether an AVC decoder handles the High 10 profile.
    fn supports_avc_high10(&self) -> bool {
        false
    }
}

/// Identifies which device family the client runs on.
pub trait DeviceClassifier: Send + Sync {
    fn device_kind(&self) -> DeviceKind;
}

/// Source of user playback preferences.
pub trait PreferenceSource: Send + Sync {
    /// The user's audio downmix override. When set, alternate audio codec
    /// augmentation is skipped.
    fn downmix_disabled(&self) -> bool;
}

impl<T: CapabilityOracle + ?Sized> CapabilityOracle for &T {
    fn supports_hevc(&self) -> bool {
        (**self).supports_hevc()
    }

    fn supports_hevc_main10(&self) -> bool {
        (**self).supports_hevc_main10()
    }

    fn supports_avc_high10(&self) -> bool {
        (**self).supports_avc_high10()
    }
}

impl<T: DeviceClassifier + ?Sized> DeviceClassifier for &T {
    fn device_kind(&self) -> DeviceKind {
        (**self).device_kind()
    }
}

impl<T: CapabilityOracle + ?Sized> CapabilityOracle for Arc<T> {
    fn supports_hevc(&self) -> bool {
        (**self).supports_hevc()
    }

    fn supports_hevc_main10(&self) -> bool {
        (**self).supports_hevc_main10()
    }

    fn supports_avc_high10(&self) -> bool {
        (**self).supports_avc_high10()
    }
}

impl<T: DeviceClassifier + ?Sized> DeviceClassifier for Arc<T> {
    fn device_kind(&self) -> DeviceKind {
        (**self).device_kind()
    }
}

impl<T: PreferenceSource + ?Sized> PreferenceSource for Arc<T> {
    fn downmix_disabled(&self) -> bool {
        (**self).downmix_disabled()
    }
}

impl PreferenceSource for bool {
    fn downmix_disabled(&self) -> bool {
        *self
    }
}
