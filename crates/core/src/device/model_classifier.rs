//! Device classification from the reported hardware model.

use super::traits::DeviceClassifier;
use super::types::DeviceKind;

/// Model reported by the Fire TV Stick 4K.
pub const FIRE_TV_STICK_4K_MODEL: &str = "AFTMM";

/// Prefix shared by every Amazon Fire TV model.
pub const FIRE_TV_MODEL_PREFIX: &str = "AFT";

/// A [`DeviceClassifier`] keyed on the device model string.
#[derive(Debug, Clone, Default)]
pub struct ModelNameClassifier {
    model: String,
}

impl ModelNameClassifier {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl DeviceClassifier for ModelNameClassifier {
    fn device_kind(&self) -> DeviceKind {
        let model = self.model.trim();
        if model == FIRE_TV_STICK_4K_MODEL {
            DeviceKind::FireTvStick4k
        } else if model.starts_with(FIRE_TV_MODEL_PREFIX) {
            DeviceKind::FireTv
        } else {
            DeviceKind::Generic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_fire_tv_models() {
        assert_eq!(
            ModelNameClassifier::new("AFTMM").device_kind(),
            DeviceKind::FireTvStick4k
        );
        assert_eq!(
            ModelNameClassifier::new("AFTT").device_kind(),
            DeviceKind::FireTv
        );
        assert_eq!(
            ModelNameClassifier::new("AFTKA").device_kind(),
            DeviceKind::FireTv
        );
    }

    #[test]
    fn test_other_models_are_generic() {
        assert_eq!(
            ModelNameClassifier::new("SHIELD Android TV").device_kind(),
            DeviceKind::Generic
        );
        assert_eq!(ModelNameClassifier::default().device_kind(), DeviceKind::Generic);
        // Prefix match is case-sensitive like the platform model string.
        assert_eq!(
            ModelNameClassifier::new("aftmm").device_kind(),
            DeviceKind::Generic
        );
    }
}
