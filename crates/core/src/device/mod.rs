//! Device facts consumed by profile compilation.
//!
//! This module defines the seams through which the profile engine learns
//! about the playback device:
//!
//! - [`CapabilityOracle`]: hardware decode support
//! - [`DeviceClassifier`]: device family
//! - [`PreferenceSource`]: user playback preferences
//!
//! It also ships data-driven implementations of the first two:
//! [`DecoderCatalog`] answers from a declared codec list and
//! [`ModelNameClassifier`] classifies by hardware model string.

mod decoder_catalog;
mod model_classifier;
mod traits;
mod types;

pub use decoder_catalog::{
    DecoderCatalog, AVC_LEVEL_4, AVC_PROFILE_HIGH10, H263_LEVEL_10, H263_LEVEL_45,
    HEVC_MAIN_TIER_LEVEL_5, HEVC_PROFILE_MAIN, HEVC_PROFILE_MAIN10, MIME_VIDEO_AVC,
    MIME_VIDEO_H263, MIME_VIDEO_HEVC,
};
pub use model_classifier::{ModelNameClassifier, FIRE_TV_MODEL_PREFIX, FIRE_TV_STICK_4K_MODEL};
pub use traits::{CapabilityOracle, DeviceClassifier, PreferenceSource};
pub use types::{CodecCapabilities, CodecInfo, DeviceKind, ProfileLevel};
