//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the device traits so profile
//! compilation can be exercised without real hardware.
//!
//! # Example
//!
//! ```rust,ignore
//! use playcaps_core::testing::{MockCapabilityOracle, MockDeviceClassifier};
//!
//! let oracle = MockCapabilityOracle::with_hevc(true, false);
//! let classifier = MockDeviceClassifier::new(DeviceKind::Generic);
//!
//! let compiler = ProfileCompiler::new(oracle.clone(), classifier.clone());
//! let profile = compiler.compile(&CompileRequest::default())?;
//!
//! assert_eq!(classifier.call_count(), 1);
//! ```

mod mock_device;
mod mock_oracle;

pub use mock_device::{MockDeviceClassifier, MockPreferences};
pub use mock_oracle::{MockCapabilityOracle, QueryCounts};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::device::{CodecCapabilities, CodecInfo, ProfileLevel};
    use crate::profile::{DlnaProfileType, TranscodingProfile};

    /// Create a decoder declaring `levels` as (profile, level) pairs for `mime`.
    pub fn decoder(name: &str, mime: &str, levels: &[(u32, u32)]) -> CodecInfo {
        CodecInfo {
            name: name.to_string(),
            is_encoder: false,
            capabilities: vec![CodecCapabilities {
                mime: mime.to_string(),
                profile_levels: levels
                    .iter()
                    .map(|&(profile, level)| ProfileLevel { profile, level })
                    .collect(),
            }],
        }
    }

    /// Create an encoder entry; encoders never count as decode support.
    pub fn encoder(name: &str, mime: &str, levels: &[(u32, u32)]) -> CodecInfo {
        CodecInfo {
            is_encoder: true,
            ..decoder(name, mime, levels)
        }
    }

    /// Create a video transcoding profile with the given audio codecs.
    pub fn video_transcoding(container: &str, audio_codecs: &[&str]) -> TranscodingProfile {
        TranscodingProfile::new(
            container,
            DlnaProfileType::Video,
            "h264",
            audio_codecs.iter().map(|c| c.to_string()).collect(),
        )
    }
}
