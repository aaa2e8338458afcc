//! Device capability profile compilation.
//!
//! This module turns device facts into the declarative profile a media
//! server consults when choosing between direct play and transcoding.
//!
//! # Stages
//!
//! 1. [`classify_hevc_support`] and [`classify_level_ceiling`] reduce oracle
//!    and classifier answers to a [`SupportTier`] and an [`H264Level`]
//! 2. The constructors in [`conditions`] turn those into
//!    [`ProfileCondition`]s
//! 3. [`ProfileCompiler`] assembles a fresh [`DeviceProfile`]
//! 4. [`add_alternate_audio_codec`] patches the compiled profile in place
//!
//! # Example
//!
//! ```ignore
//! use playcaps_core::device::{DecoderCatalog, ModelNameClassifier};
//! use playcaps_core::profile::{add_ac3_streaming, CompileRequest, ProfileCompiler};
//!
//! let compiler = ProfileCompiler::new(DecoderCatalog::new(codecs), ModelNameClassifier::new("AFTMM"));
//!
//! let mut profile = compiler.compile(&CompileRequest {
//!     audio_containers: vec![vec!["mp3".into(), "aac".into()]],
//!     max_audio_channels: Some(6),
//!     ..Default::default()
//! })?;
//!
//! add_ac3_streaming(&mut profile, true, preferences.downmix_disabled());
//! ```

mod augment;
mod compiler;
pub mod conditions;
mod error;
mod tier;
mod types;

pub use augment::{add_ac3_streaming, add_alternate_audio_codec, AugmentOutcome};
pub use compiler::{
    audio_direct_play_profile, photo_direct_play_profile, subtitle_profile, CapabilitySummary,
    CompileRequest, ProfileCompiler, PHOTO_CONTAINERS,
};
pub use error::{validate_identifier, ProfileError};
pub use tier::{
    classify_hevc_support, classify_level_ceiling, H264Level, SupportTier, DEFAULT_LEVEL_CEILING,
};
pub use types::{
    CodecProfile, CodecType, ConditionKind, ConditionProperty, DeviceProfile, DirectPlayProfile,
    DlnaProfileType, ProfileCondition, SubtitleDeliveryMethod, SubtitleProfile,
    TranscodingProfile, CODEC_AC3, CODEC_H264, CODEC_HEVC, CONTAINER_MKV,
};
