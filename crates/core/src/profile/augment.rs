//! Post-compilation patches to a device profile.
//!
//! An alternate audio codec (typically AC3) is offered on the transcoding
//! target so the server can keep surround audio instead of downmixing it.
//! Patches never create transcoding profiles; they only extend one the
//! profile already has.

use serde::Serialize;
use tracing::{debug, info};

use super::error::{validate_identifier, ProfileError};
use super::types::{DeviceProfile, CODEC_AC3, CONTAINER_MKV};
use crate::metrics;

/// Result of an augmentation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AugmentOutcome {
    /// The user's downmix override disabled augmentation.
    Skipped,
    /// The profile has no transcoding entry for the target container.
    TargetMissing,
    /// The codec was inserted at `position` in the target's audio codec list.
    Inserted { position: usize },
}

impl AugmentOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::TargetMissing => "target_missing",
            Self::Inserted { .. } => "inserted",
        }
    }
}

/// Adds `codec` to the audio codecs of the profile's MKV transcoding entry.
///
/// With `preferred` the codec goes first, otherwise last; the rest of the
/// list keeps its order. The list is not deduplicated: calling this twice
/// inserts `codec` twice.
pub fn add_alternate_audio_codec(
    profile: &mut DeviceProfile,
    codec: &str,
    preferred: bool,
    downmix_disabled: bool,
) -> Result<AugmentOutcome, ProfileError> {
    validate_identifier("codec", codec)?;
    Ok(insert_audio_codec(profile, codec, preferred, downmix_disabled))
}

/// Offers AC3 as a transcoded audio codec.
pub fn add_ac3_streaming(
    profile: &mut DeviceProfile,
    preferred: bool,
    downmix_disabled: bool,
) -> AugmentOutcome {
    insert_audio_codec(profile, CODEC_AC3, preferred, downmix_disabled)
}

fn insert_audio_codec(
    profile: &mut DeviceProfile,
    codec: &str,
    preferred: bool,
    downmix_disabled: bool,
) -> AugmentOutcome {
    let outcome = if downmix_disabled {
        debug!(codec, "Downmix override set, not adding alternate audio codec");
        AugmentOutcome::Skipped
    } else {
        match profile.transcoding_profile_mut(CONTAINER_MKV) {
            None => {
                debug!(
                    codec,
                    container = CONTAINER_MKV,
                    "No transcoding profile to augment"
                );
                AugmentOutcome::TargetMissing
            }
            Some(target) => {
                let position = if preferred {
                    target.audio_codec.insert(0, codec.to_string());
                    0
                } else {
                    target.audio_codec.push(codec.to_string());
                    target.audio_codec.len() - 1
                };
                info!(codec, preferred, "Added alternate transcoded audio codec");
                AugmentOutcome::Inserted { position }
            }
        }
    };

    metrics::AUGMENTATIONS
        .with_label_values(&[codec_label(codec), outcome.as_str()])
        .inc();

    outcome
}

/// Metric label for `codec`; anything but AC3 is folded into "other".
fn codec_label(codec: &str) -> &'static str {
    if codec.eq_ignore_ascii_case(CODEC_AC3) {
        CODEC_AC3
    } else {
        "other"
    }
}
