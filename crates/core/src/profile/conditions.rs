//! Condition constructors.
//!
//! The negotiation layer has no "always" or "never" condition kind. Total
//! exclusion and inclusion are expressed as equality tests against
//! [`IMPOSSIBLE_VALUE`], a value no real stream ever reports: `Equals` against
//! it never matches and `NotEquals` against it always matches.

use super::error::ProfileError;
use super::tier::{H264Level, SupportTier};
use super::types::{CodecProfile, CodecType, ConditionKind, ConditionProperty, ProfileCondition};

/// Property value that never occurs on a real stream.
pub const IMPOSSIBLE_VALUE: &str = "none";

/// HEVC profile excluded for devices without 10-bit decode.
pub const HEVC_MAIN10_PROFILE: &str = "Main 10";

/// H.264 profiles every decoder is expected to handle, in preference order.
pub const H264_PROFILES: &[&str] = &["high", "main", "baseline", "constrained baseline"];

/// A condition no real stream satisfies.
pub fn exclude_all(property: ConditionProperty) -> ProfileCondition {
    ProfileCondition::new(ConditionKind::Equals, property, IMPOSSIBLE_VALUE)
}

/// A condition every real stream satisfies.
pub fn include_all(property: ConditionProperty) -> ProfileCondition {
    ProfileCondition::new(ConditionKind::NotEquals, property, IMPOSSIBLE_VALUE)
}

pub fn hevc_condition(tier: SupportTier) -> ProfileCondition {
    match tier {
        SupportTier::Unsupported => exclude_all(ConditionProperty::VideoProfile),
        SupportTier::PartialSupport => ProfileCondition::new(
            ConditionKind::NotEquals,
            ConditionProperty::VideoProfile,
            HEVC_MAIN10_PROFILE,
        ),
        SupportTier::FullSupport => include_all(ConditionProperty::VideoProfile),
    }
}

pub fn level_condition(ceiling: H264Level) -> ProfileCondition {
    ProfileCondition::new(
        ConditionKind::LessThanEqual,
        ConditionProperty::VideoLevel,
        ceiling.as_str(),
    )
}

/// Restricts the video profile to one of `profiles`.
pub fn profile_set_condition<S: AsRef<str>>(
    profiles: &[S],
) -> Result<ProfileCondition, ProfileError> {
    if profiles.is_empty() {
        return Err(ProfileError::invalid_argument(
            "profiles",
            "at least one profile is required",
        ));
    }

    let mut joined = Vec::with_capacity(profiles.len());
    for profile in profiles {
        let profile = profile.as_ref();
        if profile.trim().is_empty() || profile.contains('|') {
            return Err(ProfileError::invalid_argument(
                "profiles",
                format!("'{}' is not a valid profile name", profile),
            ));
        }
        joined.push(profile);
    }

    Ok(ProfileCondition::new(
        ConditionKind::EqualsAny,
        ConditionProperty::VideoProfile,
        joined.join("|"),
    ))
}

pub fn channel_ceiling_condition(max_channels: u32) -> Result<ProfileCondition, ProfileError> {
    if max_channels == 0 {
        return Err(ProfileError::invalid_argument(
            "max_audio_channels",
            "must be at least 1",
        ));
    }

    Ok(ProfileCondition::new(
        ConditionKind::LessThanEqual,
        ConditionProperty::AudioChannels,
        max_channels.to_string(),
    ))
}

/// Caps audio channels for every codec, whether audio rides in a video
/// stream or stands alone.
pub fn channel_ceiling_codec_profile(max_channels: u32) -> Result<CodecProfile, ProfileError> {
    Ok(CodecProfile {
        codec_type: CodecType::VideoAudio,
        codec: String::new(),
        conditions: vec![channel_ceiling_condition(max_channels)?],
    })
}
