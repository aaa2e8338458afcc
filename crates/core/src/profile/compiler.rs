//! Device profile compilation.

use serde::Serialize;
use tracing::info;

use super::conditions::{
    channel_ceiling_codec_profile, hevc_condition, level_condition, profile_set_condition,
    H264_PROFILES,
};
use super::error::{validate_identifier, ProfileError};
use super::tier::{classify_hevc_support, classify_level_ceiling, H264Level, SupportTier};
use super::types::{
    CodecProfile, CodecType, DeviceProfile, DirectPlayProfile, DlnaProfileType,
    SubtitleDeliveryMethod, SubtitleProfile, TranscodingProfile, CODEC_H264, CODEC_HEVC,
};
use crate::device::{CapabilityOracle, DeviceClassifier, DeviceKind};
use crate::metrics;

/// Image containers every client can display without conversion.
pub const PHOTO_CONTAINERS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Caller-supplied parts of a device profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileRequest {
    /// One audio direct-play profile is emitted per group.
    pub audio_containers: Vec<Vec<String>>,
    /// Audio channel ceiling applied to every codec.
    pub max_audio_channels: Option<u32>,
    pub subtitle_profiles: Vec<SubtitleProfile>,
    pub transcoding_profiles: Vec<TranscodingProfile>,
}

/// Capability facts resolved during one compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapabilitySummary {
    pub device_kind: DeviceKind,
    pub hevc: SupportTier,
    pub h264_level_ceiling: H264Level,
    pub avc_high10: bool,
}

pub fn photo_direct_play_profile() -> DirectPlayProfile {
    DirectPlayProfile {
        media_type: DlnaProfileType::Photo,
        container: PHOTO_CONTAINERS.iter().map(|c| c.to_string()).collect(),
    }
}

/// An audio direct-play profile listing exactly `containers`, in order.
pub fn audio_direct_play_profile<S: AsRef<str>>(
    containers: &[S],
) -> Result<DirectPlayProfile, ProfileError> {
    if containers.is_empty() {
        return Err(ProfileError::invalid_argument(
            "audio_containers",
            "a container group must list at least one container",
        ));
    }

    let mut container = Vec::with_capacity(containers.len());
    for c in containers {
        validate_identifier("container", c.as_ref())?;
        container.push(c.as_ref().to_string());
    }

    Ok(DirectPlayProfile {
        media_type: DlnaProfileType::Audio,
        container,
    })
}

pub fn subtitle_profile(
    format: &str,
    method: SubtitleDeliveryMethod,
) -> Result<SubtitleProfile, ProfileError> {
    validate_identifier("subtitle format", format)?;
    Ok(SubtitleProfile {
        format: format.to_string(),
        method,
    })
}

/// Builds device profiles from live capability answers.
///
/// Every call to [`compile`](Self::compile) re-queries the oracle and the
/// classifier; nothing derived from them is cached.
pub struct ProfileCompiler<O, D> {
    oracle: O,
    classifier: D,
}

impl<O: CapabilityOracle, D: DeviceClassifier> ProfileCompiler<O, D> {
    pub fn new(oracle: O, classifier: D) -> Self {
        Self { oracle, classifier }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn classifier(&self) -> &D {
        &self.classifier
    }

    /// Resolves the capability facts a compilation is based on.
    pub fn summarize(&self) -> CapabilitySummary {
        let device_kind = self.classifier.device_kind();
        CapabilitySummary {
            device_kind,
            hevc: classify_hevc_support(&self.oracle),
            h264_level_ceiling: classify_level_ceiling(device_kind),
            avc_high10: self.oracle.supports_avc_high10(),
        }
    }

    /// Compiles a new device profile.
    pub fn compile(&self, request: &CompileRequest) -> Result<DeviceProfile, ProfileError> {
        for profile in &request.transcoding_profiles {
            validate_identifier("transcoding container", &profile.container)?;
        }

        let mut direct_play_profiles = Vec::with_capacity(request.audio_containers.len() + 1);
        direct_play_profiles.push(photo_direct_play_profile());
        for group in &request.audio_containers {
            direct_play_profiles.push(audio_direct_play_profile(group)?);
        }

        let channel_ceiling = request
            .max_audio_channels
            .map(channel_ceiling_codec_profile)
            .transpose()?;

        let summary = self.summarize();

        let mut codec_profiles = vec![
            CodecProfile {
                codec_type: CodecType::Video,
                codec: CODEC_HEVC.to_string(),
                conditions: vec![hevc_condition(summary.hevc)],
            },
            CodecProfile {
                codec_type: CodecType::Video,
                codec: CODEC_H264.to_string(),
                conditions: vec![
                    profile_set_condition(H264_PROFILES)?,
                    level_condition(summary.h264_level_ceiling),
                ],
            },
        ];
        codec_profiles.extend(channel_ceiling);

        metrics::PROFILES_COMPILED
            .with_label_values(&[summary.hevc.as_str(), summary.device_kind.as_str()])
            .inc();

        info!(
            device = summary.device_kind.as_str(),
            hevc = summary.hevc.as_str(),
            h264_level = summary.h264_level_ceiling.as_str(),
            direct_play = direct_play_profiles.len(),
            "Compiled device profile"
        );

        Ok(DeviceProfile {
            direct_play_profiles,
            codec_profiles,
            subtitle_profiles: request.subtitle_profiles.clone(),
            transcoding_profiles: request.transcoding_profiles.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::types::{ConditionKind, ConditionProperty};

    struct Caps {
        hevc: bool,
        main10: bool,
        high10: bool,
    }

    impl CapabilityOracle for Caps {
        fn supports_hevc(&self) -> bool {
            self.hevc
        }

        fn supports_hevc_main10(&self) -> bool {
            self.main10
        }

        fn supports_avc_high10(&self) -> bool {
            self.high10
        }
    }

    struct Kind(DeviceKind);

    impl DeviceClassifier for Kind {
        fn device_kind(&self) -> DeviceKind {
            self.0
        }
    }

    fn compiler(hevc: bool, main10: bool, kind: DeviceKind) -> ProfileCompiler<Caps, Kind> {
        ProfileCompiler::new(
            Caps {
                hevc,
                main10,
                high10: false,
            },
            Kind(kind),
        )
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_photo_profile() {
        let profile = compiler(true, true, DeviceKind::Generic)
            .compile(&CompileRequest::default())
            .unwrap();
        let photos = profile.direct_play_for(DlnaProfileType::Photo);
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].container, strings(PHOTO_CONTAINERS));
    }

    #[test]
    fn test_audio_groups_become_separate_profiles() {
        let request = CompileRequest {
            audio_containers: vec![strings(&["mp3", "aac"]), strings(&["flac"])],
            ..Default::default()
        };
        let profile = compiler(false, false, DeviceKind::Generic)
            .compile(&request)
            .unwrap();
        let audio = profile.direct_play_for(DlnaProfileType::Audio);
        assert_eq!(audio.len(), 2);
        assert_eq!(audio[0].container, strings(&["mp3", "aac"]));
        assert_eq!(audio[1].container, strings(&["flac"]));
    }

    #[test]
    fn test_empty_audio_group_is_rejected() {
        let request = CompileRequest {
            audio_containers: vec![vec![]],
            ..Default::default()
        };
        let err = compiler(true, true, DeviceKind::Generic)
            .compile(&request)
            .unwrap_err();
        assert!(matches!(
            err,
            ProfileError::InvalidArgument {
                field: "audio_containers",
                ..
            }
        ));
    }

    #[test]
    fn test_hevc_and_h264_entries_are_independent() {
        let profile = compiler(true, false, DeviceKind::FireTv)
            .compile(&CompileRequest::default())
            .unwrap();

        let hevc = profile.codec_profile(CodecType::Video, CODEC_HEVC).unwrap();
        assert_eq!(hevc.conditions.len(), 1);
        assert_eq!(hevc.conditions[0].value(), "Main 10");

        let h264 = profile.codec_profile(CodecType::Video, CODEC_H264).unwrap();
        assert_eq!(h264.conditions.len(), 2);
        assert_eq!(h264.conditions[0].condition(), ConditionKind::EqualsAny);
        assert_eq!(h264.conditions[1].property(), ConditionProperty::VideoLevel);
        assert_eq!(h264.conditions[1].value(), "41");
    }

    #[test]
    fn test_h264_profile_set_ignores_avc_high10() {
        let compiler = ProfileCompiler::new(
            Caps {
                hevc: false,
                main10: false,
                high10: true,
            },
            Kind(DeviceKind::Generic),
        );
        assert!(compiler.summarize().avc_high10);

        let profile = compiler.compile(&CompileRequest::default()).unwrap();
        let h264 = profile.codec_profile(CodecType::Video, CODEC_H264).unwrap();
        assert_eq!(
            h264.conditions[0].value(),
            "high|main|baseline|constrained baseline"
        );
    }

    #[test]
    fn test_invalid_transcoding_container_is_rejected() {
        let request = CompileRequest {
            transcoding_profiles: vec![TranscodingProfile::new(
                "mkv,ts",
                DlnaProfileType::Video,
                "h264",
                strings(&["aac"]),
            )],
            ..Default::default()
        };
        let err = compiler(true, true, DeviceKind::Generic)
            .compile(&request)
            .unwrap_err();
        assert!(matches!(
            err,
            ProfileError::InvalidArgument {
                field: "transcoding container",
                ..
            }
        ));
    }

    #[test]
    fn test_channel_ceiling_is_optional() {
        let c = compiler(true, true, DeviceKind::Generic);
        let without = c.compile(&CompileRequest::default()).unwrap();
        assert!(without.codec_profile(CodecType::VideoAudio, "").is_none());

        let with = c
            .compile(&CompileRequest {
                max_audio_channels: Some(2),
                ..Default::default()
            })
            .unwrap();
        let channels = with.codec_profile(CodecType::VideoAudio, "").unwrap();
        assert_eq!(channels.conditions[0].value(), "2");
    }

    #[test]
    fn test_subtitles_and_transcoding_are_carried_over() {
        let request = CompileRequest {
            subtitle_profiles: vec![
                subtitle_profile("srt", SubtitleDeliveryMethod::External).unwrap(),
                subtitle_profile("pgssub", SubtitleDeliveryMethod::Encode).unwrap(),
            ],
            transcoding_profiles: vec![TranscodingProfile::new(
                "mkv",
                DlnaProfileType::Video,
                "h264",
                strings(&["aac"]),
            )],
            ..Default::default()
        };
        let profile = compiler(true, true, DeviceKind::Generic)
            .compile(&request)
            .unwrap();
        assert_eq!(profile.subtitle_profiles, request.subtitle_profiles);
        assert_eq!(profile.transcoding_profiles, request.transcoding_profiles);
    }

    #[test]
    fn test_subtitle_profile_rejects_empty_format() {
        assert!(subtitle_profile("", SubtitleDeliveryMethod::Embed).is_err());
    }

    #[test]
    fn test_summary() {
        let summary = compiler(true, true, DeviceKind::FireTvStick4k).summarize();
        assert_eq!(summary.device_kind, DeviceKind::FireTvStick4k);
        assert_eq!(summary.hevc, SupportTier::FullSupport);
        assert_eq!(summary.h264_level_ceiling, H264Level::Level5_2);
        assert!(!summary.avc_high10);
    }
}
