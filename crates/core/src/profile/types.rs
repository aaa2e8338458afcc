//! Types for the profile module.
//!
//! Field names serialize in PascalCase and identifier lists as comma-joined
//! strings, matching the shape the negotiation layer reads.

use serde::{Deserialize, Serialize};

pub const CODEC_H264: &str = "h264";
pub const CODEC_HEVC: &str = "hevc";
pub const CODEC_AC3: &str = "ac3";

pub const CONTAINER_MKV: &str = "mkv";

/// Comparison applied by a [`ProfileCondition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionKind {
    Equals,
    NotEquals,
    LessThanEqual,
    GreaterThanEqual,
    /// Matches when the actual value equals one of the `|`-separated alternatives.
    EqualsAny,
}

/// Stream property a [`ProfileCondition`] is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionProperty {
    VideoProfile,
    VideoLevel,
    AudioChannels,
}

/// Media kind a [`CodecProfile`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodecType {
    Video,
    Audio,
    /// Audio carried by a video stream as well as audio-only media.
    VideoAudio,
}

/// Media kind a [`DirectPlayProfile`] or [`TranscodingProfile`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DlnaProfileType {
    Audio,
    Video,
    Photo,
}

/// How a subtitle format reaches the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubtitleDeliveryMethod {
    /// Burned into the video by the transcoder.
    Encode,
    /// Muxed into the media container.
    Embed,
    /// Delivered as a sidecar file.
    External,
    Hls,
}

/// A declarative predicate over one stream property.
///
/// Conditions are immutable once built; use the constructors in
/// [`super::conditions`] to create them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileCondition {
    condition: ConditionKind,
    property: ConditionProperty,
    value: String,
}

impl ProfileCondition {
    pub(crate) fn new(
        condition: ConditionKind,
        property: ConditionProperty,
        value: impl Into<String>,
    ) -> Self {
        Self {
            condition,
            property,
            value: value.into(),
        }
    }

    pub fn condition(&self) -> ConditionKind {
        self.condition
    }

    pub fn property(&self) -> ConditionProperty {
        self.property
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Evaluates this condition against a stream's actual property value.
    ///
    /// String comparisons ignore ASCII case. Numeric comparisons parse both
    /// sides as decimals and fail closed when either side does not parse.
    pub fn matches(&self, actual: &str) -> bool {
        match self.condition {
            ConditionKind::Equals => actual.eq_ignore_ascii_case(&self.value),
            ConditionKind::NotEquals => !actual.eq_ignore_ascii_case(&self.value),
            ConditionKind::EqualsAny => self
                .value
                .split('|')
                .any(|candidate| candidate.eq_ignore_ascii_case(actual)),
            ConditionKind::LessThanEqual => {
                compare_numeric(actual, &self.value).is_some_and(|(a, b)| a <= b)
            }
            ConditionKind::GreaterThanEqual => {
                compare_numeric(actual, &self.value).is_some_and(|(a, b)| a >= b)
            }
        }
    }
}

fn compare_numeric(actual: &str, expected: &str) -> Option<(f64, f64)> {
    let a = actual.trim().parse::<f64>().ok()?;
    let b = expected.trim().parse::<f64>().ok()?;
    Some((a, b))
}

/// Conditions scoped to one codec (or every codec, when `codec` is empty).
///
/// All conditions must hold for a stream to be compatible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodecProfile {
    #[serde(rename = "Type")]
    pub codec_type: CodecType,
    #[serde(default)]
    pub codec: String,
    pub conditions: Vec<ProfileCondition>,
}

impl CodecProfile {
    pub fn applies_to_any_codec(&self) -> bool {
        self.codec.is_empty()
    }
}

/// Containers that may be sent to the client unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirectPlayProfile {
    #[serde(rename = "Type")]
    pub media_type: DlnaProfileType,
    #[serde(with = "comma_list")]
    pub container: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubtitleProfile {
    pub format: String,
    pub method: SubtitleDeliveryMethod,
}

/// Target envelope for transcoded delivery in one container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranscodingProfile {
    pub container: String,
    #[serde(rename = "Type")]
    pub media_type: DlnaProfileType,
    #[serde(default)]
    pub video_codec: String,
    /// Acceptable audio codecs, most preferred first.
    #[serde(with = "comma_list", default)]
    pub audio_codec: Vec<String>,
    #[serde(default = "default_protocol")]
    pub protocol: String,
    #[serde(default = "default_context")]
    pub context: String,
}

fn default_protocol() -> String {
    "http".to_string()
}

fn default_context() -> String {
    "Streaming".to_string()
}

impl TranscodingProfile {
    /// Creates a streaming transcoding profile for `container`.
    pub fn new(
        container: impl Into<String>,
        media_type: DlnaProfileType,
        video_codec: impl Into<String>,
        audio_codec: Vec<String>,
    ) -> Self {
        Self {
            container: container.into(),
            media_type,
            video_codec: video_codec.into(),
            audio_codec,
            protocol: default_protocol(),
            context: default_context(),
        }
    }
}

/// The capability profile handed to the negotiation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceProfile {
    pub direct_play_profiles: Vec<DirectPlayProfile>,
    pub codec_profiles: Vec<CodecProfile>,
    pub subtitle_profiles: Vec<SubtitleProfile>,
    pub transcoding_profiles: Vec<TranscodingProfile>,
}

impl DeviceProfile {
    pub fn direct_play_for(&self, media_type: DlnaProfileType) -> Vec<&DirectPlayProfile> {
        self.direct_play_profiles
            .iter()
            .filter(|p| p.media_type == media_type)
            .collect()
    }

    pub fn codec_profile(&self, codec_type: CodecType, codec: &str) -> Option<&CodecProfile> {
        self.codec_profiles
            .iter()
            .find(|p| p.codec_type == codec_type && p.codec == codec)
    }

    pub fn transcoding_profile(&self, container: &str) -> Option<&TranscodingProfile> {
        self.transcoding_profiles
            .iter()
            .find(|p| p.container == container)
    }

    pub(crate) fn transcoding_profile_mut(
        &mut self,
        container: &str,
    ) -> Option<&mut TranscodingProfile> {
        self.transcoding_profiles
            .iter_mut()
            .find(|p| p.container == container)
    }
}

/// Serializes an identifier list as a single comma-joined string.
mod comma_list {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(items: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&items.join(","))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect())
    }
}
