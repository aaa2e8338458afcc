use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::device::{CodecInfo, PreferenceSource};
use crate::profile::{
    CompileRequest, DlnaProfileType, SubtitleDeliveryMethod, SubtitleProfile, TranscodingProfile,
};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub device: DeviceConfig,
    /// Codec list the decoder catalog answers capability queries from
    #[serde(default)]
    pub decoders: Vec<CodecInfo>,
    #[serde(default)]
    pub preferences: PreferencesConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8420
}

/// Device identity
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeviceConfig {
    /// Hardware model string as reported by the platform (e.g. "AFTMM")
    #[serde(default)]
    pub model: String,
}

/// User playback preferences
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PreferencesConfig {
    /// Audio downmix override; disables alternate audio codec augmentation
    #[serde(default)]
    pub downmix_disabled: bool,
}

impl PreferenceSource for PreferencesConfig {
    fn downmix_disabled(&self) -> bool {
        self.downmix_disabled
    }
}

/// How AC3 is offered on the MKV transcoding target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ac3Mode {
    Off,
    /// Appended after the existing audio codecs
    #[default]
    Fallback,
    /// Inserted ahead of the existing audio codecs
    Preferred,
}

/// Caller-supplied profile parts
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileConfig {
    /// One audio direct-play profile per group
    #[serde(default = "default_audio_containers")]
    pub audio_containers: Vec<Vec<String>>,
    #[serde(default)]
    pub max_audio_channels: Option<u32>,
    #[serde(default = "default_subtitles")]
    pub subtitles: Vec<SubtitleRule>,
    #[serde(default = "default_transcoding")]
    pub transcoding: Vec<TranscodingRule>,
    #[serde(default)]
    pub ac3: Ac3Mode,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            audio_containers: default_audio_containers(),
            max_audio_channels: None,
            subtitles: default_subtitles(),
            transcoding: default_transcoding(),
            ac3: Ac3Mode::default(),
        }
    }
}

impl ProfileConfig {
    /// Builds the compile request this configuration describes.
    pub fn compile_request(&self) -> CompileRequest {
        CompileRequest {
            audio_containers: self.audio_containers.clone(),
            max_audio_channels: self.max_audio_channels,
            subtitle_profiles: self
                .subtitles
                .iter()
                .map(|s| SubtitleProfile {
                    format: s.format.clone(),
                    method: s.method,
                })
                .collect(),
            transcoding_profiles: self
                .transcoding
                .iter()
                .map(TranscodingRule::to_profile)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubtitleRule {
    pub format: String,
    pub method: SubtitleDeliveryMethod,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranscodingRule {
    pub container: String,
    #[serde(rename = "type")]
    pub media_type: DlnaProfileType,
    #[serde(default)]
    pub video_codec: String,
    /// Audio codecs, most preferred first
    #[serde(default)]
    pub audio_codecs: Vec<String>,
}

impl TranscodingRule {
    pub fn to_profile(&self) -> TranscodingProfile {
        TranscodingProfile::new(
            self.container.clone(),
            self.media_type,
            self.video_codec.clone(),
            self.audio_codecs.clone(),
        )
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_audio_containers() -> Vec<Vec<String>> {
    vec![strings(&["mp3", "aac", "flac", "ogg", "opus", "wav"])]
}

fn default_subtitles() -> Vec<SubtitleRule> {
    [
        ("srt", SubtitleDeliveryMethod::External),
        ("subrip", SubtitleDeliveryMethod::Embed),
        ("ass", SubtitleDeliveryMethod::Encode),
        ("ssa", SubtitleDeliveryMethod::Encode),
        ("pgssub", SubtitleDeliveryMethod::Encode),
        ("dvdsub", SubtitleDeliveryMethod::Encode),
    ]
    .into_iter()
    .map(|(format, method)| SubtitleRule {
        format: format.to_string(),
        method,
    })
    .collect()
}

fn default_transcoding() -> Vec<TranscodingRule> {
    vec![
        TranscodingRule {
            container: "mkv".to_string(),
            media_type: DlnaProfileType::Video,
            video_codec: "h264".to_string(),
            audio_codecs: strings(&["aac", "mp3"]),
        },
        TranscodingRule {
            container: "mp3".to_string(),
            media_type: DlnaProfileType::Audio,
            video_codec: String::new(),
            audio_codecs: strings(&["mp3"]),
        },
    ]
}

/// Sanitized config for API responses (decoder list summarized)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub device: DeviceConfig,
    pub decoders: SanitizedDecoders,
    pub preferences: PreferencesConfig,
    pub profile: ProfileConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedDecoders {
    pub count: usize,
    /// Distinct mime types any declared decoder handles
    pub mime_types: Vec<String>,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        let mut mime_types: Vec<String> = config
            .decoders
            .iter()
            .filter(|c| !c.is_encoder)
            .flat_map(|c| c.capabilities.iter().map(|caps| caps.mime.to_lowercase()))
            .collect();
        mime_types.sort();
        mime_types.dedup();

        Self {
            server: config.server.clone(),
            device: config.device.clone(),
            decoders: SanitizedDecoders {
                count: config.decoders.len(),
                mime_types,
            },
            preferences: config.preferences.clone(),
            profile: config.profile.clone(),
        }
    }
}
