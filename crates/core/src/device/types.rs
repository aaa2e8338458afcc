//! Types for the device module.

use serde::{Deserialize, Serialize};

/// Device family, as far as profile compilation cares.
///
/// Families nest: a Fire TV Stick 4K is also a Fire TV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    /// Fire TV Stick 4K (model AFTMM)
    #[serde(rename = "fire_tv_stick_4k")]
    FireTvStick4k,
    /// Any other Amazon Fire TV device
    FireTv,
    #[default]
    Generic,
}

impl DeviceKind {
    pub fn is_fire_tv_stick_4k(&self) -> bool {
        matches!(self, Self::FireTvStick4k)
    }

    pub fn is_fire_tv(&self) -> bool {
        matches!(self, Self::FireTvStick4k | Self::FireTv)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FireTvStick4k => "fire_tv_stick_4k",
            Self::FireTv => "fire_tv",
            Self::Generic => "generic",
        }
    }
}

/// A profile/level pair advertised by a codec for one mime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLevel {
    pub profile: u32,
    pub level: u32,
}

/// Capabilities a codec declares for one mime type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecCapabilities {
    pub mime: String,
    #[serde(default)]
    pub profile_levels: Vec<ProfileLevel>,
}

/// One entry of the platform codec list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecInfo {
    pub name: String,
    #[serde(default)]
    pub is_encoder: bool,
    #[serde(default)]
    pub capabilities: Vec<CodecCapabilities>,
}

impl CodecInfo {
    pub fn capabilities_for(&self, mime: &str) -> Option<&CodecCapabilities> {
        self.capabilities
            .iter()
            .find(|c| c.mime.eq_ignore_ascii_case(mime))
    }
}
