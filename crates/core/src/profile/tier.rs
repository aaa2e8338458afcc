//! Support tier and level ceiling classification.

use serde::Serialize;
use tracing::{debug, info};

use crate::device::{CapabilityOracle, DeviceKind};

/// How much of a codec family the device can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SupportTier {
    #[serde(rename = "unsupported")]
    Unsupported,
    #[serde(rename = "partial")]
    PartialSupport,
    #[serde(rename = "full")]
    FullSupport,
}

impl SupportTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unsupported => "unsupported",
            Self::PartialSupport => "partial",
            Self::FullSupport => "full",
        }
    }
}

/// H.264 level ceiling, in the negotiation layer's two-digit notation.
///
/// See <https://en.wikipedia.org/wiki/Advanced_Video_Coding#Levels>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum H264Level {
    #[serde(rename = "41")]
    Level4_1,
    #[serde(rename = "51")]
    Level5_1,
    #[serde(rename = "52")]
    Level5_2,
}

impl H264Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Level4_1 => "41",
            Self::Level5_1 => "51",
            Self::Level5_2 => "52",
        }
    }
}

/// Level ceilings for device families with known H.264 limits, most specific
/// family first. The first matching rule wins.
///
/// See <https://developer.amazon.com/docs/fire-tv/device-specifications.html>.
const LEVEL_CEILINGS: &[(fn(&DeviceKind) -> bool, H264Level)] = &[
    (DeviceKind::is_fire_tv_stick_4k, H264Level::Level5_2),
    (DeviceKind::is_fire_tv, H264Level::Level4_1),
];

/// Ceiling for devices no rule matches.
pub const DEFAULT_LEVEL_CEILING: H264Level = H264Level::Level5_1;

/// Classifies HEVC decode support.
///
/// Main 10 support is only queried once base HEVC support is confirmed; a
/// device claiming Main 10 without base HEVC is treated as unsupported.
pub fn classify_hevc_support<O: CapabilityOracle + ?Sized>(oracle: &O) -> SupportTier {
    let tier = if !oracle.supports_hevc() {
        SupportTier::Unsupported
    } else if !oracle.supports_hevc_main10() {
        SupportTier::PartialSupport
    } else {
        SupportTier::FullSupport
    };

    match tier {
        SupportTier::Unsupported => info!("Device does NOT support HEVC"),
        SupportTier::PartialSupport => info!("Device does NOT support HEVC 10 bit"),
        SupportTier::FullSupport => info!("Device supports HEVC 10 bit"),
    }

    tier
}

/// Resolves the H.264 level ceiling for a device family.
pub fn classify_level_ceiling(kind: DeviceKind) -> H264Level {
    let level = LEVEL_CEILINGS
        .iter()
        .find(|(applies, _)| applies(&kind))
        .map(|(_, level)| *level)
        .unwrap_or(DEFAULT_LEVEL_CEILING);

    debug!(device = kind.as_str(), level = level.as_str(), "Resolved H.264 level ceiling");
    level
}
