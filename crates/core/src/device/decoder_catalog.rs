//! Capability oracle backed by a declared codec list.
//!
//! The catalog mirrors what the platform media codec list reports: every
//! codec, whether it encodes or decodes, and the profile/level pairs it
//! advertises per mime type. Profile and level values use the platform's
//! bit-flag constants.

use tracing::debug;

use super::traits::CapabilityOracle;
use super::types::CodecInfo;

pub const MIME_VIDEO_AVC: &str = "video/avc";
pub const MIME_VIDEO_HEVC: &str = "video/hevc";
pub const MIME_VIDEO_H263: &str = "video/3gpp";

pub const AVC_PROFILE_HIGH10: u32 = 0x10;
pub const AVC_LEVEL_4: u32 = 0x800;

pub const HEVC_PROFILE_MAIN: u32 = 0x01;
pub const HEVC_PROFILE_MAIN10: u32 = 0x02;
pub const HEVC_MAIN_TIER_LEVEL_5: u32 = 0x4000;

pub const H263_LEVEL_10: u32 = 0x01;
pub const H263_LEVEL_45: u32 = 0x10;

/// A [`CapabilityOracle`] answering from a fixed list of codecs.
#[derive(Debug, Clone, Default)]
pub struct DecoderCatalog {
    codecs: Vec<CodecInfo>,
}

impl DecoderCatalog {
    pub fn new(codecs: Vec<CodecInfo>) -> Self {
        Self { codecs }
    }

    pub fn codecs(&self) -> &[CodecInfo] {
        &self.codecs
    }

    /// Whether any decoder declares `mime`, regardless of profile or level.
    pub fn has_decoder_for(&self, mime: &str) -> bool {
        self.codecs
            .iter()
            .filter(|c| !c.is_encoder)
            .any(|c| c.capabilities_for(mime).is_some())
    }

    /// Whether a decoder handles `profile` at `level` or above.
    pub fn has_decoder(&self, mime: &str, profile: u32, level: u32) -> bool {
        let found = self.supports(mime, false, profile, level);
        if !found {
            debug!(
                "no {} decoder for profile {} and level {}",
                mime, profile, level
            );
        }
        found
    }

    /// Whether any codec of the requested direction handles `profile` at
    /// `level` or above for `mime`.
    pub fn supports(&self, mime: &str, is_encoder: bool, profile: u32, level: u32) -> bool {
        let is_h263 = mime.eq_ignore_ascii_case(MIME_VIDEO_H263);

        self.codecs
            .iter()
            .filter(|c| c.is_encoder == is_encoder)
            .filter_map(|c| c.capabilities_for(mime))
            .flat_map(|caps| caps.profile_levels.iter())
            .filter(|pl| pl.profile == profile)
            .any(|pl| {
                // H.263 levels are not totally ordered: Level45 only implies Level10.
                if is_h263 && pl.level != level && pl.level == H263_LEVEL_45 && level > H263_LEVEL_10
                {
                    return false;
                }
                pl.level >= level
            })
    }
}

impl CapabilityOracle for DecoderCatalog {
    fn supports_hevc(&self) -> bool {
        self.has_decoder_for(MIME_VIDEO_HEVC)
    }

    fn supports_hevc_main10(&self) -> bool {
        self.has_decoder(MIME_VIDEO_HEVC, HEVC_PROFILE_MAIN10, HEVC_MAIN_TIER_LEVEL_5)
    }

    fn supports_avc_high10(&self) -> bool {
        self.has_decoder(MIME_VIDEO_AVC, AVC_PROFILE_HIGH10, AVC_LEVEL_4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::types::{CodecCapabilities, ProfileLevel};

    fn codec(name: &str, is_encoder: bool, mime: &str, levels: &[(u32, u32)]) -> CodecInfo {
        CodecInfo {
            name: name.to_string(),
            is_encoder,
            capabilities: vec![CodecCapabilities {
                mime: mime.to_string(),
                profile_levels: levels
                    .iter()
                    .map(|&(profile, level)| ProfileLevel { profile, level })
                    .collect(),
            }],
        }
    }

    #[test]
    fn test_empty_catalog_supports_nothing() {
        let catalog = DecoderCatalog::default();
        assert!(!catalog.supports_hevc());
        assert!(!catalog.supports_hevc_main10());
        assert!(!catalog.supports_avc_high10());
    }

    #[test]
    fn test_hevc_main_only_decoder() {
        let catalog = DecoderCatalog::new(vec![codec(
            "c2.hevc.decoder",
            false,
            MIME_VIDEO_HEVC,
            &[(HEVC_PROFILE_MAIN, HEVC_MAIN_TIER_LEVEL_5)],
        )]);
        assert!(catalog.supports_hevc());
        assert!(!catalog.supports_hevc_main10());
    }

    #[test]
    fn test_hevc_main10_requires_level_5() {
        let low = DecoderCatalog::new(vec![codec(
            "c2.hevc.decoder",
            false,
            MIME_VIDEO_HEVC,
            &[(HEVC_PROFILE_MAIN10, 0x1000)],
        )]);
        assert!(!low.supports_hevc_main10());

        let high = DecoderCatalog::new(vec![codec(
            "c2.hevc.decoder",
            false,
            MIME_VIDEO_HEVC,
            &[(HEVC_PROFILE_MAIN10, 0x10000)],
        )]);
        assert!(high.supports_hevc_main10());
    }

    #[test]
    fn test_encoders_do_not_count_as_decoders() {
        let catalog = DecoderCatalog::new(vec![codec(
            "c2.hevc.encoder",
            true,
            MIME_VIDEO_HEVC,
            &[(HEVC_PROFILE_MAIN10, HEVC_MAIN_TIER_LEVEL_5)],
        )]);
        assert!(!catalog.supports_hevc());
        assert!(!catalog.supports_hevc_main10());
        assert!(catalog.supports(MIME_VIDEO_HEVC, true, HEVC_PROFILE_MAIN10, HEVC_MAIN_TIER_LEVEL_5));
    }

    #[test]
    fn test_avc_high10() {
        let catalog = DecoderCatalog::new(vec![codec(
            "c2.avc.decoder",
            false,
            MIME_VIDEO_AVC,
            &[(AVC_PROFILE_HIGH10, AVC_LEVEL_4)],
        )]);
        assert!(catalog.supports_avc_high10());
        assert!(!catalog.supports_hevc());
    }

    #[test]
    fn test_h263_level45_only_implies_level10() {
        let catalog = DecoderCatalog::new(vec![codec(
            "c2.h263.decoder",
            false,
            MIME_VIDEO_H263,
            &[(0x01, H263_LEVEL_45)],
        )]);
        assert!(catalog.supports(MIME_VIDEO_H263, false, 0x01, H263_LEVEL_10));
        assert!(catalog.supports(MIME_VIDEO_H263, false, 0x01, H263_LEVEL_45));
        // Level 20 is numerically below Level45 but not implied by it.
        assert!(!catalog.supports(MIME_VIDEO_H263, false, 0x01, 0x02));
    }
}
