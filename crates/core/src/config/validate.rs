use std::collections::HashSet;

use super::{types::Config, ConfigError};
use crate::profile::{audio_direct_play_profile, subtitle_profile, validate_identifier};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Every declared decoder has a name and non-empty mime types
/// - Profile parts are well-formed identifiers
/// - Transcoding containers are unique
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    for (i, codec) in config.decoders.iter().enumerate() {
        if codec.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "decoders[{}].name cannot be empty",
                i
            )));
        }
        if codec.capabilities.iter().any(|c| c.mime.trim().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "decoders[{}] ({}) declares an empty mime type",
                i, codec.name
            )));
        }
    }

    let profile = &config.profile;
    for group in &profile.audio_containers {
        audio_direct_play_profile(group)
            .map_err(|e| ConfigError::ValidationError(format!("profile.audio_containers: {}", e)))?;
    }

    if profile.max_audio_channels == Some(0) {
        return Err(ConfigError::ValidationError(
            "profile.max_audio_channels cannot be 0".to_string(),
        ));
    }

    for rule in &profile.subtitles {
        subtitle_profile(&rule.format, rule.method)
            .map_err(|e| ConfigError::ValidationError(format!("profile.subtitles: {}", e)))?;
    }

    let mut containers = HashSet::new();
    for rule in &profile.transcoding {
        validate_identifier("transcoding container", &rule.container)
            .map_err(|e| ConfigError::ValidationError(format!("profile.transcoding: {}", e)))?;
        if !containers.insert(rule.container.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "profile.transcoding lists container '{}' more than once",
                rule.container
            )));
        }
        for codec in &rule.audio_codecs {
            validate_identifier("audio codec", codec).map_err(|e| {
                ConfigError::ValidationError(format!(
                    "profile.transcoding '{}': {}",
                    rule.container, e
                ))
            })?;
        }
    }

    Ok(())
}
