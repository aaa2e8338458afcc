pub mod config;
pub mod device;
pub mod metrics;
pub mod profile;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Ac3Mode, Config, ConfigError,
    SanitizedConfig,
};
pub use device::{
    CapabilityOracle, DecoderCatalog, DeviceClassifier, DeviceKind, ModelNameClassifier,
    PreferenceSource,
};
pub use profile::{
    add_ac3_streaming, add_alternate_audio_codec, AugmentOutcome, CapabilitySummary,
    CompileRequest, DeviceProfile, ProfileCompiler, ProfileError, SupportTier,
};
