use std::sync::Arc;

use playcaps_core::{
    Ac3Mode, CapabilityOracle, CompileRequest, Config, DecoderCatalog, DeviceClassifier,
    ModelNameClassifier, PreferenceSource, ProfileCompiler, SanitizedConfig,
};

pub type SharedCompiler = ProfileCompiler<Arc<dyn CapabilityOracle>, Arc<dyn DeviceClassifier>>;

/// Shared application state
pub struct AppState {
    config: Config,
    compiler: SharedCompiler,
    preferences: Arc<dyn PreferenceSource>,
    compile_request: CompileRequest,
}

impl AppState {
    pub fn new(
        config: Config,
        oracle: Arc<dyn CapabilityOracle>,
        classifier: Arc<dyn DeviceClassifier>,
        preferences: Arc<dyn PreferenceSource>,
    ) -> Self {
        let compile_request = config.profile.compile_request();
        Self {
            config,
            compiler: ProfileCompiler::new(oracle, classifier),
            preferences,
            compile_request,
        }
    }

    /// Build state whose device facts all come from the configuration.
    pub fn from_config(config: Config) -> Self {
        let oracle = Arc::new(DecoderCatalog::new(config.decoders.clone()));
        let classifier = Arc::new(ModelNameClassifier::new(config.device.model.clone()));
        let preferences = Arc::new(config.preferences.clone());
        Self::new(config, oracle, classifier, preferences)
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn compiler(&self) -> &SharedCompiler {
        &self.compiler
    }

    pub fn compile_request(&self) -> &CompileRequest {
        &self.compile_request
    }

    pub fn ac3_mode(&self) -> Ac3Mode {
        self.config.profile.ac3
    }

    pub fn preferences(&self) -> &dyn PreferenceSource {
        self.preferences.as_ref()
    }
}
