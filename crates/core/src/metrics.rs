//! Prometheus metrics for profile compilation.
//!
//! Collectors are created lazily and registered by the server's registry.

use once_cell::sync::Lazy;
use prometheus::{IntCounterVec, Opts};

/// Profiles compiled, by HEVC support tier and device kind.
pub static PROFILES_COMPILED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "playcaps_profiles_compiled_total",
            "Total device profiles compiled",
        ),
        &["hevc_tier", "device"],
    )
    .unwrap()
});

/// Alternate audio codec augmentation attempts, by codec ("ac3" or "other")
/// and outcome.
pub static AUGMENTATIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "playcaps_profile_augmentations_total",
            "Total alternate audio codec augmentation attempts",
        ),
        &["codec", "outcome"], // "skipped", "target_missing", "inserted"
    )
    .unwrap()
});

/// Every core collector, for registration in a server registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(PROFILES_COMPILED.clone()),
        Box::new(AUGMENTATIONS.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accept_labels() {
        let before = PROFILES_COMPILED
            .with_label_values(&["full", "generic"])
            .get();
        PROFILES_COMPILED.with_label_values(&["full", "generic"]).inc();
        assert!(PROFILES_COMPILED.with_label_values(&["full", "generic"]).get() > before);

        AUGMENTATIONS.with_label_values(&["ac3", "skipped"]).inc();
        assert!(AUGMENTATIONS.with_label_values(&["ac3", "skipped"]).get() >= 1);
    }

    #[test]
    fn test_all_metrics_registers_cleanly() {
        let registry = prometheus::Registry::new();
        for metric in all_metrics() {
            registry.register(metric).unwrap();
        }
        PROFILES_COMPILED.with_label_values(&["partial", "fire_tv"]).inc();

        let names: Vec<String> = registry
            .gather()
            .iter()
            .map(|family| family.get_name().to_string())
            .collect();
        assert!(names.contains(&"playcaps_profiles_compiled_total".to_string()));
    }
}
