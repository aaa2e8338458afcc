//! Common test utilities for API testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with mock device traits injected, so profile responses can be driven
//! without real decoders.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use playcaps_core::{
    testing::{MockCapabilityOracle, MockDeviceClassifier, MockPreferences},
    Config, DeviceKind,
};
use playcaps_server::{api::create_router, state::AppState};

/// Test fixture for API testing with mock device traits.
///
/// Provides an in-process server with fully controllable mocks for:
/// - Decode support (MockCapabilityOracle)
/// - Device family (MockDeviceClassifier)
/// - Downmix preference (MockPreferences)
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_profile() {
///     let fixture = TestFixture::new();
///     fixture.oracle.set_hevc(true);
///
///     let response = fixture.get("/api/v1/profile").await;
///     assert_eq!(response.status, StatusCode::OK);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock oracle - control HEVC and AVC answers
    pub oracle: MockCapabilityOracle,
    /// Mock classifier - control the device family
    pub classifier: MockDeviceClassifier,
    /// Mock preferences - toggle the downmix override
    pub preferences: MockPreferences,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
    pub raw: String,
}

impl TestFixture {
    /// Create a new test fixture with default config and a generic device
    /// that supports nothing.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a test fixture with custom configuration.
    pub fn with_config(config: Config) -> Self {
        let oracle = MockCapabilityOracle::new();
        let classifier = MockDeviceClassifier::new(DeviceKind::Generic);
        let preferences = MockPreferences::new(false);

        let state = Arc::new(AppState::new(
            config,
            Arc::new(oracle.clone()),
            Arc::new(classifier.clone()),
            Arc::new(preferences.clone()),
        ));

        Self {
            router: create_router(state),
            oracle,
            classifier,
            preferences,
        }
    }

    /// Create a test fixture whose config is parsed from TOML.
    pub fn with_toml(toml: &str) -> Self {
        let config = playcaps_core::load_config_from_str(toml).expect("Failed to parse config");
        Self::with_config(config)
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.get_with_headers(path, &[]).await
    }

    /// Send a GET request with extra headers.
    pub async fn get_with_headers(&self, path: &str, headers: &[(&str, &str)]) -> TestResponse {
        let mut builder = Request::builder().method("GET").uri(path);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(Body::empty()).unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let raw = String::from_utf8_lossy(&body_bytes).to_string();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            body,
            raw,
        }
    }
}

/// Find the first codec profile entry for `codec` in a profile JSON body.
pub fn codec_profile<'a>(profile: &'a Value, codec: &str) -> &'a Value {
    profile["CodecProfiles"]
        .as_array()
        .expect("CodecProfiles missing")
        .iter()
        .find(|p| p["Codec"] == codec)
        .unwrap_or_else(|| panic!("no codec profile for {}", codec))
}

/// Find the transcoding profile for `container` in a profile JSON body.
pub fn transcoding_profile<'a>(profile: &'a Value, container: &str) -> &'a Value {
    profile["TranscodingProfiles"]
        .as_array()
        .expect("TranscodingProfiles missing")
        .iter()
        .find(|p| p["Container"] == container)
        .unwrap_or_else(|| panic!("no transcoding profile for {}", container))
}
