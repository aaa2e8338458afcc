//! Device profile API endpoints.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use playcaps_core::{
    add_ac3_streaming, Ac3Mode, CapabilitySummary, DeviceProfile, PreferenceSource, ProfileError,
};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::{debug, error};

use crate::metrics::PROFILE_RESPONSES;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProfileErrorResponse {
    pub error: String,
}

type ProfileResult<T> = Result<T, (StatusCode, Json<ProfileErrorResponse>)>;

fn internal_error(message: String) -> (StatusCode, Json<ProfileErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ProfileErrorResponse { error: message }),
    )
}

fn ac3_mode_label(mode: Ac3Mode) -> &'static str {
    match mode {
        Ac3Mode::Off => "off",
        Ac3Mode::Fallback => "fallback",
        Ac3Mode::Preferred => "preferred",
    }
}

// ============================================================================
// Profile Assembly
// ============================================================================

/// Compile a fresh profile and apply the configured AC3 augmentation.
pub fn build_profile(state: &AppState) -> Result<DeviceProfile, ProfileError> {
    let mut profile = state.compiler().compile(state.compile_request())?;

    let mode = state.ac3_mode();
    if mode != Ac3Mode::Off {
        let outcome = add_ac3_streaming(
            &mut profile,
            mode == Ac3Mode::Preferred,
            state.preferences().downmix_disabled(),
        );
        debug!(outcome = outcome.as_str(), "AC3 augmentation applied");
    }

    Ok(profile)
}

/// Strong entity tag over the serialized profile.
fn entity_tag(body: &[u8]) -> String {
    format!("\"{:x}\"", Sha256::digest(body))
}

/// Whether an `If-None-Match` header already names `etag`.
fn etag_matches(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get_all(header::IF_NONE_MATCH)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(|tag| tag.trim())
        .any(|tag| tag == "*" || tag.trim_start_matches("W/") == etag)
}

// ============================================================================
// Handlers
// ============================================================================

/// Get the device profile for the configured device
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ProfileResult<Response> {
    let profile = build_profile(&state).map_err(|e| {
        error!("Failed to compile device profile: {}", e);
        internal_error(e.to_string())
    })?;

    let body = serde_json::to_vec(&profile)
        .map_err(|e| internal_error(format!("Failed to serialize profile: {}", e)))?;
    let etag = entity_tag(&body);
    let etag_header = HeaderValue::from_str(&etag)
        .map_err(|e| internal_error(format!("Invalid entity tag: {}", e)))?;

    let mode = ac3_mode_label(state.ac3_mode());
    if etag_matches(&headers, &etag) {
        PROFILE_RESPONSES
            .with_label_values(&[mode, "not_modified"])
            .inc();
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag_header)]).into_response());
    }

    PROFILE_RESPONSES.with_label_values(&[mode, "miss"]).inc();
    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            ),
            (header::ETAG, etag_header),
        ],
        body,
    )
        .into_response())
}

/// Get the capability facts the profile is compiled from
pub async fn get_capabilities(State(state): State<Arc<AppState>>) -> Json<CapabilitySummary> {
    Json(state.compiler().summarize())
}
