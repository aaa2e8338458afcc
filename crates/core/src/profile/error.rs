//! Error types for the profile module.

use thiserror::Error;

/// Errors raised while building or patching a device profile.
///
/// Profile construction performs no I/O, so the only failures are contract
/// violations by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// An identifier, list or numeric argument was unusable.
    #[error("Invalid {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },
}

impl ProfileError {
    /// Creates a new invalid argument error.
    pub fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}

/// Checks that `value` can be stored in a comma-joined identifier list.
pub fn validate_identifier(field: &'static str, value: &str) -> Result<(), ProfileError> {
    if value.trim().is_empty() {
        return Err(ProfileError::invalid_argument(field, "must not be empty"));
    }
    if value.contains(',') {
        return Err(ProfileError::invalid_argument(
            field,
            format!("'{}' must not contain ','", value),
        ));
    }
    Ok(())
}
