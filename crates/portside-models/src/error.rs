//! Error types for response decoding.

use thiserror::Error;

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors that can occur while decoding an engine response payload.
///
/// A failing nested entity fails the whole containing decode; `path` fields
/// carry the wire-name path to the offending value (e.g. `Config.Env[2]`)
/// for diagnosis.
#[derive(Debug, Clone, Error)]
pub enum DecodeError {
    /// A required field was absent or null in the payload.
    #[error("missing required field `{field}` at `{path}` while decoding {entity}")]
    MissingRequiredField {
        /// Entity type the decode was targeting.
        entity: String,
        /// Wire name of the missing field.
        field: String,
        /// Wire path to the object the field belongs to.
        path: String,
    },

    /// A field was present but its value did not match the declared shape.
    #[error("malformed value at `{path}` while decoding {entity}: {detail}")]
    MalformedValue {
        /// Entity type the decode was targeting.
        entity: String,
        /// Wire path to the offending value.
        path: String,
        /// Underlying parser diagnostic.
        detail: String,
    },

    /// The engine reported an API version outside the supported window,
    /// or a version string that could not be parsed at all.
    #[error("unsupported engine API version: {version}")]
    UnsupportedEngineVersion {
        /// Version string as reported by the engine.
        version: String,
    },
}

impl DecodeError {
    /// Wire path to the failing value, where the error carries one.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredField { path, .. } | Self::MalformedValue { path, .. } => {
                Some(path)
            }
            Self::UnsupportedEngineVersion { .. } => None,
        }
    }
}
