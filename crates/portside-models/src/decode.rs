//! Version-aware response decoding.
//!
//! Converts raw JSON payloads into entity values. The wire-name mapping for
//! every entity is declared statically through its serde attributes, so the
//! lookup table is built at compile time; this module contributes the
//! version gate and the error classification on top of that.
//!
//! Decode rules:
//! - Field lookup is by wire name (engine capitalization), never by the
//!   Rust field name.
//! - Unknown wire fields are ignored for forward compatibility.
//! - A required field that is absent or null fails the whole decode with
//!   [`DecodeError::MissingRequiredField`].
//! - Optional and deprecated fields decode independently; absence is a
//!   valid state, not an error.

use crate::error::{DecodeError, Result};
use crate::version::ApiVersion;
use serde::de::DeserializeOwned;

/// Decoder for engine response payloads, bound to a negotiated API version.
#[derive(Debug, Clone)]
pub struct Decoder {
    version: ApiVersion,
}

impl Decoder {
    /// Creates a decoder for the given negotiated API version.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnsupportedEngineVersion`] if the version is
    /// outside the supported window.
    pub fn new(version: ApiVersion) -> Result<Self> {
        if !version.is_supported() {
            return Err(DecodeError::UnsupportedEngineVersion {
                version: version.to_string(),
            });
        }
        Ok(Self { version })
    }

    /// Creates a decoder for the pinned (newest supported) API version.
    #[must_use]
    pub const fn pinned() -> Self {
        Self {
            version: ApiVersion::PINNED,
        }
    }

    /// The API version this decoder is bound to.
    #[must_use]
    pub const fn version(&self) -> ApiVersion {
        self.version
    }

    /// Whether the bound engine revision reports mount descriptors instead
    /// of the deprecated `Volumes`/`VolumesRW` map pair. Callers choosing
    /// between the two overlays can branch on this; the decoder itself
    /// accepts either and performs no migration.
    #[must_use]
    pub fn expects_mount_descriptors(&self) -> bool {
        self.version >= ApiVersion::MOUNTS_INTRODUCED
    }

    /// Decodes one complete JSON payload into an entity.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] carrying the wire path to the first
    /// offending value. Trailing non-whitespace after the document is a
    /// malformed payload.
    pub fn decode<T: DeserializeOwned>(&self, payload: &[u8]) -> Result<T> {
        let mut de = serde_json::Deserializer::from_slice(payload);
        let decoded = serde_path_to_error::deserialize(&mut de).map_err(classify::<T>)?;
        de.end().map_err(|e| DecodeError::MalformedValue {
            entity: entity_name::<T>(),
            path: ".".to_string(),
            detail: e.to_string(),
        })?;
        tracing::trace!(
            entity = %entity_name::<T>(),
            version = %self.version,
            "decoded response payload"
        );
        Ok(decoded)
    }

    /// Decodes an already-parsed JSON value into an entity.
    ///
    /// # Errors
    ///
    /// Same contract as [`Decoder::decode`].
    pub fn decode_value<T: DeserializeOwned>(&self, value: serde_json::Value) -> Result<T> {
        serde_path_to_error::deserialize(value).map_err(classify::<T>)
    }
}

/// Maps a path-tracked serde failure onto the decode error taxonomy.
///
/// Absent required fields and null-valued required fields both count as
/// missing; a null *element* inside a sequence is a malformed value, since
/// no field is absent there.
fn classify<T>(err: serde_path_to_error::Error<serde_json::Error>) -> DecodeError {
    let entity = entity_name::<T>();
    let path = err.path().to_string();
    let detail = err.into_inner().to_string();

    if let Some(rest) = detail.strip_prefix("missing field `") {
        if let Some(field) = rest.split('`').next() {
            return DecodeError::MissingRequiredField {
                entity,
                field: field.to_string(),
                path,
            };
        }
    }

    if detail.starts_with("invalid type: null") && path != "." && !path.ends_with(']') {
        let field = path.rsplit('.').next().unwrap_or(&path).to_string();
        return DecodeError::MissingRequiredField {
            entity,
            field,
            path,
        };
    }

    DecodeError::MalformedValue {
        entity,
        path,
        detail,
    }
}

/// Shortens a type name for diagnostics: module paths are stripped from
/// every path segment, generics are kept (`Vec<ContainerSummary>`).
fn entity_name<T>() -> String {
    let mut out = String::new();
    let mut ident = String::new();
    for ch in std::any::type_name::<T>().chars() {
        match ch {
            ':' => ident.clear(),
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' => {
                out.push_str(&ident);
                ident.clear();
                out.push(ch);
            }
            _ => ident.push(ch),
        }
    }
    out.push_str(&ident);
    out
}
