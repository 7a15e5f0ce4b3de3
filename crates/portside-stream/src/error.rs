//! Error types for stream decoding and sessions.

use portside_models::DecodeError;
use thiserror::Error;

/// Result type alias for stream operations.
pub type Result<T> = std::result::Result<T, StreamError>;

/// Errors that can occur on a streamed connection.
///
/// A stream error is terminal for its session: every channel that has not
/// yet completed observes it. Independent sessions are unaffected.
#[derive(Debug, Clone, Error)]
pub enum StreamError {
    /// A frame header carried an unknown channel selector.
    #[error("protocol violation: unknown channel selector {0:#04x}")]
    UnknownChannel(u8),

    /// A frame declared a payload larger than the configured limit.
    #[error("protocol violation: {len} byte frame exceeds the {max} byte limit")]
    OversizedFrame {
        /// Declared payload length.
        len: u64,
        /// Configured limit.
        max: u64,
    },

    /// A line-delimited document exceeded the configured line limit.
    #[error("protocol violation: {len} byte line exceeds the {max} byte limit")]
    OversizedLine {
        /// Observed line length so far.
        len: usize,
        /// Configured limit.
        max: usize,
    },

    /// The transport ended mid-header or mid-payload.
    #[error("stream truncated mid-frame")]
    TruncatedStream,

    /// The session was cancelled.
    #[error("session cancelled")]
    Cancelled,

    /// The transport read failed.
    #[error("transport error: {detail}")]
    Transport {
        /// Underlying I/O diagnostic.
        detail: String,
    },

    /// A streamed JSON document failed to decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl StreamError {
    /// Whether this error is a violation of the framing protocol itself,
    /// as opposed to a transport or consumer condition.
    #[must_use]
    pub const fn is_protocol_violation(&self) -> bool {
        matches!(
            self,
            Self::UnknownChannel(_) | Self::OversizedFrame { .. } | Self::OversizedLine { .. }
        )
    }
}

impl From<std::io::Error> for StreamError {
    fn from(err: std::io::Error) -> Self {
        Self::Transport {
            detail: err.to_string(),
        }
    }
}
