//! Streaming session configuration.

use serde::{Deserialize, Serialize};

/// Default frame payload limit: 1 MiB.
pub const DEFAULT_MAX_FRAME_SIZE: u32 = 1 << 20;

/// Default per-channel buffer capacity, in chunks.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Default transport read buffer size, in bytes.
pub const DEFAULT_READ_BUFFER_SIZE: usize = 4096;

/// Default line length limit for line-delimited streams: 1 MiB.
pub const DEFAULT_MAX_LINE_LEN: usize = 1 << 20;

/// Limits applied to one streaming session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Largest frame payload accepted before the stream fails.
    pub max_frame_size: u32,
    /// Chunks buffered per channel before the reader blocks on that
    /// channel's consumer.
    pub channel_capacity: usize,
    /// Transport read buffer size in bytes. Cancellation latency is
    /// bounded by one read of this granularity.
    pub read_buffer_size: usize,
    /// Largest line accepted by line-delimited decoders.
    pub max_line_len: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}
