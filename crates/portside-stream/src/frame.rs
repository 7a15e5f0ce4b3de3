//! Frame codec for the multiplexed stream protocol.
//!
//! Streamed endpoints interleave several logical channels over one
//! connection. Each frame is a fixed 8-byte header followed by its payload:
//!
//! ```text
//! [selector (1 byte)][reserved (3 bytes, zero)][payload length (4 bytes BE)]
//! ```
//!
//! The header size is fixed at build time, never negotiated. Reserved bytes
//! are written as zero and not interpreted on decode.

use crate::error::{Result, StreamError};
use bytes::{BufMut, Bytes, BytesMut};
use std::fmt;

/// Size of the fixed frame header.
pub const HEADER_LEN: usize = 8;

/// Logical channel carried within a multiplexed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Standard input echo.
    Stdin,
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

impl Channel {
    /// All channels, in selector order.
    pub const ALL: [Self; 3] = [Self::Stdin, Self::Stdout, Self::Stderr];

    /// Wire selector byte for this channel.
    #[must_use]
    pub const fn selector(self) -> u8 {
        match self {
            Self::Stdin => 0,
            Self::Stdout => 1,
            Self::Stderr => 2,
        }
    }

    /// Maps a header selector byte to its channel.
    ///
    /// # Errors
    ///
    /// Any byte other than the three known selectors is a protocol
    /// violation.
    pub const fn from_selector(byte: u8) -> Result<Self> {
        match byte {
            0 => Ok(Self::Stdin),
            1 => Ok(Self::Stdout),
            2 => Ok(Self::Stderr),
            other => Err(StreamError::UnknownChannel(other)),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stdin => "stdin",
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        })
    }
}

/// Decoded frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Channel the payload belongs to.
    pub channel: Channel,
    /// Payload length in bytes.
    pub len: u32,
}

impl FrameHeader {
    /// Encodes to wire form.
    #[must_use]
    pub fn encode(self) -> [u8; HEADER_LEN] {
        let mut header = [0u8; HEADER_LEN];
        header[0] = self.channel.selector();
        header[4..].copy_from_slice(&self.len.to_be_bytes());
        header
    }

    /// Decodes from wire form.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::UnknownChannel`] for an invalid selector.
    pub fn decode(bytes: [u8; HEADER_LEN]) -> Result<Self> {
        let channel = match Channel::from_selector(bytes[0]) {
            Ok(channel) => channel,
            Err(err) => return Err(err),
        };
        let len = u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        Ok(Self { channel, len })
    }
}

/// One decoded frame: a channel plus its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Channel the payload belongs to.
    pub channel: Channel,
    /// Payload bytes; may be empty, which still counts as one delivery.
    pub payload: Bytes,
}

/// Encodes one complete frame, header plus payload.
///
/// A zero-length payload still produces a header, so the empty write
/// reaches the consumer instead of being dropped.
///
/// # Errors
///
/// Returns [`StreamError::OversizedFrame`] when the payload cannot be
/// described by the 4-byte length field.
pub fn encode_frame(channel: Channel, payload: &[u8]) -> Result<Bytes> {
    let len = u32::try_from(payload.len()).map_err(|_| StreamError::OversizedFrame {
        len: payload.len() as u64,
        max: u64::from(u32::MAX),
    })?;
    let mut buf = BytesMut::with_capacity(HEADER_LEN + payload.len());
    buf.put_slice(&FrameHeader { channel, len }.encode());
    buf.put_slice(payload);
    Ok(buf.freeze())
}
