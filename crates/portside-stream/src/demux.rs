//! Incremental stream demultiplexer.
//!
//! [`FrameDemuxer`] is the pure state machine behind a streaming session:
//! it consumes buffered bytes and yields complete frames, holding at most
//! one in-flight header or payload. It never buffers the stream as a
//! whole, so a session stays within bounded memory no matter how long the
//! connection lives. I/O, channel dispatch, and cancellation live in
//! [`crate::session`].

use crate::error::{Result, StreamError};
use crate::frame::{Frame, FrameHeader, HEADER_LEN};
use bytes::{Buf, BytesMut};

/// Decode position within the current frame.
#[derive(Debug, Clone, Copy)]
enum DemuxState {
    /// Waiting for a complete 8-byte header.
    ReadingHeader,
    /// Waiting for the payload the header declared.
    ReadingPayload(FrameHeader),
}

/// Splits one multiplexed byte stream into frames, incrementally.
#[derive(Debug)]
pub struct FrameDemuxer {
    state: DemuxState,
    max_frame_size: u32,
}

impl FrameDemuxer {
    /// Creates a demuxer that rejects frames larger than `max_frame_size`.
    #[must_use]
    pub const fn new(max_frame_size: u32) -> Self {
        Self {
            state: DemuxState::ReadingHeader,
            max_frame_size,
        }
    }

    /// Extracts the next complete frame from `buf`, consuming its bytes.
    ///
    /// Returns `Ok(None)` when more input is needed; callers append to
    /// `buf` and retry. Bytes of an incomplete header or payload stay in
    /// `buf` untouched.
    ///
    /// # Errors
    ///
    /// Protocol violations (unknown selector, oversized frame) are
    /// terminal: the whole stream fails, nothing is delivered from the
    /// offending frame.
    pub fn next_frame(&mut self, buf: &mut BytesMut) -> Result<Option<Frame>> {
        loop {
            match self.state {
                DemuxState::ReadingHeader => {
                    if buf.len() < HEADER_LEN {
                        return Ok(None);
                    }
                    let mut raw = [0u8; HEADER_LEN];
                    raw.copy_from_slice(&buf[..HEADER_LEN]);
                    let header = FrameHeader::decode(raw)?;
                    if header.len > self.max_frame_size {
                        return Err(StreamError::OversizedFrame {
                            len: u64::from(header.len),
                            max: u64::from(self.max_frame_size),
                        });
                    }
                    buf.advance(HEADER_LEN);
                    self.state = DemuxState::ReadingPayload(header);
                }
                DemuxState::ReadingPayload(header) => {
                    let len = header.len as usize;
                    if buf.len() < len {
                        return Ok(None);
                    }
                    let payload = buf.split_to(len).freeze();
                    self.state = DemuxState::ReadingHeader;
                    return Ok(Some(Frame {
                        channel: header.channel,
                        payload,
                    }));
                }
            }
        }
    }

    /// Validates end of stream.
    ///
    /// # Errors
    ///
    /// EOF is only clean on a frame boundary; a partial header or payload
    /// left in `buf` (or owed by the state machine) is a truncated stream.
    pub fn finish(&self, buf: &BytesMut) -> Result<()> {
        match self.state {
            DemuxState::ReadingHeader if buf.is_empty() => Ok(()),
            _ => Err(StreamError::TruncatedStream),
        }
    }
}
