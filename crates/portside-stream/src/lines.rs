//! Line-delimited JSON streaming.
//!
//! The event feed and live stats endpoints stream one JSON document per
//! newline-terminated line instead of framed channels. [`LineDecoder`] is
//! the pure incremental splitter; [`JsonLines`] drives it over a transport
//! handle and decodes each line into an entity.

use crate::config::SessionConfig;
use crate::error::{Result, StreamError};
use bytes::{Buf, Bytes, BytesMut};
use portside_models::Decoder;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio_util::sync::CancellationToken;

/// Splits buffered bytes into newline-terminated lines, incrementally.
#[derive(Debug)]
pub struct LineDecoder {
    max_line_len: usize,
}

impl LineDecoder {
    /// Creates a splitter that rejects lines longer than `max_line_len`.
    #[must_use]
    pub const fn new(max_line_len: usize) -> Self {
        Self { max_line_len }
    }

    /// Extracts the next complete line from `buf`, without its newline.
    ///
    /// Returns `Ok(None)` when no full line is buffered yet.
    ///
    /// # Errors
    ///
    /// A line exceeding the limit fails the stream before any of it is
    /// delivered.
    pub fn next_line(&self, buf: &mut BytesMut) -> Result<Option<Bytes>> {
        if let Some(pos) = buf.iter().position(|&b| b == b'\n') {
            if pos > self.max_line_len {
                return Err(StreamError::OversizedLine {
                    len: pos,
                    max: self.max_line_len,
                });
            }
            let line = buf.split_to(pos).freeze();
            buf.advance(1);
            return Ok(Some(line));
        }
        if buf.len() > self.max_line_len {
            return Err(StreamError::OversizedLine {
                len: buf.len(),
                max: self.max_line_len,
            });
        }
        Ok(None)
    }

    /// Validates end of stream: a partial line left buffered at EOF is a
    /// truncated stream.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::TruncatedStream`] when bytes remain.
    pub fn finish(&self, buf: &BytesMut) -> Result<()> {
        if buf.is_empty() {
            Ok(())
        } else {
            Err(StreamError::TruncatedStream)
        }
    }
}

/// Typed sequence of JSON documents streamed one per line.
///
/// Owns its transport handle exclusively, like a framed session; the
/// handle is released when the value drops. Cancellation terminates the
/// sequence with [`StreamError::Cancelled`].
#[derive(Debug)]
pub struct JsonLines<R, T> {
    transport: R,
    decoder: Decoder,
    lines: LineDecoder,
    buf: BytesMut,
    token: CancellationToken,
    done: bool,
    _entity: PhantomData<fn() -> T>,
}

impl<R, T> JsonLines<R, T>
where
    R: AsyncRead + Unpin,
    T: DeserializeOwned,
{
    /// Wraps a transport handle carrying line-delimited JSON.
    #[must_use]
    pub fn new(transport: R, decoder: Decoder, config: &SessionConfig) -> Self {
        Self {
            transport,
            decoder,
            lines: LineDecoder::new(config.max_line_len),
            buf: BytesMut::with_capacity(config.read_buffer_size),
            token: CancellationToken::new(),
            done: false,
            _entity: PhantomData,
        }
    }

    /// Token that cancels this sequence.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Waits for the next document.
    ///
    /// Returns `None` after clean end of stream and after any terminal
    /// error has been reported. A decode failure is terminal: the engine
    /// and the session no longer agree on the stream contents.
    pub async fn next_item(&mut self) -> Option<Result<T>> {
        if self.done {
            return None;
        }
        match self.advance().await {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }

    async fn advance(&mut self) -> Result<Option<T>> {
        loop {
            while let Some(line) = self.lines.next_line(&mut self.buf)? {
                // Keep-alive blank lines carry no document.
                if line.is_empty() {
                    continue;
                }
                let item = self.decoder.decode::<T>(&line)?;
                return Ok(Some(item));
            }

            let read = tokio::select! {
                biased;

                () = self.token.cancelled() => return Err(StreamError::Cancelled),
                read = self.transport.read_buf(&mut self.buf) => read?,
            };

            if read == 0 {
                self.lines.finish(&self.buf)?;
                return Ok(None);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lines_across_chunk_boundaries() {
        let decoder = LineDecoder::new(64);
        let mut buf = BytesMut::new();
        let mut lines = Vec::new();

        for chunk in [&b"alpha\nbe"[..], b"ta\n", b"gamma", b"\n"] {
            buf.extend_from_slice(chunk);
            while let Some(line) = decoder.next_line(&mut buf).expect("split") {
                lines.push(line);
            }
        }

        assert_eq!(lines, vec!["alpha", "beta", "gamma"]);
        decoder.finish(&buf).expect("clean eof");
    }

    #[test]
    fn oversized_line_fails_before_delivery() {
        let decoder = LineDecoder::new(4);
        let mut buf = BytesMut::from(&b"toolong"[..]);
        assert!(matches!(
            decoder.next_line(&mut buf).unwrap_err(),
            StreamError::OversizedLine { len: 7, max: 4 }
        ));
    }

    #[test]
    fn partial_line_at_eof_is_truncation() {
        let decoder = LineDecoder::new(64);
        let buf = BytesMut::from(&b"{\"unterminated\""[..]);
        assert!(matches!(
            decoder.finish(&buf).unwrap_err(),
            StreamError::TruncatedStream
        ));
    }
}
