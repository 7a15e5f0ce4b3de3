//! Streaming session over a multiplexed (or raw) transport handle.
//!
//! A session owns its transport handle exclusively: one reader task drives
//! the handle, runs the [`FrameDemuxer`], and dispatches payloads into one
//! bounded channel per output stream. Consumers read the channels
//! independently; within one channel chunks arrive in frame order, across
//! channels there is no ordering guarantee.
//!
//! Backpressure is producer-side: when a channel's buffer is full the
//! reader task blocks until that consumer catches up, so memory stays
//! bounded. Cancellation wins over both the transport read and a blocked
//! dispatch, so it is observed within one read-buffer cycle. The terminal
//! outcome travels on a `watch` channel, separate from the data buffers,
//! so a full buffer can never swallow a completion or cancellation signal.

use crate::config::SessionConfig;
use crate::demux::FrameDemuxer;
use crate::error::{Result, StreamError};
use crate::frame::{Channel, Frame};
use bytes::{Bytes, BytesMut};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

/// Whether the transport carries framed channels or one raw byte stream.
///
/// The engine signals raw mode out of band (response metadata, TTY
/// containers); the choice is made once, before the first read, and never
/// re-evaluated mid-stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamFormat {
    /// Framed stdin/stdout/stderr channels.
    Multiplexed,
    /// No frame headers; all bytes are implicit stdout.
    Raw,
}

/// Terminal outcome of a session.
#[derive(Debug, Clone)]
enum SessionStatus {
    /// Reader task still running.
    Open,
    /// Transport reached clean end of stream at a frame boundary.
    Complete,
    /// Stream failed; every channel that has not completed observes this.
    Failed(StreamError),
}

/// A live streaming session with one output sequence per channel.
#[derive(Debug)]
pub struct StreamingSession {
    /// Standard output sequence.
    pub stdout: ChannelReader,
    /// Standard error sequence.
    pub stderr: ChannelReader,
    /// Standard input echo sequence.
    pub stdin: ChannelReader,
    token: CancellationToken,
}

impl StreamingSession {
    /// Spawns the reader task over an exclusively owned transport handle.
    ///
    /// The handle is dropped (releasing the connection) when the task
    /// exits: on clean end of stream, on the first stream error, or on
    /// cancellation.
    pub fn spawn<R>(transport: R, format: StreamFormat, config: &SessionConfig) -> Self
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        let token = CancellationToken::new();
        let (status_tx, status_rx) = watch::channel(SessionStatus::Open);

        let channel_pair = |channel| {
            let (tx, rx) = mpsc::channel(config.channel_capacity);
            let reader = ChannelReader {
                channel,
                rx,
                status: status_rx.clone(),
                finished: false,
            };
            (tx, reader)
        };
        let (stdin_tx, stdin) = channel_pair(Channel::Stdin);
        let (stdout_tx, stdout) = channel_pair(Channel::Stdout);
        let (stderr_tx, stderr) = channel_pair(Channel::Stderr);

        // Indexed by selector byte.
        let senders = vec![stdin_tx, stdout_tx, stderr_tx];
        tokio::spawn(run_session(
            transport,
            format,
            config.clone(),
            senders,
            status_tx,
            token.clone(),
        ));

        Self {
            stdout,
            stderr,
            stdin,
            token,
        }
    }

    /// Cancels the session: the transport is released and every channel
    /// that has not completed terminates with [`StreamError::Cancelled`].
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Token observed by the reader task. Cancelling it is equivalent to
    /// [`StreamingSession::cancel`]; timeouts are modeled by cancelling
    /// this token from a timer, not by a separate mechanism.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }
}

/// One channel's output sequence.
///
/// Yields payload chunks in frame order. After the data buffer drains, the
/// session's terminal outcome is reported exactly once: `None` for normal
/// completion, one final `Err` for failure or cancellation.
#[derive(Debug)]
pub struct ChannelReader {
    channel: Channel,
    rx: mpsc::Receiver<Bytes>,
    status: watch::Receiver<SessionStatus>,
    finished: bool,
}

impl ChannelReader {
    /// Channel this sequence belongs to.
    #[must_use]
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// Waits for the next chunk.
    ///
    /// Returns `None` once the sequence has completed normally and after
    /// any terminal error has been reported.
    pub async fn next_chunk(&mut self) -> Option<Result<Bytes>> {
        if self.finished {
            return None;
        }
        if let Some(chunk) = self.rx.recv().await {
            return Some(Ok(chunk));
        }
        self.finished = true;
        match self.terminal_status() {
            SessionStatus::Complete => None,
            SessionStatus::Failed(err) => Some(Err(err)),
            SessionStatus::Open => Some(Err(StreamError::Transport {
                detail: "session reader vanished".to_string(),
            })),
        }
    }

    /// Drains the sequence to completion, concatenating the chunks.
    ///
    /// # Errors
    ///
    /// Returns the terminal stream error if the session did not complete
    /// normally.
    pub async fn read_to_end(&mut self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        while let Some(chunk) = self.next_chunk().await {
            out.extend_from_slice(&chunk?);
        }
        Ok(out)
    }

    fn terminal_status(&self) -> SessionStatus {
        self.status.borrow().clone()
    }
}

impl tokio_stream::Stream for ChannelReader {
    type Item = Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.finished {
            return Poll::Ready(None);
        }
        match self.rx.poll_recv(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Some(chunk)) => Poll::Ready(Some(Ok(chunk))),
            Poll::Ready(None) => {
                self.finished = true;
                Poll::Ready(match self.terminal_status() {
                    SessionStatus::Complete => None,
                    SessionStatus::Failed(err) => Some(Err(err)),
                    SessionStatus::Open => Some(Err(StreamError::Transport {
                        detail: "session reader vanished".to_string(),
                    })),
                })
            }
        }
    }
}

/// Reader task: drives the transport, then publishes the terminal status.
async fn run_session<R>(
    transport: R,
    format: StreamFormat,
    config: SessionConfig,
    senders: Vec<mpsc::Sender<Bytes>>,
    status_tx: watch::Sender<SessionStatus>,
    token: CancellationToken,
) where
    R: AsyncRead + Send + Unpin + 'static,
{
    let mut transport = transport;
    let outcome = drive(&mut transport, format, &config, &senders, &token).await;

    // Release the transport before signalling, so a consumer that observes
    // the terminal status can rely on the connection being gone.
    drop(transport);

    let status = match outcome {
        Ok(()) => SessionStatus::Complete,
        Err(err) => {
            tracing::debug!(error = %err, "streaming session ended with error");
            SessionStatus::Failed(err)
        }
    };
    let _ = status_tx.send(status);
    // Senders drop here; each channel drains its buffer, then reports the
    // terminal status.
}

/// Read loop. Returns `Ok(())` only on clean end of stream.
async fn drive<R>(
    transport: &mut R,
    format: StreamFormat,
    config: &SessionConfig,
    senders: &[mpsc::Sender<Bytes>],
    token: &CancellationToken,
) -> Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut buf = BytesMut::with_capacity(config.read_buffer_size);
    let mut demuxer = FrameDemuxer::new(config.max_frame_size);

    loop {
        match format {
            StreamFormat::Multiplexed => {
                while let Some(frame) = demuxer.next_frame(&mut buf)? {
                    dispatch(senders, frame, token).await?;
                }
            }
            StreamFormat::Raw => {
                if !buf.is_empty() {
                    let frame = Frame {
                        channel: Channel::Stdout,
                        payload: buf.split().freeze(),
                    };
                    dispatch(senders, frame, token).await?;
                }
            }
        }

        let read = tokio::select! {
            biased;

            () = token.cancelled() => return Err(StreamError::Cancelled),
            read = transport.read_buf(&mut buf) => read?,
        };

        if read == 0 {
            if format == StreamFormat::Multiplexed {
                demuxer.finish(&buf)?;
            }
            return Ok(());
        }
    }
}

/// Sends one frame to its channel, with cancellation taking priority over
/// a blocked (backpressured) send.
async fn dispatch(
    senders: &[mpsc::Sender<Bytes>],
    frame: Frame,
    token: &CancellationToken,
) -> Result<()> {
    let tx = &senders[frame.channel.selector() as usize];
    tokio::select! {
        biased;

        () = token.cancelled() => Err(StreamError::Cancelled),
        sent = tx.send(frame.payload) => {
            // A consumer that dropped its reader discards that channel;
            // the other channels keep flowing.
            let _ = sent;
            Ok(())
        }
    }
}
