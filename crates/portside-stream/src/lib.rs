//! # portside-stream
//!
//! Multiplexed stream protocol decoding and per-channel streaming
//! sessions for the container engine API.
//!
//! Streamed endpoints (logs, attach, events, stats) hand back long-lived
//! connections instead of a finite body. This crate covers everything
//! between the raw byte handle and the typed consumer:
//!
//! - [`frame`]: the fixed 8-byte frame codec multiplexing stdin/stdout/
//!   stderr over one connection.
//! - [`demux`]: the incremental state machine splitting a byte stream
//!   into frames under bounded memory.
//! - [`session`]: the concurrency wrapper exposing one independently
//!   consumable, back-pressured, cancellable sequence per channel.
//! - [`lines`]: line-delimited JSON streams (events, stats) decoded into
//!   entities from `portside-models`.
//!
//! The transport itself is a collaborator, not part of this crate: a
//! session takes any exclusively owned `AsyncRead` handle plus a
//! [`StreamFormat`] flag the transport derived from response metadata.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod demux;
pub mod error;
pub mod frame;
pub mod lines;
pub mod session;

pub use config::SessionConfig;
pub use demux::FrameDemuxer;
pub use error::{Result, StreamError};
pub use frame::{encode_frame, Channel, Frame, FrameHeader, HEADER_LEN};
pub use lines::{JsonLines, LineDecoder};
pub use session::{ChannelReader, StreamFormat, StreamingSession};
