//! # portside-models
//!
//! Typed entity model and version-aware response decoding for the container
//! engine API.
//!
//! This crate covers the marshaling half of the client core:
//!
//! - The entity object graph responses decode into (containers, images,
//!   events, stats, exec sessions, engine info). Entities are immutable
//!   values with deep ownership; nothing is shared between parents.
//! - The [`Decoder`], which turns raw JSON payloads into entities under a
//!   pinned API version window, classifying failures with wire-level paths.
//!
//! Wire names follow the engine's capitalization, declared statically per
//! field via serde attributes. Unknown fields are ignored so newer engines
//! within the supported window stay decodable. Deprecated field pairs (the
//! pre-1.20 `Volumes`/`VolumesRW` maps next to `Mounts`, the pre-1.22
//! lowercase event fields next to their structured replacements) decode
//! independently; choosing between them is a caller policy.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod container;
pub mod decode;
pub mod error;
pub mod event;
pub mod exec;
pub mod image;
pub mod stats;
pub mod system;
pub mod version;

pub use decode::Decoder;
pub use error::{DecodeError, Result};
pub use version::ApiVersion;
