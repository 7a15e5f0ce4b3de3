//! Engine event feed entities.
//!
//! Events arrive as a stream of newline-separated JSON documents. The wire
//! mixes casings: the structured fields introduced in API 1.22 are
//! PascalCase, the legacy lowercase fields they superseded are still
//! emitted alongside them by newer engines. Both overlays decode
//! independently; neither is required, and no reconciliation happens here.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One event emitted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineEvent {
    /// Object type the event concerns (container, image, network, volume).
    /// Absent on pre-1.22 engines.
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Action that occurred (create, start, die, destroy, ...). Absent on
    /// pre-1.22 engines.
    #[serde(rename = "Action", skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Object the event concerns. Absent on pre-1.22 engines.
    #[serde(rename = "Actor", skip_serializing_if = "Option::is_none")]
    pub actor: Option<EventActor>,
    /// Event scope (local or swarm). Absent before API 1.30.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Event time as unix seconds.
    pub time: i64,
    /// Event time as unix nanoseconds. Absent on pre-1.22 engines.
    #[serde(rename = "timeNano", skip_serializing_if = "Option::is_none")]
    pub time_nano: Option<i64>,
    /// Legacy action name, superseded by `action` in API 1.22.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Legacy object ID, superseded by `actor` in API 1.22.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Legacy image reference, superseded by `actor` in API 1.22.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// The object an event concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventActor {
    /// Object ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// Object attributes (name, image, labels, ...).
    #[serde(rename = "Attributes")]
    pub attributes: HashMap<String, String>,
}
