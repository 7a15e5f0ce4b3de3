//! Image entities.

use crate::container::ContainerConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Full image description returned by the inspect endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageInfo {
    /// Image ID.
    pub id: String,
    /// Repository tags.
    pub repo_tags: Vec<String>,
    /// Repository digests.
    pub repo_digests: Vec<String>,
    /// Parent image ID.
    pub parent: String,
    /// Commit comment.
    pub comment: String,
    /// Creation time.
    pub created: DateTime<Utc>,
    /// Author.
    pub author: String,
    /// CPU architecture.
    pub architecture: String,
    /// Operating system.
    pub os: String,
    /// Image size in bytes.
    pub size: i64,
    /// Image size including shared layers, in bytes.
    pub virtual_size: i64,
    /// Default container configuration baked into the image.
    pub config: ContainerConfig,
    /// Root filesystem layers.
    #[serde(rename = "RootFS")]
    pub root_fs: RootFs,
}

/// Root filesystem description of an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RootFs {
    /// Filesystem type, normally `layers`.
    #[serde(rename = "Type")]
    pub fs_type: String,
    /// Layer digests, base first.
    pub layers: Vec<String>,
}

/// Image summary returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageSummary {
    /// Image ID.
    pub id: String,
    /// Parent image ID.
    #[serde(rename = "ParentId")]
    pub parent_id: String,
    /// Repository tags.
    pub repo_tags: Vec<String>,
    /// Repository digests.
    pub repo_digests: Vec<String>,
    /// Creation time as unix seconds.
    pub created: i64,
    /// Image size in bytes.
    pub size: i64,
    /// Image size including shared layers, in bytes.
    pub virtual_size: i64,
    /// Bytes shared with other images; absent unless size accounting ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_size: Option<i64>,
    /// Labels; absent when the image carries none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
    /// Number of containers using the image; absent unless counted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub containers: Option<i64>,
}
