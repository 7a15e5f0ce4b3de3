//! Engine-level entities.

use serde::{Deserialize, Serialize};

/// Engine version description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Version {
    /// Engine version.
    pub version: String,
    /// Negotiated API version.
    pub api_version: String,
    /// Oldest API version the engine still serves.
    #[serde(rename = "MinAPIVersion")]
    pub min_api_version: String,
    /// Git commit of the engine build.
    pub git_commit: String,
    /// Go version of the engine build.
    pub go_version: String,
    /// Operating system.
    pub os: String,
    /// CPU architecture.
    pub arch: String,
    /// Host kernel version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_version: Option<String>,
    /// Build timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_time: Option<String>,
}

/// Engine host description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SystemInfo {
    /// Total number of containers.
    pub containers: i64,
    /// Number of running containers.
    pub containers_running: i64,
    /// Number of paused containers.
    pub containers_paused: i64,
    /// Number of stopped containers.
    pub containers_stopped: i64,
    /// Number of images.
    pub images: i64,
    /// Engine version.
    pub server_version: String,
    /// Operating system name.
    pub operating_system: String,
    /// OS family.
    #[serde(rename = "OSType")]
    pub os_type: String,
    /// CPU architecture.
    pub architecture: String,
    /// Number of CPUs.
    #[serde(rename = "NCPU")]
    pub ncpu: i64,
    /// Total memory in bytes.
    pub mem_total: i64,
    /// Host name.
    pub name: String,
    /// Engine instance ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// Engine data root directory.
    pub docker_root_dir: String,
    /// Whether debug mode is enabled.
    pub debug: bool,
    /// Host kernel version.
    pub kernel_version: String,
}
