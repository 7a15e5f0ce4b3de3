//! Container entities.
//!
//! Shapes follow engine API v1.43 with the deprecated overlays older
//! revisions still populate. Every entity is a plain immutable value:
//! constructed in one piece by the decoder, never mutated, owned deeply by
//! its parent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Full container description returned by the inspect endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerInfo {
    /// Container ID.
    pub id: String,
    /// Creation time.
    pub created: DateTime<Utc>,
    /// Path to the entrypoint binary.
    pub path: String,
    /// Arguments the entrypoint was launched with.
    pub args: Vec<String>,
    /// Image and runtime configuration.
    pub config: ContainerConfig,
    /// Host-level resource and isolation configuration.
    pub host_config: HostConfig,
    /// Current lifecycle state.
    pub state: ContainerState,
    /// ID of the source image.
    pub image: String,
    /// Network settings.
    pub network_settings: NetworkSettings,
    /// Path to the container's resolv.conf.
    pub resolv_conf_path: String,
    /// Path to the container's hostname file.
    pub hostname_path: String,
    /// Path to the container's hosts file.
    pub hosts_path: String,
    /// Container name.
    pub name: String,
    /// Storage driver.
    pub driver: String,
    /// Exec driver.
    pub exec_driver: String,
    /// SELinux process label.
    pub process_label: String,
    /// SELinux mount label.
    pub mount_label: String,
    /// AppArmor profile.
    pub app_armor_profile: String,
    /// Path to the container log file.
    pub log_path: String,
    /// Number of times the container has been restarted.
    pub restart_count: u64,
    /// IDs of exec sessions running in the container; absent when none exist.
    #[serde(rename = "ExecIDs", skip_serializing_if = "Option::is_none")]
    pub exec_ids: Option<Vec<String>>,
    /// Mount descriptors (API 1.20+, supersedes `volumes`/`volumes_rw`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mounts: Option<Vec<ContainerMount>>,
    /// Container-path to host-path map, populated by pre-1.20 engines only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<HashMap<String, String>>,
    /// Container-path to writable-flag map, populated by pre-1.20 engines only.
    #[serde(rename = "VolumesRW", skip_serializing_if = "Option::is_none")]
    pub volumes_rw: Option<HashMap<String, bool>>,
    /// Cluster node the container is placed on; only populated when the
    /// engine is part of a cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<Node>,
}

/// Cluster placement of a container. Standalone engines never send this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Node {
    /// Node ID.
    pub id: String,
    /// Node IP address.
    pub ip: String,
    /// Node address including port.
    pub addr: String,
    /// Node name.
    pub name: String,
}

/// Container lifecycle state.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerState {
    /// Status (created, running, paused, restarting, removing, exited, dead).
    pub status: String,
    /// Whether the container is running.
    pub running: bool,
    /// Whether the container is paused.
    pub paused: bool,
    /// Whether the container is restarting.
    pub restarting: bool,
    /// Whether the container was killed by the out-of-memory killer.
    #[serde(rename = "OOMKilled")]
    pub oom_killed: bool,
    /// Whether the container is dead.
    pub dead: bool,
    /// PID of the container's init process, 0 when not running.
    pub pid: i64,
    /// Exit code of the last run.
    pub exit_code: i64,
    /// Error message from the last run.
    pub error: String,
    /// When the container was last started.
    pub started_at: DateTime<Utc>,
    /// When the container last exited.
    pub finished_at: DateTime<Utc>,
    /// Health probe state, present when a health check is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,
}

/// Health check state of a container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Health {
    /// Health status (starting, healthy, unhealthy).
    pub status: String,
    /// Number of consecutive failed probes.
    pub failing_streak: u64,
    /// Most recent probe results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<Vec<HealthLog>>,
}

/// A single health probe result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HealthLog {
    /// Probe start time.
    pub start: DateTime<Utc>,
    /// Probe end time.
    pub end: DateTime<Utc>,
    /// Probe exit code.
    pub exit_code: i64,
    /// Probe output.
    pub output: String,
}

/// Image and runtime configuration of a container.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerConfig {
    /// Hostname.
    pub hostname: String,
    /// Domain name.
    pub domainname: String,
    /// User the command runs as.
    pub user: String,
    /// Whether stdin is attached.
    pub attach_stdin: bool,
    /// Whether stdout is attached.
    pub attach_stdout: bool,
    /// Whether stderr is attached.
    pub attach_stderr: bool,
    /// Exposed ports, keyed by `port/protocol`.
    #[allow(clippy::zero_sized_map_values)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposed_ports: Option<HashMap<String, HashMap<(), ()>>>,
    /// Whether a pseudo-TTY is allocated.
    pub tty: bool,
    /// Whether stdin is kept open.
    pub open_stdin: bool,
    /// Whether stdin closes after the first attached client disconnects.
    pub stdin_once: bool,
    /// Environment variables as `KEY=value` entries.
    pub env: Vec<String>,
    /// Command, absent when only an entrypoint is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmd: Option<Vec<String>>,
    /// Image reference the container was created from.
    pub image: String,
    /// Anonymous volume mount points.
    #[allow(clippy::zero_sized_map_values)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<HashMap<String, HashMap<(), ()>>>,
    /// Working directory.
    pub working_dir: String,
    /// Entrypoint override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrypoint: Option<Vec<String>>,
    /// Labels.
    pub labels: HashMap<String, String>,
    /// Signal used to stop the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_signal: Option<String>,
    /// Timeout in seconds before the stop signal escalates to a kill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_timeout: Option<i64>,
}

/// Host-level resource and isolation configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostConfig {
    /// Volume binds in `host:container[:mode]` form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binds: Option<Vec<String>>,
    /// Port bindings, keyed by `port/protocol`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_bindings: Option<HashMap<String, Vec<PortBinding>>>,
    /// Network mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_mode: Option<String>,
    /// Restart policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart_policy: Option<RestartPolicy>,
    /// Whether the container is removed when it exits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_remove: Option<bool>,
    /// Whether the container runs privileged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privileged: Option<bool>,
    /// Memory limit in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<i64>,
    /// Memory plus swap limit in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_swap: Option<i64>,
    /// CPU shares (relative weight).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_shares: Option<i64>,
    /// CPU CFS period in microseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_period: Option<i64>,
    /// CPU CFS quota in microseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_quota: Option<i64>,
    /// PID namespace mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid_mode: Option<String>,
    /// IPC namespace mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipc_mode: Option<String>,
    /// Whether the root filesystem is mounted read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readonly_rootfs: Option<bool>,
    /// Extra `/etc/hosts` entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_hosts: Option<Vec<String>>,
    /// Log driver configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_config: Option<LogConfig>,
}

/// Restart policy of a container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestartPolicy {
    /// Policy name (no, always, unless-stopped, on-failure).
    pub name: String,
    /// Maximum retry count for on-failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_retry_count: Option<i64>,
}

/// One host-side binding of a container port.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PortBinding {
    /// Host IP.
    #[serde(rename = "HostIp", skip_serializing_if = "Option::is_none")]
    pub host_ip: Option<String>,
    /// Host port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_port: Option<String>,
}

/// Log driver configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Driver name.
    #[serde(rename = "Type")]
    pub log_type: String,
    /// Driver options.
    #[serde(rename = "Config")]
    pub config: HashMap<String, String>,
}

/// Network settings of a container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkSettings {
    /// Bridge interface name.
    pub bridge: String,
    /// Default gateway.
    pub gateway: String,
    /// IP address on the default network.
    #[serde(rename = "IPAddress")]
    pub ip_address: String,
    /// IP prefix length on the default network.
    #[serde(rename = "IPPrefixLen")]
    pub ip_prefix_len: i64,
    /// MAC address.
    pub mac_address: String,
    /// Network sandbox ID.
    #[serde(rename = "SandboxID", skip_serializing_if = "Option::is_none")]
    pub sandbox_id: Option<String>,
    /// Path to the network sandbox key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox_key: Option<String>,
    /// Published ports, keyed by `port/protocol`.
    pub ports: HashMap<String, Option<Vec<PortBinding>>>,
    /// Per-network endpoint settings.
    pub networks: HashMap<String, EndpointSettings>,
}

/// Endpoint settings of a container on one network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointSettings {
    /// Network ID.
    #[serde(rename = "NetworkID", skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    /// Endpoint ID.
    #[serde(rename = "EndpointID", skip_serializing_if = "Option::is_none")]
    pub endpoint_id: Option<String>,
    /// Gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    /// IP address.
    #[serde(rename = "IPAddress", skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// IP prefix length.
    #[serde(rename = "IPPrefixLen", skip_serializing_if = "Option::is_none")]
    pub ip_prefix_len: Option<i64>,
    /// MAC address.
    #[serde(rename = "MacAddress", skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
}

/// One mounted filesystem of a container (API 1.20+).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerMount {
    /// Mount type (bind, volume, tmpfs).
    #[serde(rename = "Type")]
    pub mount_type: String,
    /// Volume name, absent for bind mounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Source path on the host.
    pub source: String,
    /// Destination path in the container.
    pub destination: String,
    /// Volume driver, absent for bind mounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    /// Mount mode.
    pub mode: String,
    /// Whether the mount is writable.
    #[serde(rename = "RW")]
    pub rw: bool,
    /// Mount propagation mode.
    pub propagation: String,
}

/// Container summary returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerSummary {
    /// Container ID.
    pub id: String,
    /// Container names, each with a leading slash.
    pub names: Vec<String>,
    /// Image reference.
    pub image: String,
    /// Image ID.
    #[serde(rename = "ImageID")]
    pub image_id: String,
    /// Command the container runs.
    pub command: String,
    /// Creation time as unix seconds.
    pub created: i64,
    /// State name.
    pub state: String,
    /// Human-readable status.
    pub status: String,
    /// Published ports.
    pub ports: Vec<Port>,
    /// Labels.
    pub labels: HashMap<String, String>,
    /// Bytes written to writable layers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_rw: Option<i64>,
    /// Total root filesystem size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_root_fs: Option<i64>,
    /// Mount descriptors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mounts: Option<Vec<ContainerMount>>,
}

/// A published port in a container summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Port {
    /// Port inside the container.
    pub private_port: u16,
    /// Port on the host, absent when unpublished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_port: Option<u16>,
    /// Protocol (tcp, udp, sctp).
    #[serde(rename = "Type")]
    pub port_type: String,
    /// Host IP the port is bound to.
    #[serde(rename = "IP", skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}
