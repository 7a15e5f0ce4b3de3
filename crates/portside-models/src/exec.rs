//! Exec session entities.

use serde::{Deserialize, Serialize};

/// Full exec session description returned by the exec inspect endpoint.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExecInfo {
    /// Exec session ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// Whether the session can be removed.
    pub can_remove: bool,
    /// ID of the container the session runs in.
    #[serde(rename = "ContainerID")]
    pub container_id: String,
    /// Key sequence for detaching.
    pub detach_keys: String,
    /// Exit code; absent while the process is still running.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i64>,
    /// Whether stderr is open.
    pub open_stderr: bool,
    /// Whether stdin is open.
    pub open_stdin: bool,
    /// Whether stdout is open.
    pub open_stdout: bool,
    /// Whether the process is still running.
    pub running: bool,
    /// PID of the exec'd process on the host.
    pub pid: i64,
    /// Description of the exec'd process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_config: Option<ProcessConfig>,
}

/// Description of an exec'd process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessConfig {
    /// Arguments to the entrypoint.
    pub arguments: Vec<String>,
    /// Entrypoint binary.
    pub entrypoint: String,
    /// Whether the process runs privileged.
    pub privileged: bool,
    /// Whether a pseudo-TTY is allocated.
    pub tty: bool,
    /// User the process runs as.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}
