//! Live resource statistics entities.
//!
//! The stats endpoint streams one JSON document per sample interval; all
//! wire names are lowercase snake case, unlike the rest of the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One statistics sample for a container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerStats {
    /// Sample time.
    pub read: DateTime<Utc>,
    /// Previous sample time; the zero timestamp on the first sample.
    pub preread: DateTime<Utc>,
    /// Process counts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pids_stats: Option<PidsStats>,
    /// Number of processes, as reported by Windows engines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_procs: Option<u32>,
    /// CPU usage for this sample.
    pub cpu_stats: CpuStats,
    /// CPU usage for the previous sample, used for delta computation.
    pub precpu_stats: CpuStats,
    /// Memory usage.
    pub memory_stats: MemoryStats,
    /// Per-interface network counters; absent for host-network containers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networks: Option<HashMap<String, NetworkStats>>,
}

/// CPU usage counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuStats {
    /// Container CPU usage.
    pub cpu_usage: CpuUsage,
    /// Host CPU usage in nanoseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_cpu_usage: Option<u64>,
    /// Number of online CPUs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online_cpus: Option<u32>,
    /// CFS throttling counters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throttling_data: Option<ThrottlingData>,
}

/// Container CPU time counters, in nanoseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuUsage {
    /// Total CPU time consumed.
    pub total_usage: u64,
    /// Per-CPU breakdown; absent on cgroup v2 hosts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percpu_usage: Option<Vec<u64>>,
    /// Time spent in kernel mode.
    pub usage_in_kernelmode: u64,
    /// Time spent in user mode.
    pub usage_in_usermode: u64,
}

/// CFS throttling counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThrottlingData {
    /// Number of enforcement periods.
    pub periods: u64,
    /// Number of throttled periods.
    pub throttled_periods: u64,
    /// Total throttled time in nanoseconds.
    pub throttled_time: u64,
}

/// Memory usage counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    /// Current usage in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<u64>,
    /// Peak usage in bytes; absent on cgroup v2 hosts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_usage: Option<u64>,
    /// Usage limit in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Raw cgroup counters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<HashMap<String, u64>>,
}

/// Per-interface network counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkStats {
    /// Bytes received.
    pub rx_bytes: u64,
    /// Packets received.
    pub rx_packets: u64,
    /// Receive errors.
    pub rx_errors: u64,
    /// Inbound packets dropped.
    pub rx_dropped: u64,
    /// Bytes sent.
    pub tx_bytes: u64,
    /// Packets sent.
    pub tx_packets: u64,
    /// Send errors.
    pub tx_errors: u64,
    /// Outbound packets dropped.
    pub tx_dropped: u64,
}

/// Process count counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PidsStats {
    /// Current number of processes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u64>,
    /// Process limit; absent when unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}
