//! telemetry/counters.rs
//! Mutable counters collected while packing or unpacking containers.
//!
//! Converted into an immutable `TelemetrySnapshot` at the end of a run.
use std::ops::AddAssign;
use serde::{Deserialize, Serialize};

/// Deterministic counters collected during container processing.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub containers_packed: u64,
    pub containers_unpacked: u64,
    pub bytes_original: u64,
    pub bytes_payload: u64,
    pub bytes_overhead: u64,
}

impl TelemetryCounters {
    /// Record one packed container.
    ///
    /// - `original_len`: input length
    /// - `payload_len`: compressed payload length (without trailer)
    /// - `overhead_len`: trailer bytes
    pub fn add_pack(&mut self, original_len: usize, payload_len: usize, overhead_len: usize) {
        self.containers_packed += 1;
        self.bytes_original += original_len as u64;
        self.bytes_payload += payload_len as u64;
        self.bytes_overhead += overhead_len as u64;
    }

    /// Record one unpacked container.
    pub fn add_unpack(&mut self, original_len: usize, payload_len: usize, overhead_len: usize) {
        self.containers_unpacked += 1;
        self.bytes_original += original_len as u64;
        self.bytes_payload += payload_len as u64;
        self.bytes_overhead += overhead_len as u64;
    }

    /// Total bytes on the container side (payload + trailers).
    pub fn container_bytes(&self) -> u64 {
        self.bytes_payload + self.bytes_overhead
    }

    // Merge per-call counters into a run total without shared state.
    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.containers_packed += other.containers_packed;
        self.containers_unpacked += other.containers_unpacked;
        self.bytes_original += other.bytes_original;
        self.bytes_payload += other.bytes_payload;
        self.bytes_overhead += other.bytes_overhead;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
