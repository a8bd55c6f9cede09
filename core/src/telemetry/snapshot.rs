//! telemetry/snapshot.rs
//! Immutable telemetry snapshot built from counters and a finished timer.

use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};

/// Captures counters, ratio, throughput, stage timings, and elapsed duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub containers_packed: u64,
    pub containers_unpacked: u64,
    pub bytes_original: u64,
    pub bytes_payload: u64,
    pub bytes_overhead: u64,
    /// `bytes_payload / bytes_original`; 0 when nothing was processed. May exceed 1.0
    /// for incompressible input.
    pub compression_ratio: f64,
    pub throughput_original_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let compression_ratio = if counters.bytes_original > 0 {
            counters.bytes_payload as f64 / counters.bytes_original as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_original as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            containers_packed: counters.containers_packed,
            containers_unpacked: counters.containers_unpacked,
            bytes_original: counters.bytes_original,
            bytes_payload: counters.bytes_payload,
            bytes_overhead: counters.bytes_overhead,
            compression_ratio,
            throughput_original_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    /// Stage times never exceed the wall clock of the run.
    pub fn sanity_check(&self) -> bool {
        self.compression_ratio >= 0.0 && self.total_stage_time() <= self.elapsed
    }
}
