//! telemetry/mod.rs
//! Counters, stage timers and immutable snapshots for pack/unpack runs.
//!
//! Notes:
//! - Telemetry is opt-in: `pack`/`unpack` stay pure, the `*_with_telemetry` variants record.
//! - Snapshots are immutable and serde-serializable for CLI or log output.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
