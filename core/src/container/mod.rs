//! container/mod.rs
//! Whole-buffer pack and unpack of DVPL containers.
//!
//! Container layout: `payload (packed_len bytes) || trailer (20 bytes)`.
//!
//! - `pack`: pick encoder by method, compress into a pre-sized buffer, checksum, append trailer.
//! - `unpack`: validate trailer, pick decoder by codec family, decode into exactly `original_len` bytes.
//! - Every call is independent; all state lives on the call's stack and in the buffers it returns.

pub mod config;
pub mod pack;
pub mod unpack;

pub use config::*;
pub use pack::*;
pub use unpack::*;

use crate::telemetry::{Stage, TelemetryTimer};

/// Charge `f` to `stage` when a timer is attached; plain call otherwise.
#[inline]
pub(crate) fn timed<T>(timer: &mut Option<&mut TelemetryTimer>, stage: Stage, f: impl FnOnce() -> T) -> T {
    match timer.as_deref_mut() {
        Some(t) => t.time(stage, f),
        None => f(),
    }
}
