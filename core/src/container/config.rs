//! container/config.rs
//! Explicit run configuration, built once by the caller and passed by value.

use crate::compression::Method;
use crate::container::{pack, pack_with_telemetry, unpack, unpack_with_telemetry};
use crate::telemetry::{TelemetryCounters, TelemetryTimer};
use crate::types::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Pack(Method),
    Unpack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DvplConfig {
    pub operation: Operation,
}

impl DvplConfig {
    pub fn pack(method: Method) -> Self {
        Self { operation: Operation::Pack(method) }
    }

    pub fn unpack() -> Self {
        Self { operation: Operation::Unpack }
    }

    pub fn is_pack(&self) -> bool {
        matches!(self.operation, Operation::Pack(_))
    }

    /// Run the configured operation over a whole buffer.
    pub fn apply(&self, input: &[u8]) -> Result<Vec<u8>> {
        match self.operation {
            Operation::Pack(method) => pack(input, method),
            Operation::Unpack => unpack(input),
        }
    }

    pub fn apply_with_telemetry(
        &self,
        input: &[u8],
        counters: &mut TelemetryCounters,
        timer: &mut TelemetryTimer,
    ) -> Result<Vec<u8>> {
        match self.operation {
            Operation::Pack(method) => pack_with_telemetry(input, method, counters, timer),
            Operation::Unpack => unpack_with_telemetry(input, counters, timer),
        }
    }
}

impl Default for DvplConfig {
    fn default() -> Self {
        Self::pack(Method::default())
    }
}
