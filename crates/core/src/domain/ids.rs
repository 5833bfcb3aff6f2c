// Identifiers & Target Addresses

use serde::{Deserialize, Serialize};

/// Thread identifier in the target process
pub type ThreadId = u64;

/// Queue identifier (process-scoped)
///
/// Unique within one process's queue set at any instant, but the runtime may
/// hand the same value to a queue created after the original was destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueueId(u64);

impl QueueId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for QueueId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for QueueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Address in the target process's memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(u64);

impl Address {
    /// Sentinel for "unknown / not resolved"
    pub const INVALID: Address = Address(u64::MAX);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    pub const fn is_valid(&self) -> bool {
        self.0 != u64::MAX
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<u64> for Address {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "{:#x}", self.0)
        } else {
            write!(f, "<invalid>")
        }
    }
}
