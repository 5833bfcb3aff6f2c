// Recorded process state (JSON)
use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use queuescope_core::domain::{Address, DomainError, QueueId, QueueKind, ThreadId, WorkItem};
use queuescope_core::Result;

fn default_true() -> bool {
    true
}

/// One thread as recorded at a stop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadRecord {
    pub tid: ThreadId,
    #[serde(default)]
    pub queue_id: Option<QueueId>,
}

/// One queue as the runtime reported it at a stop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueRecord {
    pub id: QueueId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: QueueKind,
    #[serde(default)]
    pub running: u32,
    #[serde(default)]
    pub pending: u32,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub pending_items: Vec<WorkItem>,
}

/// A process captured at one stop
///
/// # Example
/// ```text
/// {
///   "pid": 4242,
///   "stop_id": 3,
///   "threads": [{ "tid": 1, "queue_id": 1 }],
///   "queues": [{ "id": 1, "name": "com.apple.main-thread", "kind": "SERIAL",
///                "running": 1, "pending": 2, "address": 4295000064,
///                "pending_items": [{ "item_ref": 4295001000, "kind": "BLOCK" }] }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSnapshot {
    pub pid: u64,
    #[serde(default)]
    pub stop_id: u32,
    /// false when the target's concurrency runtime cannot be introspected
    #[serde(default = "default_true")]
    pub runtime_supported: bool,
    #[serde(default)]
    pub threads: Vec<ThreadRecord>,
    #[serde(default)]
    pub queues: Vec<QueueRecord>,
}

impl ProcessSnapshot {
    /// Parse and validate a snapshot
    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot: ProcessSnapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Read, parse and validate a snapshot file
    ///
    /// # Errors
    /// - AppError::Io if the file cannot be read
    /// - AppError::Serialization if it is not a snapshot
    /// - AppError::Domain if ids repeat
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json_str(&json)?;

        info!(
            path = %path.display(),
            pid = snapshot.pid,
            stop_id = snapshot.stop_id,
            threads = snapshot.threads.len(),
            queues = snapshot.queues.len(),
            "Process snapshot loaded"
        );

        Ok(snapshot)
    }

    /// Queue and thread ids must be unique within one stop
    pub fn validate(&self) -> std::result::Result<(), DomainError> {
        let mut queue_ids = HashSet::new();
        for queue in &self.queues {
            if !queue_ids.insert(queue.id) {
                return Err(DomainError::DuplicateQueueId(queue.id));
            }
        }

        let mut thread_ids = HashSet::new();
        for thread in &self.threads {
            if !thread_ids.insert(thread.tid) {
                return Err(DomainError::ValidationError(format!(
                    "duplicate thread id: {}",
                    thread.tid
                )));
            }
        }

        Ok(())
    }

    pub fn queue(&self, id: QueueId) -> Option<&QueueRecord> {
        self.queues.iter().find(|queue| queue.id == id)
    }
}
