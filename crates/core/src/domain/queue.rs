// Queue Domain Model

use std::sync::{Arc, Weak};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ids::{Address, QueueId};
use super::work_item::WorkItem;
use crate::port::{ProcessHandle, ThreadHandle};

/// Scheduling discipline of a queue, when the runtime reports it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueKind {
    #[default]
    Unknown,
    Serial,
    Concurrent,
}

impl std::fmt::Display for QueueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueKind::Unknown => write!(f, "UNKNOWN"),
            QueueKind::Serial => write!(f, "SERIAL"),
            QueueKind::Concurrent => write!(f, "CONCURRENT"),
        }
    }
}

/// Debugger-side handle to one work queue in the target process
///
/// Counters and the native address are pushed in by the discovery pass and
/// are never re-derived here. Pending work items are pulled lazily from the
/// process's [`RuntimeIntrospector`](crate::port::RuntimeIntrospector) the
/// first time they are asked for, then cached for the life of this object.
///
/// The owning process is held weakly: a `Queue` may outlive it, and every
/// process-dependent query re-resolves the handle and returns an empty
/// result when it is gone.
#[derive(Debug)]
pub struct Queue {
    process: Weak<dyn ProcessHandle>,
    id: QueueId,
    name: Option<String>,
    kind: QueueKind,
    running_work_items: u32,
    pending_work_items: u32,
    native_address: Address,
    pending_items: Vec<WorkItem>,
}

impl Queue {
    /// Create a queue handle
    ///
    /// # Arguments
    ///
    /// * `process` - Owning process (downgraded, not retained)
    /// * `id` - Process-scoped queue identifier
    /// * `name` - Human-readable label; `None` is distinct from `Some("")`
    pub fn new(process: &Arc<dyn ProcessHandle>, id: QueueId, name: Option<String>) -> Self {
        Self {
            process: Arc::downgrade(process),
            id,
            name,
            kind: QueueKind::Unknown,
            running_work_items: 0,
            pending_work_items: 0,
            native_address: Address::INVALID,
            pending_items: Vec::new(),
        }
    }

    pub fn id(&self) -> QueueId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Caller-facing index of this queue
    ///
    /// Same width as [`QueueId`], so no identifier is ever truncated.
    pub fn index_id(&self) -> u64 {
        self.id.as_u64()
    }

    pub fn kind(&self) -> QueueKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: QueueKind) {
        self.kind = kind;
    }

    pub fn running_work_items(&self) -> u32 {
        self.running_work_items
    }

    pub fn set_running_work_items(&mut self, count: u32) {
        self.running_work_items = count;
    }

    pub fn pending_work_items(&self) -> u32 {
        self.pending_work_items
    }

    pub fn set_pending_work_items(&mut self, count: u32) {
        self.pending_work_items = count;
    }

    /// Address of the runtime's own queue object in target memory
    pub fn native_address(&self) -> Address {
        self.native_address
    }

    pub fn set_native_address(&mut self, address: Address) {
        self.native_address = address;
    }

    /// Resolve the owning process, if it still exists
    pub fn process(&self) -> Option<Arc<dyn ProcessHandle>> {
        self.process.upgrade()
    }

    /// Threads currently servicing this queue
    ///
    /// Recomputed on every call from the process's live thread list, in the
    /// process's order. Empty when the process is gone.
    pub fn threads(&self) -> Vec<Arc<dyn ThreadHandle>> {
        let Some(process) = self.process() else {
            return Vec::new();
        };

        process
            .threads()
            .into_iter()
            .filter(|thread| thread.queue_id() == Some(self.id))
            .collect()
    }

    /// Pending work items, fetched from the runtime on first use
    ///
    /// Algorithm:
    /// 1. Non-empty cache: return it, never re-populate
    /// 2. Process gone: return the empty cache
    /// 3. No introspector for this process: return the empty cache
    /// 4. Otherwise let the introspector append into the cache in place
    ///
    /// There is no error path: every failure reads as "no pending items".
    pub fn pending_items(&mut self) -> &[WorkItem] {
        if self.pending_items.is_empty() {
            self.populate_pending_items();
        }
        &self.pending_items
    }

    /// Pending work items already cached, without asking the runtime
    pub fn cached_pending_items(&self) -> &[WorkItem] {
        &self.pending_items
    }

    /// Append one discovered item (used by introspectors during population)
    pub fn push_pending_item(&mut self, item: WorkItem) {
        self.pending_items.push(item);
    }

    fn populate_pending_items(&mut self) {
        let Some(process) = self.process() else {
            debug!(queue_id = %self.id, "Owning process gone, no pending items");
            return;
        };

        let Some(introspector) = process.introspector() else {
            debug!(
                queue_id = %self.id,
                pid = process.pid(),
                "No runtime introspector, no pending items"
            );
            return;
        };

        introspector.populate_pending_items(self);

        debug!(
            queue_id = %self.id,
            pid = process.pid(),
            items = self.pending_items.len(),
            "Pending work items populated"
        );
    }
}
