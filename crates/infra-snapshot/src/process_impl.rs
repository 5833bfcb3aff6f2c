// ProcessHandle / ThreadHandle over a recorded snapshot
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

use queuescope_core::domain::{QueueId, ThreadId};
use queuescope_core::port::{ProcessHandle, RuntimeIntrospector, ThreadHandle};
use queuescope_core::Result;

use crate::config::SnapshotConfig;
use crate::introspector_impl::SnapshotIntrospector;
use crate::snapshot::ProcessSnapshot;

/// Thread handle materialized from a [`ThreadRecord`](crate::ThreadRecord)
#[derive(Debug, Clone)]
pub struct SnapshotThread {
    tid: ThreadId,
    queue_id: Option<QueueId>,
}

impl ThreadHandle for SnapshotThread {
    fn id(&self) -> ThreadId {
        self.tid
    }

    fn queue_id(&self) -> Option<QueueId> {
        self.queue_id
    }
}

/// Process backed by a recorded snapshot
///
/// The snapshot is shared with this process's [`SnapshotIntrospector`], so
/// `record_stop` is seen by both. Dropping the last `Arc` models the process
/// going away: queues created from it then read as empty.
pub struct SnapshotProcess {
    state: Arc<RwLock<ProcessSnapshot>>,
    introspector: Arc<SnapshotIntrospector>,
}

impl SnapshotProcess {
    /// Create a process from a validated snapshot
    ///
    /// # Example
    /// ```ignore
    /// let process = SnapshotProcess::new(snapshot, &SnapshotConfig::default());
    /// let handle: Arc<dyn ProcessHandle> = process;
    /// ```
    pub fn new(snapshot: ProcessSnapshot, config: &SnapshotConfig) -> Arc<Self> {
        let state = Arc::new(RwLock::new(snapshot));
        let introspector = Arc::new(SnapshotIntrospector::new(
            state.clone(),
            config.max_pending_items,
        ));
        Arc::new(Self {
            state,
            introspector,
        })
    }

    /// Replace the recorded state, as if the target ran and stopped again
    ///
    /// The stop id always advances, even if the new snapshot carries a stale one.
    pub fn record_stop(&self, mut snapshot: ProcessSnapshot) -> Result<()> {
        snapshot.validate()?;

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if snapshot.stop_id <= state.stop_id {
            snapshot.stop_id = state.stop_id.wrapping_add(1);
        }

        debug!(
            pid = snapshot.pid,
            stop_id = snapshot.stop_id,
            "Recorded process stop"
        );

        *state = snapshot;
        Ok(())
    }
}

impl ProcessHandle for SnapshotProcess {
    fn pid(&self) -> u64 {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .pid
    }

    fn stop_id(&self) -> u32 {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .stop_id
    }

    fn threads(&self) -> Vec<Arc<dyn ThreadHandle>> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .threads
            .iter()
            .map(|record| {
                Arc::new(SnapshotThread {
                    tid: record.tid,
                    queue_id: record.queue_id,
                }) as Arc<dyn ThreadHandle>
            })
            .collect()
    }

    fn introspector(&self) -> Option<Arc<dyn RuntimeIntrospector>> {
        let supported = self
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .runtime_supported;

        if supported {
            Some(self.introspector.clone())
        } else {
            None
        }
    }
}

/// Load the configured snapshot file into a process handle
pub fn load_process(config: &SnapshotConfig) -> Result<Arc<SnapshotProcess>> {
    let snapshot = ProcessSnapshot::from_path(&config.snapshot_path)?;
    Ok(SnapshotProcess::new(snapshot, config))
}
