// RuntimeIntrospector over a recorded snapshot
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

use queuescope_core::domain::{Address, Queue, QueueList};
use queuescope_core::port::{ProcessHandle, RuntimeIntrospector};

use crate::snapshot::ProcessSnapshot;

/// Replays the queues and pending items recorded in a [`ProcessSnapshot`]
pub struct SnapshotIntrospector {
    state: Arc<RwLock<ProcessSnapshot>>,
    max_pending_items: usize,
}

impl SnapshotIntrospector {
    /// # Arguments
    /// * `state` - Snapshot shared with the owning process
    /// * `max_pending_items` - Cap on items pushed into one queue
    pub fn new(state: Arc<RwLock<ProcessSnapshot>>, max_pending_items: usize) -> Self {
        Self {
            state,
            max_pending_items,
        }
    }
}

impl RuntimeIntrospector for SnapshotIntrospector {
    fn populate_pending_items(&self, queue: &mut Queue) {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);

        let Some(record) = state.queue(queue.id()) else {
            debug!(queue_id = %queue.id(), "Queue not in snapshot, no pending items");
            return;
        };

        for item in record.pending_items.iter().take(self.max_pending_items) {
            queue.push_pending_item(item.clone());
        }

        if record.pending_items.len() > self.max_pending_items {
            debug!(
                queue_id = %queue.id(),
                recorded = record.pending_items.len(),
                kept = self.max_pending_items,
                "Pending items truncated"
            );
        }
    }

    fn populate_queue_list(&self, process: &Arc<dyn ProcessHandle>, queues: &mut QueueList) {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);

        for record in &state.queues {
            let mut queue = Queue::new(process, record.id, record.name.clone());
            queue.set_kind(record.kind);
            queue.set_running_work_items(record.running);
            queue.set_pending_work_items(record.pending);
            queue.set_native_address(record.address.unwrap_or(Address::INVALID));

            if let Err(e) = queues.add(queue) {
                warn!(queue_id = %record.id, error = %e, "Skipping queue");
            }
        }
    }
}
