// Queue Catalog - discovered queues of one process, refreshed per stop
use std::sync::{Arc, Weak};
use tracing::debug;

use crate::domain::QueueList;
use crate::port::ProcessHandle;

/// Queue list cache for one process
///
/// Re-runs the runtime's discovery pass whenever the process has stopped
/// since the last pass. Each pass builds new `Queue` objects, which is how
/// consumers get fresh pending items after the target has run.
pub struct QueueCatalog {
    process: Weak<dyn ProcessHandle>,
    queues: QueueList,
    stop_id: Option<u32>,
}

impl QueueCatalog {
    /// Create a catalog for a process
    ///
    /// # Example
    /// ```ignore
    /// let mut catalog = QueueCatalog::new(&process);
    /// for queue in catalog.queues().iter_mut() {
    ///     println!("{:?}: {} pending", queue.name(), queue.pending_items().len());
    /// }
    /// ```
    pub fn new(process: &Arc<dyn ProcessHandle>) -> Self {
        Self {
            process: Arc::downgrade(process),
            queues: QueueList::new(),
            stop_id: None,
        }
    }

    /// Stop id the current list was discovered at
    pub fn stop_id(&self) -> Option<u32> {
        self.stop_id
    }

    /// Force the next `queues()` call to re-discover
    pub fn invalidate(&mut self) {
        self.stop_id = None;
    }

    /// Current queues of the process
    ///
    /// Algorithm:
    /// 1. Process gone: clear and return the empty list
    /// 2. No introspector: return the list unchanged
    /// 3. List empty or stop id changed: clear, re-discover, record stop id
    pub fn queues(&mut self) -> &mut QueueList {
        let Some(process) = self.process.upgrade() else {
            if !self.queues.is_empty() {
                debug!("Owning process gone, dropping queue list");
            }
            self.queues.clear();
            self.stop_id = None;
            return &mut self.queues;
        };

        let Some(introspector) = process.introspector() else {
            return &mut self.queues;
        };

        let stop_id = process.stop_id();
        if self.queues.is_empty() || self.stop_id != Some(stop_id) {
            self.queues.clear();
            introspector.populate_queue_list(&process, &mut self.queues);
            self.stop_id = Some(stop_id);

            debug!(
                pid = process.pid(),
                stop_id = stop_id,
                queues = self.queues.len(),
                "Queue list refreshed"
            );
        }

        &mut self.queues
    }
}
