// Runtime Introspector Port
// Strategy for walking the target's concurrency runtime (queues, pending items)

use std::sync::Arc;

use super::process::ProcessHandle;
use crate::domain::{Queue, QueueList};

/// Runtime-specific walker of target process memory
///
/// Implementations:
/// - SnapshotIntrospector: replays a recorded process snapshot
/// - a live walker per concurrency runtime (outside this workspace)
///
/// Both operations are synchronous and best-effort: they report nothing
/// back, and finding nothing is a valid outcome.
pub trait RuntimeIntrospector: Send + Sync {
    /// Append the queue's not-yet-started work items into its cache
    ///
    /// Called at most once per population attempt, only while the cache is
    /// empty. Use [`Queue::push_pending_item`] to add items.
    fn populate_pending_items(&self, queue: &mut Queue);

    /// Discover the process's queues, pushing counters and addresses in
    ///
    /// The list is empty on entry. Default: the runtime cannot enumerate
    /// queues, so the list stays empty.
    fn populate_queue_list(&self, process: &Arc<dyn ProcessHandle>, queues: &mut QueueList) {
        let _ = (process, queues);
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::domain::{QueueId, WorkItem};
    use std::sync::{Mutex, PoisonError};
    /// Mock introspector with swappable results and call counting
    pub struct MockIntrospector {
        items: Mutex<Vec<WorkItem>>,
        queues: Mutex<Vec<(QueueId, Option<String>)>>,
        call_count: Mutex<usize>,
        discovery_count: Mutex<usize>,
    }
    impl MockIntrospector {
        /// Every populated queue receives a copy of `items`
        pub fn new(items: Vec<WorkItem>) -> Arc<Self> {
            Arc::new(Self {
                items: Mutex::new(items),
                queues: Mutex::new(Vec::new()),
                call_count: Mutex::new(0),
                discovery_count: Mutex::new(0),
            })
        }
        pub fn set_items(&self, items: Vec<WorkItem>) {
            *self.items.lock().unwrap_or_else(PoisonError::into_inner) = items;
        }
        /// Queues reported by the next discovery pass
        pub fn set_queues(&self, queues: Vec<(QueueId, Option<String>)>) {
            *self.queues.lock().unwrap_or_else(PoisonError::into_inner) = queues;
        }
        /// Number of populate_pending_items calls
        pub fn call_count(&self) -> usize {
            *self.call_count.lock().unwrap_or_else(PoisonError::into_inner)
        }
        /// Number of populate_queue_list calls
        pub fn discovery_count(&self) -> usize {
            *self
                .discovery_count
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
        }
    }
    impl RuntimeIntrospector for MockIntrospector {
        fn populate_pending_items(&self, queue: &mut Queue) {
            *self.call_count.lock().unwrap_or_else(PoisonError::into_inner) += 1;

            let items = self
                .items
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone();
            for item in items {
                queue.push_pending_item(item);
            }
        }
        fn populate_queue_list(&self, process: &Arc<dyn ProcessHandle>, queues: &mut QueueList) {
            *self
                .discovery_count
                .lock()
                .unwrap_or_else(PoisonError::into_inner) += 1;

            let specs = self
                .queues
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone();
            for (id, name) in specs {
                // Mock data is trusted to be unique
                let _ = queues.add(Queue::new(process, id, name));
            }
        }
    }
}
